use crate::{
    abstract_trait::{DynMenuRepository, MenuServiceTrait},
    model::{MenuCategory, MenuItem},
};

pub struct MenuService {
    repository: DynMenuRepository,
}

impl MenuService {
    pub fn new(repository: DynMenuRepository) -> Self {
        Self { repository }
    }
}

impl MenuServiceTrait for MenuService {
    fn find_all(&self) -> Vec<MenuItem> {
        self.repository.find_all()
    }

    fn group_by_category(&self) -> Vec<MenuCategory> {
        let mut categories: Vec<MenuCategory> = Vec::new();

        for item in self.repository.find_all() {
            match categories.iter_mut().find(|c| c.name == item.category) {
                Some(category) => category.items.push(item),
                None => categories.push(MenuCategory {
                    name: item.category.clone(),
                    items: vec![item],
                }),
            }
        }

        categories
    }
}
