use crate::model::{MenuCategory, MenuItem};
use std::sync::Arc;

pub type DynMenuRepository = Arc<dyn MenuRepositoryTrait + Send + Sync>;
pub type DynMenuService = Arc<dyn MenuServiceTrait + Send + Sync>;

pub trait MenuRepositoryTrait {
    fn find_all(&self) -> Vec<MenuItem>;
    fn find_by_id(&self, id: &str) -> Option<MenuItem>;
}

pub trait MenuServiceTrait {
    fn find_all(&self) -> Vec<MenuItem>;
    fn group_by_category(&self) -> Vec<MenuCategory>;
}
