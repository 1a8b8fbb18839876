use crate::{abstract_trait::MenuRepositoryTrait, model::MenuItem};
use rust_decimal::Decimal;

/// The fixed catalog, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    items: Vec<MenuItem>,
}

impl Default for MenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRepository {
    pub fn new() -> Self {
        Self::with_items(default_menu())
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl MenuRepositoryTrait for MenuRepository {
    fn find_all(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<MenuItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }
}

const KOPI: &str = "Kopi";
const NON_KOPI: &str = "Non-Kopi";
const MAKANAN: &str = "Makanan & Snack";

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    image: &str,
    category: &str,
    rating: f64,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        image: format!("/static/img/menu/{image}"),
        category: category.to_string(),
        rating,
    }
}

#[rustfmt::skip]
fn default_menu() -> Vec<MenuItem> {
    vec![
        item("coffee-espresso", "Espresso", "Kopi pekat yang intens", 25_000, "espresso.jpg", KOPI, 4.5),
        item("coffee-cappuccino", "Cappuccino", "Espresso dengan susu steamed dan foam", 30_000, "cappuccino.jpg", KOPI, 4.8),
        item("coffee-latte", "Latte", "Espresso dengan susu steamed dan sedikit foam", 32_000, "latte.jpg", KOPI, 4.7),
        item("coffee-americano", "Americano", "Espresso dengan air panas", 28_000, "americano.jpg", KOPI, 4.2),
        item("coffee-mocha", "Mocha", "Kopi cokelat yang manis dan creamy", 35_000, "mocha.jpg", KOPI, 4.9),
        item("coffee-macchiato", "Macchiato", "Espresso dengan sedikit sentuhan foam susu", 30_000, "macchiato.jpg", KOPI, 4.3),
        item("coffee-flatwhite", "Flat White", "Espresso dengan susu steamed lembut, kurang foam dari latte", 34_000, "flat_white.jpg", KOPI, 4.6),
        item("coffee-affogato", "Affogato", "Espresso panas yang dituangkan di atas es krim vanila", 38_000, "affogato.jpg", KOPI, 4.7),
        item("noncoffee-greentealatte", "Green Tea Latte", "Matcha terbaik dengan susu steamed", 33_000, "greentea_latte.jpg", NON_KOPI, 4.5),
        item("noncoffee-redvelvet", "Red Velvet Latte", "Minuman manis dengan rasa red velvet yang khas", 35_000, "red_velvet_latte.jpg", NON_KOPI, 4.4),
        item("noncoffee-chocolatefrappe", "Chocolate Frappe", "Minuman cokelat dingin yang diblender dengan es", 40_000, "chocolate_frappe.jpg", NON_KOPI, 4.6),
        item("noncoffee-lemontea", "Lemon Tea", "Teh segar dengan perasan lemon", 25_000, "lemon_tea.jpg", NON_KOPI, 4.1),
        item("food-croissant", "Croissant", "Pastry croissant Prancis", 18_000, "croissant.jpg", MAKANAN, 4.3),
        item("food-redvelvetcake", "Red Velvet Cake", "Kue beludru merah dengan cream cheese frosting", 33_000, "red_velvet_cake.jpg", MAKANAN, 4.8),
        item("food-painauchocolat", "Pain Au Chocolat", "Pastry Prancis dengan isian cokelat", 20_000, "pain_au_chocolat.jpg", MAKANAN, 4.2),
        item("food-blueberrymuffin", "Blueberry Muffin", "Muffin lembut dengan blueberry asli", 22_000, "blueberry_muffin.jpg", MAKANAN, 4.4),
        item("food-chickensandwich", "Chicken Sandwich", "Roti panggang dengan isian ayam dan sayuran segar", 45_000, "chicken_sandwich.jpg", MAKANAN, 4.6),
    ]
}
