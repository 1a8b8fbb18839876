mod page;
mod stars;

pub use self::page::{
    AboutTemplate, CartTemplate, ContactInfo, ContactTemplate, GalleryTemplate, HomeTemplate,
    MenuCardView, MenuCategoryView, MenuTemplate, ReceiptLineView, ReceiptTemplate, ReceiptView,
    render,
};
pub use self::stars::{Star, rating_stars};
