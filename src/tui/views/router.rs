//! Menu index → view constructor. Stateless.

use crate::tui::views::about::AboutView;
use crate::tui::views::add_product::AddProductView;
use crate::tui::views::delete_product::DeleteProductView;
use crate::tui::views::home::HomeView;
use crate::tui::views::show_products::ShowProductsView;
use crate::tui::views::update_product::UpdateProductView;
use crate::tui::views::{View, ViewContext, ViewSession};

pub const MENU_ITEMS: [&str; 7] = [
    "Home",
    "Add product",
    "Show products",
    "Update product",
    "Delete product",
    "About",
    "Exit",
];

pub const HOME: usize = 0;
pub const ADD_PRODUCT: usize = 1;
pub const SHOW_PRODUCTS: usize = 2;
pub const UPDATE_PRODUCT: usize = 3;
pub const DELETE_PRODUCT: usize = 4;
pub const ABOUT: usize = 5;
pub const EXIT: usize = 6;

pub fn title(index: usize) -> &'static str {
    MENU_ITEMS.get(index).copied().unwrap_or("?")
}

/// Construct the view for `index`. `None` means terminate.
pub fn build(index: usize, ctx: &ViewContext<'_>, session: ViewSession) -> Option<Box<dyn View>> {
    let view: Box<dyn View> = match index {
        HOME => Box::new(HomeView::new(ctx, session)),
        ADD_PRODUCT => Box::new(AddProductView::new(ctx, session)),
        SHOW_PRODUCTS => Box::new(ShowProductsView::new(ctx, session)),
        UPDATE_PRODUCT => Box::new(UpdateProductView::new(ctx, session)),
        DELETE_PRODUCT => Box::new(DeleteProductView::new(ctx, session)),
        ABOUT => Box::new(AboutView::new(ctx, session)),
        _ => return None,
    };
    Some(view)
}
