pub mod cart;
pub mod menu;

pub use cart::{Cart, CartLine};
pub use menu::{full_menu, MenuItem};
