pub mod use_cart;
pub mod use_sheet;

pub use use_cart::{use_cart, UseCartHandle};
pub use use_sheet::{use_sheet, UseSheetHandle};
