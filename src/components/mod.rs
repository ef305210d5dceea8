pub mod about;
pub mod app;
pub mod cart_sheet;
pub mod contacts;
pub mod delivery;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icon;
pub mod menu_card;
pub mod menu_section;
pub mod promo_banner;

pub use about::AboutSection;
pub use app::App;
pub use cart_sheet::CartSheet;
pub use contacts::ContactsSection;
pub use delivery::DeliverySection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icon::Icon;
pub use menu_card::MenuCard;
pub use menu_section::MenuSection;
pub use promo_banner::PromoBanner;
