/// Base URL for menu photos.
/// Configurable at compile time via the CDN_URL env var (see build.rs).
pub const CDN_URL: &str = match option_env!("CDN_URL") {
    Some(url) => url,
    None => "https://cdn.poehali.dev/projects/846d26ec-eea5-49de-abd3-3bffbfd04a10/files",
};

pub const CONTACT_PHONE: &str = "+7 (900) 123-45-67";
pub const CONTACT_PHONE_HREF: &str = "tel:+79001234567";
pub const CONTACT_EMAIL: &str = "info@shashlik-express.ru";
pub const CONTACT_ADDRESS: &str = "г. Москва, ул. Примерная, 123";
pub const WORKING_HOURS: &str = "Ежедневно: 10:00 - 23:00";
