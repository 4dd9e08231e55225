pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{company_card, company_popup, error_page, listing_card};
pub use layouts::site::site_layout;
pub use pages::directory::{directory_page, CategoryOptions};
