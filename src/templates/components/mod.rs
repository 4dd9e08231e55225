pub mod cards;
pub mod error;
pub mod filters;
pub mod popup;

pub use cards::{company_card, listing_card};
pub use error::error_page;
pub use filters::{category_select, search_debounce_script, search_input, FILTER_FORM_ID};
pub use popup::company_popup;
