use serde::{Deserialize, Serialize};

/// A classified ad from `listings.json`. Price and date are kept as the
/// display strings the data file carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub category: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub phone: String,
    pub date: String,
}

impl Listing {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// CSS class for the category badge, e.g. `badge-services`.
    pub fn badge_class(&self) -> String {
        format!("badge badge-cat badge-{} mb-2", self.category)
    }
}
