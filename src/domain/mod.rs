pub mod company;
pub mod filter;
pub mod listing;

pub use company::{Company, LatLng};
pub use filter::{CompanyFilter, ListingFilter};
pub use listing::Listing;

/// Both datasets, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub companies: Vec<Company>,
    pub listings: Vec<Listing>,
}

impl Directory {
    pub fn new(companies: Vec<Company>, listings: Vec<Listing>) -> Self {
        Self {
            companies,
            listings,
        }
    }

    /// Looks a company up by its name, which is its identity within a load.
    pub fn company_by_name(&self, name: &str) -> Option<(usize, &Company)> {
        self.companies
            .iter()
            .enumerate()
            .find(|(_, c)| c.name == name)
    }

    /// Distinct company categories, in the order they first appear.
    pub fn company_categories(&self) -> Vec<&str> {
        distinct(self.companies.iter().map(|c| c.category.as_str()))
    }

    /// Distinct listing categories, in the order they first appear.
    pub fn listing_categories(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.category.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}
