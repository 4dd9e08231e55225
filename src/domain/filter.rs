// src/domain/filter.rs

use crate::domain::{Company, Listing};

/// Filter applied to the company list and the map markers.
///
/// An empty `category` means "any category". `search` is matched against the
/// company name, case-insensitively, after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    pub category: String,
    pub search: String,
}

impl CompanyFilter {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    pub fn matches(&self, company: &Company) -> bool {
        let by_category = self.category.is_empty() || company.category == self.category;
        let query = self.search.trim().to_lowercase();
        let by_name = query.is_empty() || company.name.to_lowercase().contains(&query);
        by_category && by_name
    }

    /// Visibility of every company, index-aligned with `companies`.
    ///
    /// Cards and markers are both derived from this one mask so they can
    /// never disagree.
    pub fn visibility(&self, companies: &[Company]) -> Vec<bool> {
        companies.iter().map(|c| self.matches(c)).collect()
    }
}

/// Filter applied to the listing list. An empty `category` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: String,
}

impl ListingFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.category.is_empty() || listing.category == self.category
    }

    pub fn select<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

