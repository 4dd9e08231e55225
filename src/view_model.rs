// src/view_model.rs

use crate::domain::{CompanyFilter, Directory, ListingFilter};
use crate::surface::{Element, MapSurface, MarkerId, PageSurface};
use crate::templates::{company_card, company_popup, listing_card};
use maud::html;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Zoom level used when a company is focused on the map.
    pub focus_zoom: u8,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { focus_zoom: 14 }
    }
}

/// The directory as shown on one page: the loaded datasets, one marker per
/// company, which companies the last filter let through, and the map and
/// page it renders into.
///
/// `markers[i]` and `shown[i]` belong to `directory.companies[i]`.
pub struct DirectoryView<M, P> {
    directory: Arc<Directory>,
    markers: Vec<MarkerId>,
    shown: Vec<bool>,
    settings: ViewSettings,
    map: M,
    page: P,
}

impl<M, P> DirectoryView<M, P>
where
    M: MapSurface,
    P: PageSurface,
{
    /// Binds a marker to every company, fills the counters and renders both
    /// lists unfiltered.
    pub fn initialize(directory: Arc<Directory>, mut map: M, mut page: P, settings: ViewSettings) -> Self {
        page.set_text(Element::StatCompanies, &directory.companies.len().to_string());
        page.set_text(Element::StatListings, &directory.listings.len().to_string());

        let markers = directory
            .companies
            .iter()
            .map(|company| {
                let marker = map.create_marker(company.coordinate());
                map.bind_popup(marker, company_popup(company));
                map.add_marker(marker);
                marker
            })
            .collect();

        let mut view = Self {
            directory,
            markers,
            shown: Vec::new(),
            settings,
            map,
            page,
        };
        view.render_companies("", "");
        view.render_listings("");
        view
    }

    /// Rebuilds the company cards for `category`/`search` and shows exactly
    /// the markers of the companies that pass. Returns the visible count.
    pub fn render_companies(&mut self, category: &str, search: &str) -> usize {
        let filter = CompanyFilter::new(category, search);
        let visibility = filter.visibility(&self.directory.companies);

        self.page.replace_content(Element::CompanyList, html! {});
        for (company, _) in self
            .directory
            .companies
            .iter()
            .zip(&visibility)
            .filter(|(_, visible)| **visible)
        {
            self.page.append_card(Element::CompanyList, company_card(company));
        }

        for (marker, visible) in self.markers.iter().zip(&visibility) {
            if *visible {
                self.map.add_marker(*marker);
            } else {
                self.map.remove_marker(*marker);
            }
        }

        let shown = visibility.iter().filter(|v| **v).count();
        debug!(category, search, shown, "rendered companies");
        self.shown = visibility;
        shown
    }

    /// Rebuilds the listing cards for `category`. Returns the visible count.
    pub fn render_listings(&mut self, category: &str) -> usize {
        let filter = ListingFilter::new(category);
        let visible = filter.select(&self.directory.listings);

        self.page.replace_content(Element::ListingList, html! {});
        for listing in &visible {
            self.page.append_card(Element::ListingList, listing_card(listing));
        }

        let shown = visible.len();
        debug!(category, shown, "rendered listings");
        shown
    }

    /// Centres the map on the named company, opens its popup and scrolls the
    /// map into view. Names that are unknown or filtered out by the last
    /// company render are ignored; returns whether it focused.
    pub fn focus_company(&mut self, name: &str) -> bool {
        let Some((index, company)) = self.directory.company_by_name(name) else {
            debug!(name, "focus target not in directory");
            return false;
        };
        if !self.shown.get(index).copied().unwrap_or(false) {
            debug!(name, "focus target filtered out");
            return false;
        }

        self.map.set_view(company.coordinate(), self.settings.focus_zoom);
        if let Some(marker) = self.markers.get(index) {
            self.map.open_popup(*marker);
        }
        self.page.scroll_into_view(Element::MapSection);
        true
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_parts(self) -> (M, P) {
        (self.map, self.page)
    }
}
