//! Collaborators the view model draws on: the map and the page.
//!
//! The view model only ever talks to these traits. The HTTP host backs them
//! with [`LeafletMap`] and [`Document`]; tests back them with recorders.

pub mod document;
pub mod leaflet;

pub use document::Document;
pub use leaflet::LeafletMap;

use crate::domain::LatLng;
use maud::Markup;

/// Page elements the directory reads from or renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Container the map is bound to.
    LeafletMap,
    /// Section wrapping the map; scrolled into view on focus.
    MapSection,
    CompanyList,
    ListingList,
    StatCompanies,
    StatListings,
    Year,
    CompanyCategory,
    CompanySearch,
    ListingCategory,
}

impl Element {
    pub const fn id(self) -> &'static str {
        match self {
            Element::LeafletMap => "leafletMap",
            Element::MapSection => "map",
            Element::CompanyList => "companyList",
            Element::ListingList => "listingList",
            Element::StatCompanies => "statCompanies",
            Element::StatListings => "statListings",
            Element::Year => "year",
            Element::CompanyCategory => "companyCategory",
            Element::CompanySearch => "companySearch",
            Element::ListingCategory => "listingCategory",
        }
    }
}

/// Handle to a marker created through [`MapSurface::create_marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

pub trait MapSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8);
    fn add_tile_layer(&mut self, layer: &TileLayer);
    /// Creates a marker at `at`. The marker is not on the map until
    /// [`MapSurface::add_marker`] is called.
    fn create_marker(&mut self, at: LatLng) -> MarkerId;
    fn bind_popup(&mut self, marker: MarkerId, popup: Markup);
    /// Adding a marker that is already on the map is a no-op.
    fn add_marker(&mut self, marker: MarkerId);
    /// Removing a marker that is not on the map is a no-op.
    fn remove_marker(&mut self, marker: MarkerId);
    fn open_popup(&mut self, marker: MarkerId);
}

pub trait PageSurface {
    /// Replaces everything rendered inside `target`.
    fn replace_content(&mut self, target: Element, content: Markup);
    fn append_card(&mut self, target: Element, card: Markup);
    fn set_text(&mut self, target: Element, text: &str);
    /// Current value of an input control; empty when never set.
    fn control_value(&self, control: Element) -> String;
    /// Host side of an input: what the user typed or selected.
    fn set_control_value(&mut self, control: Element, value: &str);
    fn scroll_into_view(&mut self, target: Element);
    /// Blocking, user-visible notification.
    fn notify(&mut self, message: &str);
}
