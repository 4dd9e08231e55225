// src/tests/utils.rs

use crate::domain::{Company, Directory, LatLng, Listing};
use crate::errors::LoadFailure;
use crate::loader::DataSource;
use crate::surface::{Element, MapSurface, MarkerId, PageSurface, TileLayer};
use maud::Markup;
use scraper::{Html, Selector};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::sync::Arc;

pub fn company(name: &str, category: &str, lat: f64, lng: f64) -> Company {
    Company {
        name: name.to_string(),
        category: category.to_string(),
        address: format!("{name} street 1"),
        phone: "+7 700 000 00 00".to_string(),
        website: format!("https://{}.example", name.to_lowercase().replace(' ', "-")),
        hours: None,
        lat,
        lng,
    }
}

pub fn listing(category: &str, title: &str) -> Listing {
    Listing {
        category: category.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        price: "10 000 ₸".to_string(),
        phone: "+7 701 111 11 11".to_string(),
        date: "2024-05-01".to_string(),
    }
}

/// Alpha (retail), Beta (food), Gamma Market (retail, with hours).
pub fn sample_directory() -> Directory {
    let mut gamma = company("Gamma Market", "retail", 3.0, 3.0);
    gamma.hours = Some("09:00–21:00".to_string());

    Directory::new(
        vec![
            company("Alpha", "retail", 1.0, 1.0),
            company("Beta", "food", 2.0, 2.0),
            gamma,
        ],
        vec![
            listing("services", "Repair"),
            listing("sale", "Bike"),
            listing("services", "Cleaning"),
        ],
    )
}

pub fn shared(directory: Directory) -> Arc<Directory> {
    Arc::new(directory)
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    SetView(LatLng, u8),
    AddTileLayer(String),
    CreateMarker(LatLng),
    BindPopup(MarkerId),
    AddMarker(MarkerId),
    RemoveMarker(MarkerId),
    OpenPopup(MarkerId),
}

#[derive(Debug, Default)]
struct MapLog {
    calls: Vec<MapCall>,
    popups: HashMap<MarkerId, String>,
    on_map: BTreeSet<usize>,
    created: usize,
}

/// Map double that records every call and tracks which markers are shown.
///
/// Clones share one log, so a test keeps a clone and inspects it after
/// handing the other one to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    log: Rc<RefCell<MapLog>>,
}

impl RecordingMap {
    pub fn calls(&self) -> Vec<MapCall> {
        self.log.borrow().calls.clone()
    }

    pub fn popup(&self, marker: MarkerId) -> Option<String> {
        self.log.borrow().popups.get(&marker).cloned()
    }

    pub fn popup_count(&self) -> usize {
        self.log.borrow().popups.len()
    }

    pub fn visible(&self) -> Vec<MarkerId> {
        self.log.borrow().on_map.iter().map(|i| MarkerId(*i)).collect()
    }

    pub fn is_on_map(&self, marker: MarkerId) -> bool {
        self.log.borrow().on_map.contains(&marker.0)
    }

    pub fn created(&self) -> usize {
        self.log.borrow().created
    }
}

impl MapSurface for RecordingMap {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.log.borrow_mut().calls.push(MapCall::SetView(center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.log
            .borrow_mut()
            .calls
            .push(MapCall::AddTileLayer(layer.url_template.clone()));
    }

    fn create_marker(&mut self, at: LatLng) -> MarkerId {
        let mut log = self.log.borrow_mut();
        log.calls.push(MapCall::CreateMarker(at));
        log.created += 1;
        MarkerId(log.created - 1)
    }

    fn bind_popup(&mut self, marker: MarkerId, popup: Markup) {
        let mut log = self.log.borrow_mut();
        log.calls.push(MapCall::BindPopup(marker));
        log.popups.insert(marker, popup.into_string());
    }

    fn add_marker(&mut self, marker: MarkerId) {
        let mut log = self.log.borrow_mut();
        log.calls.push(MapCall::AddMarker(marker));
        log.on_map.insert(marker.0);
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        let mut log = self.log.borrow_mut();
        log.calls.push(MapCall::RemoveMarker(marker));
        log.on_map.remove(&marker.0);
    }

    fn open_popup(&mut self, marker: MarkerId) {
        self.log.borrow_mut().calls.push(MapCall::OpenPopup(marker));
    }
}

#[derive(Debug, Default)]
struct PageLog {
    cards: HashMap<Element, Vec<String>>,
    replaced: HashMap<Element, usize>,
    text: HashMap<Element, String>,
    controls: HashMap<Element, String>,
    scrolls: Vec<Element>,
    notifications: Vec<String>,
}

/// Page double keeping each list as the separate cards appended to it.
/// Clones share one log, like [`RecordingMap`].
#[derive(Debug, Clone, Default)]
pub struct RecordingPage {
    log: Rc<RefCell<PageLog>>,
}

impl RecordingPage {
    pub fn cards(&self, list: Element) -> Vec<String> {
        self.log.borrow().cards.get(&list).cloned().unwrap_or_default()
    }

    /// How many times `list` has been rebuilt.
    pub fn renders(&self, list: Element) -> usize {
        self.log.borrow().replaced.get(&list).copied().unwrap_or(0)
    }

    pub fn text(&self, target: Element) -> Option<String> {
        self.log.borrow().text.get(&target).cloned()
    }

    pub fn scrolls(&self) -> Vec<Element> {
        self.log.borrow().scrolls.clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.log.borrow().notifications.clone()
    }

    /// Card headings (`h3`) of `list`, in rendered order.
    pub fn headings(&self, list: Element) -> Vec<String> {
        let h3 = Selector::parse("h3").unwrap();
        self.cards(list)
            .iter()
            .flat_map(|card| {
                let fragment = Html::parse_fragment(card);
                fragment
                    .select(&h3)
                    .map(|el| el.text().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl PageSurface for RecordingPage {
    fn replace_content(&mut self, target: Element, content: Markup) {
        let mut log = self.log.borrow_mut();
        *log.replaced.entry(target).or_default() += 1;
        let content = content.into_string();
        let cards = log.cards.entry(target).or_default();
        cards.clear();
        if !content.is_empty() {
            cards.push(content);
        }
    }

    fn append_card(&mut self, target: Element, card: Markup) {
        self.log
            .borrow_mut()
            .cards
            .entry(target)
            .or_default()
            .push(card.into_string());
    }

    fn set_text(&mut self, target: Element, text: &str) {
        self.log.borrow_mut().text.insert(target, text.to_string());
    }

    fn control_value(&self, control: Element) -> String {
        self.log.borrow().controls.get(&control).cloned().unwrap_or_default()
    }

    fn set_control_value(&mut self, control: Element, value: &str) {
        self.log.borrow_mut().controls.insert(control, value.to_string());
    }

    fn scroll_into_view(&mut self, target: Element) {
        self.log.borrow_mut().scrolls.push(target);
    }

    fn notify(&mut self, message: &str) {
        self.log.borrow_mut().notifications.push(message.to_string());
    }
}

/// Serves fixed documents by path; anything else is a fetch failure.
#[derive(Debug, Default)]
pub struct StaticSource {
    files: HashMap<String, Vec<u8>>,
}

impl StaticSource {
    pub fn with(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), body.into());
        self
    }

    /// Both default dataset paths, filled from `directory`.
    pub fn from_directory(directory: &Directory) -> Self {
        Self::default()
            .with("data/companies.json", serde_json::to_vec(&directory.companies).unwrap())
            .with("data/listings.json", serde_json::to_vec(&directory.listings).unwrap())
    }
}

impl DataSource for StaticSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadFailure> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LoadFailure::new(format!("{path}: not found")))
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
