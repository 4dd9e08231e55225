// src/session.rs

use crate::debounce::Debounce;
use crate::domain::{Directory, LatLng};
use crate::errors::LoadFailure;
use crate::surface::{Element, MapSurface, PageSurface, TileLayer};
use crate::view_model::{DirectoryView, ViewSettings};
use chrono::Datelike;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Text of the blocking notification shown when the datasets fail to load.
pub const LOAD_FAILURE_MESSAGE: &str = "Ошибка загрузки данных";

/// Input events a page can raise. Control values are not carried: they are
/// read from the page when the recomputation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CompanyCategoryChanged,
    CompanySearchInput,
    ListingCategoryChanged,
    /// A card's focus control was clicked; `company` is the name it carries.
    FocusRequested { company: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub view: ViewSettings,
    /// How long the search box must be quiet before the list is recomputed.
    pub search_quiet: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            center: LatLng::new(51.729, 75.322),
            zoom: 12,
            tiles: TileLayer {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "&copy; OpenStreetMap contributors".to_string(),
                max_zoom: 19,
            },
            view: ViewSettings::default(),
            search_quiet: Duration::from_millis(300),
        }
    }
}

enum Phase<M, P> {
    Ready(DirectoryView<M, P>),
    /// Loading failed; the page stays as it was before the load.
    Failed { map: M, page: P },
}

/// One page worth of directory state, driven by UI events on a single
/// thread.
pub struct Session<M, P> {
    phase: Phase<M, P>,
    search: Debounce,
}

impl<M, P> Session<M, P>
where
    M: MapSurface,
    P: PageSurface,
{
    /// Mounts the map and either initializes the directory view or, if the
    /// load failed, reports the failure once and leaves the page empty.
    pub fn open(
        outcome: Result<Arc<Directory>, LoadFailure>,
        mut map: M,
        mut page: P,
        settings: &SessionSettings,
    ) -> Self {
        map.set_view(settings.center, settings.zoom);
        map.add_tile_layer(&settings.tiles);
        page.set_text(Element::Year, &chrono::Local::now().year().to_string());

        let phase = match outcome {
            Ok(directory) => Phase::Ready(DirectoryView::initialize(directory, map, page, settings.view)),
            Err(failure) => {
                error!(error = %failure, "directory data unavailable");
                page.notify(LOAD_FAILURE_MESSAGE);
                Phase::Failed { map, page }
            }
        };

        Self {
            phase,
            search: Debounce::new(settings.search_quiet),
        }
    }

    pub fn dispatch(&mut self, event: UiEvent, now: Instant) {
        let view = match &mut self.phase {
            Phase::Ready(view) => view,
            Phase::Failed { .. } => {
                debug!(?event, "ignoring input, directory not loaded");
                return;
            }
        };

        match event {
            UiEvent::CompanyCategoryChanged => render_companies_from_controls(view),
            UiEvent::CompanySearchInput => self.search.restart(now),
            UiEvent::ListingCategoryChanged => {
                let category = view.page().control_value(Element::ListingCategory);
                view.render_listings(&category);
            }
            UiEvent::FocusRequested { company } => {
                view.focus_company(&company);
            }
        }
    }

    /// Runs the pending search recomputation if its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.search.fire_if_due(now) {
            return false;
        }
        self.run_search()
    }

    /// When the pending search recomputation is due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    fn run_search(&mut self) -> bool {
        match &mut self.phase {
            Phase::Ready(view) => {
                render_companies_from_controls(view);
                true
            }
            Phase::Failed { .. } => false,
        }
    }

    /// The page as the host sees it, e.g. to record what the user typed.
    pub fn page_mut(&mut self) -> &mut P {
        match &mut self.phase {
            Phase::Ready(view) => view.page_mut(),
            Phase::Failed { page, .. } => page,
        }
    }

    pub fn into_parts(self) -> (M, P) {
        match self.phase {
            Phase::Ready(view) => view.into_parts(),
            Phase::Failed { map, page } => (map, page),
        }
    }
}

fn render_companies_from_controls<M: MapSurface, P: PageSurface>(view: &mut DirectoryView<M, P>) {
    let category = view.page().control_value(Element::CompanyCategory);
    let search = view.page().control_value(Element::CompanySearch);
    view.render_companies(&category, &search);
}
