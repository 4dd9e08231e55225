use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::session::UiEvent;
use crate::surface::{Element, PageSurface};
use crate::templates::directory_page;
use astra::Request;
use std::collections::HashMap;
use std::time::Instant;

/// Longest accepted value for any query parameter.
const MAX_PARAM_LEN: usize = 200;

/// Query parameters that stand for an input control, and the event the
/// control raises when it changes.
const CONTROL_PARAMS: [(&str, Element, UiEvent); 3] = [
    ("company_category", Element::CompanyCategory, UiEvent::CompanyCategoryChanged),
    ("q", Element::CompanySearch, UiEvent::CompanySearchInput),
    ("listing_category", Element::ListingCategory, UiEvent::ListingCategoryChanged),
];

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => directory(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

/// Replays the request's control values as UI events against a fresh
/// session, then renders the resulting page.
fn directory(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);
    if let Some((name, _)) = params.iter().find(|(_, v)| v.chars().count() > MAX_PARAM_LEN) {
        return Err(ServerError::BadRequest(format!("parameter {name} is too long")));
    }

    let mut session = app.open_session();
    let now = Instant::now();

    for (param, control, event) in CONTROL_PARAMS {
        let Some(value) = params.get(param).filter(|v| !v.is_empty()) else {
            continue;
        };
        session.page_mut().set_control_value(control, value);
        session.dispatch(event, now);
    }
    // The request closes the burst of input, so a pending search is due now.
    if let Some(deadline) = session.next_deadline() {
        session.poll(deadline);
    }

    if let Some(company) = params.get("focus").filter(|v| !v.is_empty()) {
        session.dispatch(
            UiEvent::FocusRequested {
                company: company.clone(),
            },
            now,
        );
    }

    let (map, document) = session.into_parts();
    html_response(directory_page(
        &document,
        &map,
        app.category_options(),
        app.search_quiet(),
    ))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
