// src/tests/router_tests/directory_tests.rs

use crate::app::App;
use crate::errors::LoadFailure;
use crate::router::handle;
use crate::session::{SessionSettings, LOAD_FAILURE_MESSAGE};
use crate::tests::utils::{sample_directory, shared};
use astra::{Body, Request};
use http::Method;
use scraper::{Html, Selector};
use std::io::Read;
use std::time::Duration;

fn app() -> App {
    App::new(Ok(shared(sample_directory())), SessionSettings::default())
}

fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

/// Issue a GET against `app` and return the body of a 200 response.
fn page(app: &App, uri: &str) -> String {
    let mut resp = handle(get(uri), app).unwrap();
    assert_eq!(resp.status(), 200);

    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();
    String::from_utf8(body).unwrap()
}

fn texts(body: &str, selector: &str) -> Vec<String> {
    let html = Html::parse_document(body);
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// The Leaflet line that creates marker `i`.
fn marker_line(body: &str, i: usize) -> String {
    let prefix = format!("markers[{i}] = L.marker(");
    body.lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no line for marker {i}"))
        .to_string()
}

#[test]
fn home_lists_everything() {
    let body = page(&app(), "/");

    assert_eq!(
        texts(&body, ".company-card h3"),
        ["Alpha", "Beta", "Gamma Market"]
    );
    assert_eq!(
        texts(&body, ".listing-card h3"),
        ["Repair", "Bike", "Cleaning"]
    );
    assert_eq!(texts(&body, "#statCompanies"), ["3"]);
    assert_eq!(texts(&body, "#statListings"), ["3"]);
    for i in 0..3 {
        assert!(marker_line(&body, i).ends_with(".addTo(map);"));
    }
}

#[test]
fn search_filters_cards_and_markers() {
    let body = page(&app(), "/?q=al");

    assert_eq!(texts(&body, ".company-card h3"), ["Alpha"]);
    assert!(marker_line(&body, 0).ends_with(".addTo(map);"));
    assert!(!marker_line(&body, 1).contains(".addTo(map)"));
    assert!(!marker_line(&body, 2).contains(".addTo(map)"));

    let html = Html::parse_document(&body);
    let search = Selector::parse("#companySearch").unwrap();
    let input = html.select(&search).next().unwrap();
    assert_eq!(input.value().attr("value"), Some("al"));
}

#[test]
fn query_values_are_url_decoded() {
    let body = page(&app(), "/?q=gamma+m%61rket");
    assert_eq!(texts(&body, ".company-card h3"), ["Gamma Market"]);
}

#[test]
fn category_filters_combine_with_search() {
    let body = page(&app(), "/?company_category=retail&q=GAM&listing_category=sale");

    assert_eq!(texts(&body, ".company-card h3"), ["Gamma Market"]);
    assert_eq!(texts(&body, ".listing-card h3"), ["Bike"]);
    assert_eq!(
        texts(&body, "#companyCategory option[selected]"),
        ["retail"]
    );
    assert_eq!(
        texts(&body, "#listingCategory option[selected]"),
        ["sale"]
    );
}

#[test]
fn selectors_offer_dataset_categories() {
    let body = page(&app(), "/");

    assert_eq!(
        texts(&body, "#companyCategory option"),
        ["Все категории", "retail", "food"]
    );
    assert_eq!(
        texts(&body, "#listingCategory option"),
        ["Все категории", "services", "sale"]
    );
}

#[test]
fn focus_centres_map_on_the_company() {
    let body = page(&app(), "/?q=be&focus=Beta");

    assert!(body.contains("map.setView([2, 2], 14);"));
    assert!(body.contains("markers[1].openPopup();"));
    assert!(body.contains(r#"document.getElementById("map").scrollIntoView({ behavior: "smooth" });"#));
}

#[test]
fn focus_on_an_unknown_company_changes_nothing() {
    let body = page(&app(), "/?focus=Nobody");

    assert!(body.contains("map.setView([51.729, 75.322], 12);"));
    assert!(!body.contains("openPopup"));
    assert!(!body.contains("scrollIntoView"));
}

#[test]
fn focus_on_a_company_the_filters_hide_leaves_the_map_alone() {
    for uri in ["/?company_category=food&focus=Alpha", "/?q=beta&focus=Alpha"] {
        let body = page(&app(), uri);

        assert_eq!(texts(&body, ".company-card h3"), ["Beta"], "{uri}");
        assert!(body.contains("map.setView([51.729, 75.322], 12);"), "{uri}");
        assert!(!body.contains("map.setView([1, 1], 14);"), "{uri}");
        assert!(!body.contains("openPopup"), "{uri}");
        assert!(!body.contains("scrollIntoView"), "{uri}");
    }
}

#[test]
fn enter_in_a_filter_control_submits_without_a_focus_target() {
    let body = page(&app(), "/");
    let html = Html::parse_document(&body);
    let form_id = crate::templates::components::FILTER_FORM_ID;

    // The browser's default button is the form's first submit button in
    // tree order, counting buttons attached with `form=`.
    let submit = Selector::parse("button[type=submit]").unwrap();
    let in_form = Selector::parse(&format!("#{form_id} button[type=submit]")).unwrap();
    let nested: Vec<_> = html.select(&in_form).map(|b| b.id()).collect();
    let default_button = html
        .select(&submit)
        .find(|b| nested.contains(&b.id()) || b.value().attr("form") == Some(form_id))
        .expect("the filter form has a submit button");

    assert!(nested.contains(&default_button.id()));
    assert_eq!(default_button.value().attr("name"), None);
    assert_eq!(default_button.value().attr("value"), None);
}

#[test]
fn search_box_submits_after_the_configured_quiet_period() {
    let settings = SessionSettings {
        search_quiet: Duration::from_millis(150),
        ..SessionSettings::default()
    };
    let app = App::new(Ok(shared(sample_directory())), settings);
    let body = page(&app, "/");

    let script = body
        .split("<script>")
        .find(|chunk| chunk.contains(r#"getElementById("companySearch")"#))
        .expect("search box script is emitted");
    assert!(script.contains(r#"addEventListener("input""#));
    assert!(script.contains("clearTimeout(timer);"));
    assert!(script.contains("box.form.requestSubmit(); }, 150);"));
}

#[test]
fn search_box_wait_defaults_to_300_ms() {
    let body = page(&app(), "/");
    assert!(body.contains("box.form.requestSubmit(); }, 300);"));
}

#[test]
fn company_cards_carry_their_focus_control() {
    let body = page(&app(), "/?company_category=food");
    let html = Html::parse_document(&body);
    let button = Selector::parse(".company-card button[name=focus]").unwrap();
    let values: Vec<_> = html
        .select(&button)
        .map(|b| b.value().attr("value").unwrap_or_default().to_string())
        .collect();

    assert_eq!(values, ["Beta"]);
}

#[test]
fn markup_in_data_is_escaped() {
    let mut directory = sample_directory();
    directory.companies[0].name = "<script>alert(1)</script>".to_string();
    let app = App::new(Ok(shared(directory)), SessionSettings::default());

    let body = page(&app, "/");
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn failed_load_renders_empty_page_with_alert() {
    let app = App::new(
        Err(LoadFailure::new("listings.json: 404")),
        SessionSettings::default(),
    );
    let body = page(&app, "/?q=al&focus=Alpha");

    assert!(texts(&body, ".company-card").is_empty());
    assert!(texts(&body, ".listing-card").is_empty());
    assert_eq!(texts(&body, "#statCompanies"), ["0"]);
    assert_eq!(body.matches("alert(").count(), 1);
    assert!(body.contains(&format!("alert(\"{LOAD_FAILURE_MESSAGE}\");")));
    assert!(!body.contains("markers[0]"));
    assert_eq!(texts(&body, "#companyCategory option"), ["Все категории"]);
}

#[test]
fn footer_shows_the_current_year() {
    use chrono::Datelike;

    let body = page(&app(), "/");
    let year = chrono::Local::now().year().to_string();
    assert_eq!(texts(&body, "#year"), [year]);
}
