// templates/pages/directory.rs

use crate::domain::Directory;
use crate::surface::{Document, Element, LeafletMap, PageSurface};
use crate::templates::components::{category_select, search_debounce_script, search_input};
use crate::templates::site_layout;
use maud::{html, Markup, PreEscaped};
use serde_json::json;
use std::time::Duration;

/// Options offered by the two category selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOptions {
    pub companies: Vec<String>,
    pub listings: Vec<String>,
}

impl CategoryOptions {
    pub fn from_directory(directory: &Directory) -> Self {
        Self {
            companies: owned(directory.company_categories()),
            listings: owned(directory.listing_categories()),
        }
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

/// `search_quiet` is how long the search box waits after the last keystroke
/// before it submits the filters.
pub fn directory_page(
    document: &Document,
    map: &LeafletMap,
    options: &CategoryOptions,
    search_quiet: Duration,
) -> Markup {
    let stat = |el: Element| document.text(el).unwrap_or("0").to_string();

    let content = html! {
        section class="row g-3 mb-4" {
            div class="col-6 col-md-3" {
                div class="card card-body" {
                    div class="text-muted small" { "Компаний" }
                    div class="h4 mb-0" id=(Element::StatCompanies.id()) { (stat(Element::StatCompanies)) }
                }
            }
            div class="col-6 col-md-3" {
                div class="card card-body" {
                    div class="text-muted small" { "Объявлений" }
                    div class="h4 mb-0" id=(Element::StatListings.id()) { (stat(Element::StatListings)) }
                }
            }
        }

        section id=(Element::MapSection.id()) class="mb-5" {
            div id=(Element::LeafletMap.id()) style="height: 420px" {}
        }

        section id="companies" class="mb-5" {
            h2 class="h4 mb-3" { "Компании" }
            div class="row g-2 mb-3" {
                div class="col-md-4" {
                    (category_select(
                        Element::CompanyCategory,
                        "company_category",
                        &options.companies,
                        &document.control_value(Element::CompanyCategory),
                    ))
                }
                div class="col-md-8" {
                    (search_input(Element::CompanySearch, "q", &document.control_value(Element::CompanySearch)))
                }
            }
            div id=(Element::CompanyList.id()) class="row g-3" {
                (document.content(Element::CompanyList))
            }
        }

        section id="listings" class="mb-5" {
            h2 class="h4 mb-3" { "Объявления" }
            div class="row g-2 mb-3" {
                div class="col-md-4" {
                    (category_select(
                        Element::ListingCategory,
                        "listing_category",
                        &options.listings,
                        &document.control_value(Element::ListingCategory),
                    ))
                }
            }
            div id=(Element::ListingList.id()) class="row g-3" {
                (document.content(Element::ListingList))
            }
        }
    };

    let scripts = html! {
        script { (PreEscaped(map.script())) }
        script { (PreEscaped(search_debounce_script(Element::CompanySearch, search_quiet))) }
        @if let Some(target) = document.scroll_target() {
            script {
                (PreEscaped(format!(
                    "document.getElementById({}).scrollIntoView({{ behavior: \"smooth\" }});",
                    json!(target.id())
                )))
            }
        }
        @for message in document.notifications() {
            script { (PreEscaped(format!("alert({});", json!(message)).replace("</", "<\\/"))) }
        }
    };

    site_layout("Справочник Экибастуза", document, content, scripts)
}
