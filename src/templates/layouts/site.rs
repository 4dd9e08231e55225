use crate::surface::{Document, Element};
use crate::templates::components::FILTER_FORM_ID;
use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

pub fn site_layout(title: &str, document: &Document, content: Markup, scripts: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(LEAFLET_JS) {}
            }
            body {
                header class="d-flex align-items-center justify-content-between px-4 py-3 shadow-sm" {
                    h1 class="h5 mb-0" { (title) }
                    nav {
                        a href="#map" class="me-3" { "Карта" }
                        a href="#companies" class="me-3" { "Компании" }
                        a href="#listings" { "Объявления" }
                    }
                }
                form id=(FILTER_FORM_ID) method="get" action="/" {
                    // First submit button of the form, so Enter in a filter
                    // control submits without a focus target.
                    button type="submit" class="visually-hidden" tabindex="-1" aria-hidden="true" { "Найти" }
                }
                main class="container py-4" {
                    (content)
                }
                footer class="container py-4 text-muted small" {
                    "© " span id=(Element::Year.id()) { (document.text(Element::Year).unwrap_or("")) }
                }
                (scripts)
            }
        }
    }
}
