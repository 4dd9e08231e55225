use crate::domain::{Company, Listing};
use crate::templates::components::FILTER_FORM_ID;
use maud::{html, Markup};

/// Card for one company. The "На карте" control submits the company name as
/// `focus`, so the target is resolved by name when the action arrives.
pub fn company_card(company: &Company) -> Markup {
    html! {
        div class="col-md-4" {
            div class="card card-hover h-100 company-card" {
                div class="card-body" {
                    div class="d-flex justify-content-between align-items-start mb-2" {
                        h3 class="h6 fw-bold mb-0" { (company.name) }
                        span class="badge rounded-pill text-bg-secondary" { (company.category) }
                    }
                    div class="small text-muted" { (company.address) }
                    div class="mt-2" {
                        a href=(company.tel_href()) class="link-body-emphasis" { (company.phone) }
                    }
                    div class="mt-2" { (company.hours_label()) }
                    div class="mt-3 d-flex gap-2" {
                        a href=(company.website) target="_blank" rel="noopener" class="btn btn-sm btn-outline-primary" {
                            i class="fa-solid fa-up-right-from-square me-1" {}
                            "Сайт"
                        }
                        button
                            type="submit"
                            form=(FILTER_FORM_ID)
                            name="focus"
                            value=(company.name)
                            data-focus=(company.name)
                            class="btn btn-sm btn-outline-secondary"
                        {
                            i class="fa-solid fa-location-dot me-1" {}
                            "На карте"
                        }
                    }
                }
            }
        }
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        div class="col-md-4" {
            div class="card card-hover h-100 listing-card" {
                div class="card-body" {
                    span class=(listing.badge_class()) { (listing.category) }
                    h3 class="h6 fw-bold" { (listing.title) }
                    div class="small text-muted" { (listing.description) }
                    div class="mt-2 fw-semibold" { (listing.price) }
                    div class="mt-2 small" {
                        i class="fa-solid fa-phone me-1" {}
                        a href=(listing.tel_href()) class="link-body-emphasis" { (listing.phone) }
                    }
                    div class="mt-1 small text-muted" { (listing.date) }
                }
            }
        }
    }
}
