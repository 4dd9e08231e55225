use crate::domain::Company;
use maud::{html, Markup};

pub fn company_popup(company: &Company) -> Markup {
    html! {
        div class="small" {
            div class="fw-bold" { (company.name) }
            div class="text-muted" { (company.category) }
            div { (company.address) }
            div { a href=(company.tel_href()) { (company.phone) } }
            div { (company.hours_label()) }
            div class="mt-2" {
                a href=(company.website) target="_blank" rel="noopener" class="btn btn-sm btn-primary" {
                    "Сайт компании"
                }
            }
        }
    }
}
