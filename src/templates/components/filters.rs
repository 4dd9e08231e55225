use crate::surface::Element;
use maud::{html, Markup};
use serde_json::json;
use std::time::Duration;

/// Every filter control and focus button submits through this one form, so a
/// request always carries the full filter state.
pub const FILTER_FORM_ID: &str = "directory-filters";

pub fn category_select(control: Element, name: &str, categories: &[String], selected: &str) -> Markup {
    html! {
        select
            id=(control.id())
            name=(name)
            form=(FILTER_FORM_ID)
            class="form-select"
            onchange="this.form.submit()"
        {
            option value="" selected[selected.is_empty()] { "Все категории" }
            @for category in categories {
                option value=(category) selected[category == selected] { (category) }
            }
        }
    }
}

pub fn search_input(control: Element, name: &str, value: &str) -> Markup {
    html! {
        input
            type="search"
            id=(control.id())
            name=(name)
            form=(FILTER_FORM_ID)
            value=(value)
            class="form-control"
            placeholder="Поиск по названию"
            autocomplete="off";
    }
}

/// Submits the filter form once `control` has had no input for `quiet`.
/// Every keystroke restarts the wait. The submit carries no button, so no
/// focus action rides along. After the reload the caret goes back to the
/// end of the search text.
pub fn search_debounce_script(control: Element, quiet: Duration) -> String {
    format!(
        r#"(function () {{
  const box = document.getElementById({id});
  if (!box) return;
  if (box.value) {{
    box.focus();
    box.setSelectionRange(box.value.length, box.value.length);
  }}
  let timer = null;
  box.addEventListener("input", function () {{
    clearTimeout(timer);
    timer = setTimeout(function () {{ box.form.requestSubmit(); }}, {ms});
  }});
}})();"#,
        id = json!(control.id()),
        ms = quiet.as_millis(),
    )
}
