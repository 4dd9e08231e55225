use crate::surface::{Element, PageSurface};
use maud::{Markup, PreEscaped};
use std::collections::HashMap;

/// In-memory page: rendered content, text and control values per element.
/// The page template reads it back when the response is built.
#[derive(Debug, Clone, Default)]
pub struct Document {
    content: HashMap<Element, String>,
    text: HashMap<Element, String>,
    controls: HashMap<Element, String>,
    scroll_target: Option<Element>,
    notifications: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered into `target` so far (empty if nothing).
    pub fn content(&self, target: Element) -> Markup {
        PreEscaped(self.content.get(&target).cloned().unwrap_or_default())
    }

    pub fn text(&self, target: Element) -> Option<&str> {
        self.text.get(&target).map(String::as_str)
    }

    pub fn scroll_target(&self) -> Option<Element> {
        self.scroll_target
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl PageSurface for Document {
    fn replace_content(&mut self, target: Element, content: Markup) {
        self.content.insert(target, content.into_string());
    }

    fn append_card(&mut self, target: Element, card: Markup) {
        self.content
            .entry(target)
            .or_default()
            .push_str(&card.into_string());
    }

    fn set_text(&mut self, target: Element, text: &str) {
        self.text.insert(target, text.to_string());
    }

    fn control_value(&self, control: Element) -> String {
        self.controls.get(&control).cloned().unwrap_or_default()
    }

    fn set_control_value(&mut self, control: Element, value: &str) {
        self.controls.insert(control, value.to_string());
    }

    fn scroll_into_view(&mut self, target: Element) {
        self.scroll_target = Some(target);
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
