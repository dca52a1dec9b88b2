//! In-memory view: keeps every element in maps for inspection.

use super::{Row, View};
use std::collections::HashMap;

/// A view that records what was rendered.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    texts: HashMap<String, String>,
    containers: HashMap<String, Vec<Row>>,
    notifications: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn rows(&self, container: &str) -> &[Row] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl View for MemoryView {
    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn clear(&mut self, container: &str) {
        self.containers.remove(container);
    }

    fn append_row(&mut self, container: &str, row: Row) {
        self.containers
            .entry(container.to_string())
            .or_default()
            .push(row);
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::slots;

    #[test]
    fn test_set_text_overwrites() {
        let mut view = MemoryView::new();
        view.set_text("balance", "1");
        view.set_text("balance", "2");
        assert_eq!(view.text("balance"), Some("2"));
        assert_eq!(view.text("missing"), None);
    }

    #[test]
    fn test_clear_then_append() {
        let mut view = MemoryView::new();
        view.append_row("list", Row::new().slot(slots::ID, "1"));
        view.append_row("list", Row::new().slot(slots::ID, "2"));
        assert_eq!(view.rows("list").len(), 2);

        view.clear("list");
        assert!(view.rows("list").is_empty());

        view.append_row("list", Row::new().slot(slots::ID, "1"));
        assert_eq!(view.rows("list").len(), 1);
    }

    #[test]
    fn test_notifications_accumulate() {
        let mut view = MemoryView::new();
        view.notify("first");
        view.notify("second");
        assert_eq!(view.notifications(), ["first", "second"]);
    }
}
