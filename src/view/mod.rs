//! View layer: the contract between controllers and whatever displays them.
//!
//! Controllers address elements by id (see [`ids`]). A view implementation
//! maps those ids onto its own surface.

pub mod memory;
pub mod terminal;

use std::sync::Arc;

pub use memory::MemoryView;
pub use terminal::TerminalView;

/// Element identifiers controllers write to.
pub mod ids {
    // Dashboard page
    pub const GREETING: &str = "greeting-message";
    pub const USER_NAME: &str = "test-plain-user-name";
    pub const BALANCE: &str = "test-plain-balance";
    pub const SIDE_BOARD: &str = "div-area-leaderboard-environment";

    // Leaderboard page
    pub const RANKING_LIST: &str = "tr-environment-dynamic-ranking-list";

    // Balance page
    pub const DISPLAY_NAME: &str = "display_name";
    pub const DISPLAY_BALANCE: &str = "display_balance";
}

/// Slot names inside a row.
pub mod slots {
    pub const ID: &str = "id";
    pub const USERNAME: &str = "username";
    pub const VALUE: &str = "value";
    pub const USER: &str = "user";
}

/// One templated row: an ordered list of `(slot, text)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    slots: Vec<(&'static str, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, name: &'static str, text: impl Into<String>) -> Self {
        self.slots.push((name, text.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn slots(&self) -> &[(&'static str, String)] {
        &self.slots
    }
}

/// A render target.
pub trait View: Send {
    /// Replace the text content of an element.
    fn set_text(&mut self, id: &str, text: &str);

    /// Remove every row from a container.
    fn clear(&mut self, container: &str);

    /// Append a row to a container.
    fn append_row(&mut self, container: &str, row: Row);

    /// Tell the user something went wrong.
    fn notify(&mut self, message: &str);
}

/// A view shared between a controller's initial render and its polling ticks.
pub type SharedView<V> = Arc<async_lock::Mutex<V>>;

pub fn shared<V: View>(view: V) -> SharedView<V> {
    Arc::new(async_lock::Mutex::new(view))
}
