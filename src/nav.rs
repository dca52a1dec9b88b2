//! Navigation bar adapter.
//!
//! The shared page chrome lives outside this crate. Controllers call
//! `init` once on start and `update` on every tick.

pub trait NavigationBar: Send + Sync {
    fn init(&self);

    fn update(&self);
}

/// Navigation bar for hosts without shared chrome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigationBar;

impl NavigationBar for NoopNavigationBar {
    fn init(&self) {
        tracing::trace!("Navigation bar init (noop)");
    }

    fn update(&self) {
        tracing::trace!("Navigation bar update (noop)");
    }
}
