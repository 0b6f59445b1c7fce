//! Collaborator traits that keep the layout algorithms independent of
//! how display policy is decided.
//!
//! The layout code in [`layout`](crate::layout) only consults these
//! abstractions; concrete policies live in [`monitors`](crate::monitors).

/// Policy oracle deciding which displays must never be activated.
///
/// An implementation might inspect the laptop lid, a user blacklist, or
/// be a fixed stub used in tests.
pub trait Monitors {
    /// Whether the display called `name` should stay off regardless of
    /// its connection state.
    fn should_disable_display(&self, name: &str) -> bool;
}

/// A policy that never disables anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Monitors for AllowAll {
    fn should_disable_display(&self, _name: &str) -> bool {
        false
    }
}
