//! Display modes and virtual-desktop positions.
//!
//! A [`Mode`] is a plain value: two displays exposing `1920x1080@60` hold
//! equal modes, and a display refers to its chosen mode by value rather
//! than by reference into another display's list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolution and refresh rate pairing.
///
/// Ordered by width, then height, then refresh, so the largest and
/// fastest mode compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Mode {
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Refresh rate in Hz.
    pub refresh: u32,
}

impl Mode {
    pub fn new(width: u32, height: u32, refresh: u32) -> Self {
        Self {
            width,
            height,
            refresh,
        }
    }

    /// Whether `other` has the same width and height, ignoring refresh.
    pub fn same_size(&self, other: &Mode) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}", self.width, self.height, self.refresh)
    }
}

/// An offset in the virtual desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}{:+}", self.x, self.y)
    }
}

/// Rank modes descending: largest resolution first, ties broken by the
/// higher refresh rate.
pub fn rank_modes(mut modes: Vec<Mode>) -> Vec<Mode> {
    modes.sort();
    modes.reverse();
    modes
}

/// Pick the mode this tool would choose for a display absent any layout
/// constraint.
///
/// `ranked` must already be ranked by [`rank_modes`].  Defaults to the
/// highest ranked mode.  With a `preferred` mode, the first ranked mode
/// of the preferred width and height wins instead, i.e. the fastest
/// refresh at the preferred resolution.
pub fn optimal_mode(ranked: &[Mode], preferred: Option<&Mode>) -> Option<Mode> {
    let highest = ranked.first().copied()?;
    let Some(preferred) = preferred else {
        return Some(highest);
    };
    Some(
        ranked
            .iter()
            .find(|m| m.same_size(preferred))
            .copied()
            .unwrap_or(highest),
    )
}

//  Tests
