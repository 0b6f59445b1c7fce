//! Serializable description of the detected displays.
//!
//! Querying the display server is left to the caller; it hands over the
//! inventory as JSON, one object per output:
//!
//! ```json
//! [
//!   {
//!     "name": "DP-1",
//!     "state": "active",
//!     "modes": [{"width": 1920, "height": 1080, "refresh": 60}],
//!     "current_mode": {"width": 1920, "height": 1080, "refresh": 60},
//!     "current_pos": {"x": 0, "y": 0},
//!     "edid": {"width_cm": 53, "height_cm": 30}
//!   },
//!   { "name": "VGA-1", "state": "disconnected" }
//! ]
//! ```

use crate::display::{Display, DisplayError, DisplayState};
use crate::edid::Edid;
use crate::mode::{Mode, Pos};
use serde::{Deserialize, Serialize};

/// Errors from reading an inventory.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("failed to parse inventory: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// One detected output, as reported by the display server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDisplay {
    pub name: String,
    pub state: DisplayState,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub current_mode: Option<Mode>,
    #[serde(default)]
    pub preferred_mode: Option<Mode>,
    #[serde(default)]
    pub current_pos: Option<Pos>,
    #[serde(default)]
    pub edid: Option<Edid>,
}

impl TryFrom<InventoryDisplay> for Display {
    type Error = DisplayError;

    fn try_from(d: InventoryDisplay) -> Result<Self, Self::Error> {
        Display::new(
            d.name,
            d.state,
            d.modes,
            d.current_mode,
            d.preferred_mode,
            d.current_pos,
            d.edid,
        )
    }
}

/// All detected outputs, in the order the display server lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    pub displays: Vec<InventoryDisplay>,
}

impl Inventory {
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry into a [`Display`], failing on the first
    /// invalid one.
    pub fn into_displays(self) -> Result<Vec<Display>, InventoryError> {
        self.displays
            .into_iter()
            .map(|d| Display::try_from(d).map_err(InventoryError::from))
            .collect()
    }
}
