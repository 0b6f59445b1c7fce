//! A physical display output and its desired state.
//!
//! [`Display::new`] validates the detected state up front; the desired
//! state is only reachable through setters that enforce the same rules,
//! so a [`Display`] that exists is always internally consistent.

use crate::edid::Edid;
use crate::mode::{optimal_mode, rank_modes, Mode, Pos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection state of a display, in increasing order of commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Disconnected,
    /// Capable, but not currently driving a screen.
    Connected,
    /// Currently driving a screen.
    Active,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayState::Disconnected => write!(f, "disconnected"),
            DisplayState::Connected => write!(f, "connected"),
            DisplayState::Active => write!(f, "active"),
        }
    }
}

/// A display configuration that violates a construction or mutation rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("active display '{0}' has no current mode")]
    ActiveWithoutCurrentMode(String),
    #[error("active display '{0}' has no current position")]
    ActiveWithoutCurrentPos(String),
    #[error("active display '{0}' has no modes")]
    ActiveWithoutModes(String),
    #[error("connected display '{0}' has no modes")]
    ConnectedWithoutModes(String),
    #[error("display '{0}' has current mode {1} not present in its modes")]
    CurrentModeNotInModes(String, Mode),
    #[error("display '{0}' has preferred mode {1} not present in its modes")]
    PreferredModeNotInModes(String, Mode),
    #[error("display '{0}' cannot be activated without an optimal mode")]
    ActivateWithoutOptimalMode(String),
    #[error("display '{0}' cannot use desired mode {1} which is not present in its modes")]
    DesiredModeNotInModes(String, Mode),
}

/// One physical output.
///
/// The detected state is fixed at construction.  The desired state
/// (`desired_active`, `desired_mode`, `desired_pos`) starts empty and is
/// filled in by the [`layout`](crate::layout) steps through setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    /// Output name, matched case-insensitively against user preferences.
    name: String,
    state: DisplayState,
    /// Supported modes, ranked descending.
    modes: Vec<Mode>,
    current_mode: Option<Mode>,
    preferred_mode: Option<Mode>,
    /// Best mode absent layout constraints, derived from `modes` and
    /// `preferred_mode`.
    optimal_mode: Option<Mode>,
    current_pos: Option<Pos>,
    edid: Option<Edid>,
    desired_active: bool,
    desired_mode: Option<Mode>,
    desired_pos: Option<Pos>,
}

impl Display {
    /// Build a display from detected state.
    ///
    /// `modes` may be in any order; they are ranked here.  Active displays
    /// need a current mode, a current position and at least one mode;
    /// connected displays need at least one mode.  For active and
    /// connected displays the current and preferred modes, when given,
    /// must be among `modes`.
    pub fn new(
        name: impl Into<String>,
        state: DisplayState,
        modes: Vec<Mode>,
        current_mode: Option<Mode>,
        preferred_mode: Option<Mode>,
        current_pos: Option<Pos>,
        edid: Option<Edid>,
    ) -> Result<Self, DisplayError> {
        let name = name.into();

        match state {
            DisplayState::Active => {
                if current_mode.is_none() {
                    return Err(DisplayError::ActiveWithoutCurrentMode(name));
                }
                if current_pos.is_none() {
                    return Err(DisplayError::ActiveWithoutCurrentPos(name));
                }
                if modes.is_empty() {
                    return Err(DisplayError::ActiveWithoutModes(name));
                }
            }
            DisplayState::Connected => {
                if modes.is_empty() {
                    return Err(DisplayError::ConnectedWithoutModes(name));
                }
            }
            DisplayState::Disconnected => {}
        }

        let modes = rank_modes(modes);

        if state != DisplayState::Disconnected {
            if let Some(mode) = current_mode.filter(|m| !modes.contains(m)) {
                return Err(DisplayError::CurrentModeNotInModes(name, mode));
            }
            if let Some(mode) = preferred_mode.filter(|m| !modes.contains(m)) {
                return Err(DisplayError::PreferredModeNotInModes(name, mode));
            }
        }

        let optimal_mode = optimal_mode(&modes, preferred_mode.as_ref());

        Ok(Self {
            name,
            state,
            modes,
            current_mode,
            preferred_mode,
            optimal_mode,
            current_pos,
            edid,
            desired_pos: None,
            desired_active: false,
            desired_mode: None,
        })
    }

    //  Accessors

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Supported modes, ranked descending.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn current_mode(&self) -> Option<Mode> {
        self.current_mode
    }

    pub fn preferred_mode(&self) -> Option<Mode> {
        self.preferred_mode
    }

    /// Best mode absent layout constraints.  `None` only for a display
    /// without modes.
    pub fn optimal_mode(&self) -> Option<Mode> {
        self.optimal_mode
    }

    pub fn current_pos(&self) -> Option<Pos> {
        self.current_pos
    }

    pub fn edid(&self) -> Option<Edid> {
        self.edid
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn desired_active(&self) -> bool {
        self.desired_active
    }

    /// Mark the display for activation.  Activation needs an optimal mode,
    /// which a display without modes never has.
    pub fn set_desired_active(&mut self, active: bool) -> Result<(), DisplayError> {
        if active && self.optimal_mode.is_none() {
            return Err(DisplayError::ActivateWithoutOptimalMode(self.name.clone()));
        }
        self.desired_active = active;
        Ok(())
    }

    pub fn desired_mode(&self) -> Option<Mode> {
        self.desired_mode
    }

    /// Choose the mode the layout wants; it must be one of `modes`.
    pub fn set_desired_mode(&mut self, mode: Mode) -> Result<(), DisplayError> {
        if !self.modes.contains(&mode) {
            return Err(DisplayError::DesiredModeNotInModes(self.name.clone(), mode));
        }
        self.desired_mode = Some(mode);
        Ok(())
    }

    pub fn desired_pos(&self) -> Option<Pos> {
        self.desired_pos
    }

    /// Place the display in the virtual desktop.  Any offset is valid.
    pub fn set_desired_pos(&mut self, pos: Pos) {
        self.desired_pos = Some(pos);
    }

    /// The highest ranked mode with the given width and height.
    pub fn best_mode_sized_as(&self, size: &Mode) -> Option<Mode> {
        self.modes.iter().find(|m| m.same_size(size)).copied()
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.state)?;
        if let Some(mode) = self.current_mode {
            write!(f, " {}", mode)?;
        }
        if let Some(pos) = self.current_pos {
            write!(f, " {}", pos)?;
        }
        if let Some(mode) = self.optimal_mode {
            write!(f, " optimal {}", mode)?;
        }
        if let Some(edid) = self.edid {
            write!(f, " {}x{}cm", edid.width_cm, edid.height_cm)?;
        }
        if self.desired_active {
            write!(f, " ->")?;
            if let Some(mode) = self.desired_mode {
                write!(f, " {}", mode)?;
            }
            if let Some(pos) = self.desired_pos {
                write!(f, " {}", pos)?;
            }
        } else {
            write!(f, " -> off")?;
        }
        Ok(())
    }
}
