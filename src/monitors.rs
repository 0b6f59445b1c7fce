//! Lid-aware [`Monitors`] policy.
//!
//! On laptops the internal panel (conventionally named `eDP-*`) is turned
//! off while the lid is closed.  The lid state comes from the ACPI button
//! directory, `/proc/acpi/button/lid/<device>/state`, whose files read
//! like `state:      closed`.

use crate::traits::Monitors;
use log::debug;
use std::path::Path;

/// Default ACPI lid directory on Linux.
pub const ACPI_LID_DIR: &str = "/proc/acpi/button/lid";

/// Default name prefix of laptop panels.
pub const LAPTOP_PREFIX: &str = "eDP";

/// Disables the laptop panel while the lid is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LidMonitors {
    laptop_prefix: String,
    lid_closed: bool,
}

impl LidMonitors {
    pub fn new(laptop_prefix: impl Into<String>, lid_closed: bool) -> Self {
        Self {
            laptop_prefix: laptop_prefix.into(),
            lid_closed,
        }
    }

    /// Read the lid state from `lid_dir`.
    ///
    /// The lid is closed if any `<device>/state` file mentions `closed`.
    /// A missing or unreadable directory means there is no lid, which is
    /// treated as open.
    pub fn from_lid_dir(laptop_prefix: impl Into<String>, lid_dir: &Path) -> Self {
        let lid_closed = match std::fs::read_dir(lid_dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter_map(|e| std::fs::read_to_string(e.path().join("state")).ok())
                .any(|state| state.contains("closed")),
            Err(e) => {
                debug!("no lid at {}: {}", lid_dir.display(), e);
                false
            }
        };
        debug!("lid closed: {}", lid_closed);
        Self::new(laptop_prefix, lid_closed)
    }

    pub fn lid_closed(&self) -> bool {
        self.lid_closed
    }

    /// Whether `name` looks like a laptop panel (case-insensitive prefix).
    pub fn is_laptop_display(&self, name: &str) -> bool {
        let prefix = self.laptop_prefix.as_bytes();
        !prefix.is_empty()
            && name.len() >= prefix.len()
            && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix)
    }
}

impl Default for LidMonitors {
    fn default() -> Self {
        Self::new(LAPTOP_PREFIX, false)
    }
}

impl Monitors for LidMonitors {
    fn should_disable_display(&self, name: &str) -> bool {
        self.lid_closed && self.is_laptop_display(name)
    }
}
