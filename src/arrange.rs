//! The full layout pipeline.
//!
//! [`arrange`] takes ownership of the detected displays and runs every
//! [`layout`](crate::layout) step in the required order.  Any error
//! aborts the remaining steps.

use crate::config::Settings;
use crate::display::Display;
use crate::layout::{
    activate_displays, calculate_dpi, ltr_displays, mirror_displays, order_displays, LayoutError,
    Selection,
};
use crate::traits::Monitors;
use log::debug;

/// Outcome of one configuration run.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// Displays in priority order, with their desired state filled in.
    pub displays: Vec<Display>,
    pub selection: Selection,
    /// Explains how the DPI was chosen.  Empty when DPI derivation is
    /// turned off.
    pub dpi_message: String,
}

impl Arrangement {
    pub fn primary(&self) -> Option<&Display> {
        self.selection.primary(&self.displays)
    }

    /// One verbose line per display with its desired state, the primary
    /// marked, followed by the DPI explanation if there is one.
    pub fn report(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .displays
            .iter()
            .enumerate()
            .map(|(i, d)| {
                if self.selection.primary == Some(i) {
                    format!("{} primary", d)
                } else {
                    d.to_string()
                }
            })
            .collect();
        if !self.dpi_message.is_empty() {
            lines.push(self.dpi_message.clone());
        }
        lines
    }
}

/// One line per detected display, without arranging anything.
pub fn report(displays: &[Display]) -> Vec<String> {
    displays
        .iter()
        .map(|d| {
            let mut line = format!("{} {}", d.name(), d.state());
            if let Some(mode) = d.current_mode() {
                line.push_str(&format!(" {}", mode));
            }
            if let Some(pos) = d.current_pos() {
                line.push_str(&format!(" {}", pos));
            }
            if let Some(mode) = d.optimal_mode() {
                line.push_str(&format!(" optimal {}", mode));
            }
            line
        })
        .collect()
}

/// Order, activate, lay out and derive the DPI for `displays`.
pub fn arrange<M: Monitors + ?Sized>(
    mut displays: Vec<Display>,
    settings: &Settings,
    monitors: &M,
) -> Result<Arrangement, LayoutError> {
    order_displays(&mut displays, settings.order.as_slice());

    let mut selection = activate_displays(&mut displays, &settings.primary, monitors)?;

    if settings.mirror {
        debug!("mirror layout");
        mirror_displays(&mut displays)?;
    } else {
        debug!("left to right layout");
        ltr_displays(&mut displays)?;
    }

    let dpi_message = if settings.dpi {
        calculate_dpi(&displays, &mut selection)
    } else {
        String::new()
    };

    Ok(Arrangement {
        displays,
        selection,
        dpi_message,
    })
}
