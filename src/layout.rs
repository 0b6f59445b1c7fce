//! Layout algorithms over an ordered list of [`Display`]s.
//!
//! The steps must run in this order, each on the output of the previous:
//!
//! 1. [`order_displays`] moves the user's preferred displays to the front.
//! 2. [`activate_displays`] decides which displays are switched on and
//!    which one is primary, producing a [`Selection`].
//! 3. Exactly one of [`ltr_displays`] or [`mirror_displays`] assigns
//!    modes and positions to the active displays.
//! 4. [`calculate_dpi`] derives the DPI from the primary's chosen mode.
//!
//! [`arrange`](crate::arrange::arrange) runs the whole sequence.

use crate::display::{Display, DisplayError, DisplayState};
use crate::mode::{Mode, Pos};
use crate::traits::Monitors;
use log::debug;

/// DPI used when none can be derived from the primary display.
pub const DEFAULT_DPI: u32 = 96;

/// Index of a display in the ordered display list.
pub type DisplayId = usize;

/// Errors raised while laying out displays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Mirroring needs one width and height supported by every active
    /// display.
    #[error("unable to find common width/height for mirror")]
    NoCommonMode,

    /// Placing displays side by side ran past the largest representable
    /// x offset at the named display.
    #[error("display '{0}' does not fit in the virtual desktop")]
    PositionOverflow(String),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Primary display and DPI chosen for one configuration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the primary display, if any display was activated.
    pub primary: Option<DisplayId>,
    pub dpi: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            primary: None,
            dpi: DEFAULT_DPI,
        }
    }
}

impl Selection {
    /// The primary display within `displays`.
    pub fn primary<'a>(&self, displays: &'a [Display]) -> Option<&'a Display> {
        self.primary.and_then(|i| displays.get(i))
    }
}

/// Move displays named in `order` to the front, earlier names first.
///
/// Names match case-insensitively.  Matches are staged front-first per
/// name, then each staged display is moved to the front of the list in
/// turn; with one match per name this leaves the first listed name at
/// the very front.  Unmatched displays keep their relative order.
pub fn order_displays<S: AsRef<str>>(displays: &mut Vec<Display>, order: &[S]) {
    let mut staged: Vec<DisplayId> = Vec::new();
    for name in order {
        for (i, display) in displays.iter().enumerate() {
            if display.is_named(name.as_ref()) {
                staged.insert(0, i);
            }
        }
    }

    let mut permutation: Vec<DisplayId> = (0..displays.len()).collect();
    for i in staged {
        permutation.retain(|&p| p != i);
        permutation.insert(0, i);
    }

    let mut slots: Vec<Option<Display>> = displays.drain(..).map(Some).collect();
    displays.extend(permutation.into_iter().filter_map(|i| slots[i].take()));

    debug!(
        "display order: {}",
        displays
            .iter()
            .map(Display::name)
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Activate every connected or active display the `monitors` policy
/// allows, and pick the primary.
///
/// The first activated display is primary unless a later one is named
/// `primary` (case-insensitive); an empty `primary` names nothing.
pub fn activate_displays<M: Monitors + ?Sized>(
    displays: &mut [Display],
    primary: &str,
    monitors: &M,
) -> Result<Selection, DisplayError> {
    let mut selection = Selection::default();

    for (i, display) in displays.iter_mut().enumerate() {
        if monitors.should_disable_display(display.name()) {
            debug!("{}: disabled by monitors policy", display.name());
            continue;
        }
        if display.state() == DisplayState::Disconnected {
            continue;
        }

        display.set_desired_active(true)?;

        if selection.primary.is_none() {
            selection.primary = Some(i);
        }
        if !primary.is_empty() && display.is_named(primary) {
            selection.primary = Some(i);
        }
    }

    debug!(
        "primary: {}",
        selection
            .primary(displays)
            .map(Display::name)
            .unwrap_or("none")
    );
    Ok(selection)
}

/// Place active displays side by side at their optimal modes, left to
/// right in list order, all at `y = 0`.
///
/// Each x offset is the sum of the widths before it; a sum past
/// `i32::MAX` fails with [`LayoutError::PositionOverflow`].
pub fn ltr_displays(displays: &mut [Display]) -> Result<(), LayoutError> {
    let mut xpos: i32 = 0;
    for display in displays.iter_mut().filter(|d| d.desired_active()) {
        let Some(mode) = display.optimal_mode() else {
            return Err(
                DisplayError::ActivateWithoutOptimalMode(display.name().to_string()).into(),
            );
        };
        let next = i32::try_from(mode.width)
            .ok()
            .and_then(|width| xpos.checked_add(width))
            .ok_or_else(|| LayoutError::PositionOverflow(display.name().to_string()))?;
        display.set_desired_mode(mode)?;
        display.set_desired_pos(Pos::new(xpos, 0));
        xpos = next;
    }
    Ok(())
}

/// Mirror all active displays at `(0, 0)` using the largest width and
/// height every one of them supports.
///
/// Candidates come from the first active display's ranked modes; each
/// display gets its fastest mode of the chosen size.  Nothing is changed
/// if no candidate fits everywhere.
pub fn mirror_displays(displays: &mut [Display]) -> Result<(), LayoutError> {
    let Some(reference) = displays.iter().find(|d| d.desired_active()) else {
        return Ok(());
    };
    let candidates = reference.modes().to_vec();

    for candidate in &candidates {
        let matched: Option<Vec<Option<Mode>>> = displays
            .iter()
            .map(|d| {
                if d.desired_active() {
                    d.best_mode_sized_as(candidate).map(Some)
                } else {
                    Some(None)
                }
            })
            .collect();

        let Some(matched) = matched else {
            continue;
        };

        debug!("mirroring at {}x{}", candidate.width, candidate.height);
        for (display, mode) in displays.iter_mut().zip(matched) {
            if let Some(mode) = mode {
                display.set_desired_mode(mode)?;
                display.set_desired_pos(Pos::new(0, 0));
            }
        }
        return Ok(());
    }

    Err(LayoutError::NoCommonMode)
}

/// Derive the DPI from the primary display's EDID and desired mode.
///
/// Never fails: when no DPI can be derived the selection keeps its
/// current value and the returned line explains why.
pub fn calculate_dpi(displays: &[Display], selection: &mut Selection) -> String {
    let Some(primary) = selection.primary(displays) else {
        return format!(
            "DPI defaulting to {}; no primary display has been set",
            selection.dpi
        );
    };
    let Some(edid) = primary.edid() else {
        return format!(
            "DPI defaulting to {}; EDID information not available for primary display {}",
            selection.dpi,
            primary.name()
        );
    };
    let Some(mode) = primary.desired_mode() else {
        return format!(
            "DPI defaulting to {}; desired mode not available for primary display {}",
            selection.dpi,
            primary.name()
        );
    };

    let dpi = edid.dpi_for_mode(&mode);
    if dpi == 0 {
        return format!(
            "DPI defaulting to {}; no display size EDID information available for {}",
            selection.dpi,
            primary.name()
        );
    }

    selection.dpi = dpi;
    format!("DPI {} for primary display {}", dpi, primary.name())
}

//  Tests
