//! Physical-size metadata read from a display's EDID block.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};

const BLOCK_LEN: usize = 128;
const HEADER: [u8; 8] = [0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00];
const MAX_CM_HORIZ: usize = 21;
const MAX_CM_VERT: usize = 22;

/// Errors from decoding a raw EDID blob.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EdidError {
    #[error("EDID length {0} is not a positive multiple of 128")]
    Length(usize),
    #[error("EDID header is invalid")]
    Header,
}

/// Maximum image size of a display, in centimetres.
///
/// A size of `0` means the manufacturer did not report one (projectors,
/// some TVs), in which case no DPI can be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edid {
    pub width_cm: u32,
    pub height_cm: u32,
}

impl Edid {
    pub fn new(width_cm: u32, height_cm: u32) -> Self {
        Self {
            width_cm,
            height_cm,
        }
    }

    /// Decode the base block of a raw EDID blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EdidError> {
        if bytes.is_empty() || bytes.len() % BLOCK_LEN != 0 {
            return Err(EdidError::Length(bytes.len()));
        }
        if bytes[..HEADER.len()] != HEADER {
            return Err(EdidError::Header);
        }
        Ok(Self::new(
            u32::from(bytes[MAX_CM_HORIZ]),
            u32::from(bytes[MAX_CM_VERT]),
        ))
    }

    /// Dots per inch of `mode` on this display: the rounded mean of the
    /// horizontal and vertical densities.  Returns `0` when the physical
    /// size is unknown.
    pub fn dpi_for_mode(&self, mode: &Mode) -> u32 {
        if self.width_cm == 0 || self.height_cm == 0 {
            return 0;
        }
        let horiz = f64::from(mode.width) * 2.54 / f64::from(self.width_cm);
        let vert = f64::from(mode.height) * 2.54 / f64::from(self.height_cm);
        ((horiz + vert) / 2.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(width_cm: u8, height_cm: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; BLOCK_LEN];
        bytes[..HEADER.len()].copy_from_slice(&HEADER);
        bytes[MAX_CM_HORIZ] = width_cm;
        bytes[MAX_CM_VERT] = height_cm;
        bytes
    }

    #[test]
    fn dpi_for_typical_monitor() {
        let edid = Edid::new(53, 30);
        assert_eq!(edid.dpi_for_mode(&Mode::new(1920, 1080, 60)), 92);
    }

    #[test]
    fn dpi_for_hidpi_laptop() {
        let edid = Edid::new(31, 17);
        assert_eq!(edid.dpi_for_mode(&Mode::new(3840, 2160, 60)), 319);
    }

    #[test]
    fn unknown_size_yields_zero() {
        let mode = Mode::new(1920, 1080, 60);
        assert_eq!(Edid::new(0, 30).dpi_for_mode(&mode), 0);
        assert_eq!(Edid::new(53, 0).dpi_for_mode(&mode), 0);
    }

    #[test]
    fn decodes_size_from_base_block() {
        assert_eq!(Edid::from_bytes(&blob(60, 34)), Ok(Edid::new(60, 34)));
    }

    #[test]
    fn accepts_extension_blocks() {
        let mut bytes = blob(60, 34);
        bytes.extend_from_slice(&[0u8; BLOCK_LEN]);
        assert_eq!(Edid::from_bytes(&bytes), Ok(Edid::new(60, 34)));
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(Edid::from_bytes(&[]), Err(EdidError::Length(0)));
        assert_eq!(Edid::from_bytes(&blob(1, 1)[..100]), Err(EdidError::Length(100)));
    }

    #[test]
    fn rejects_bad_header() {
        let mut bytes = blob(60, 34);
        bytes[0] = 0x01;
        assert_eq!(Edid::from_bytes(&bytes), Err(EdidError::Header));
    }
}
