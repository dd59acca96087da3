//! Coordinate rotation utilities
//!
//! The S6D0154 always scans GRAM in its native raster order: 240 columns
//! by 320 rows. Rotation is done by moving the GRAM cursor to the physical
//! cell that corresponds to a logical coordinate, and by changing the
//! address increment direction in the entry mode register so the pixels
//! that follow land in the rotated order.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation, origin at physical (0, 0)
//! - **Rotate90**: 90° clockwise, logical x runs up the physical rows
//! - **Rotate180**: 180° rotation, origin at physical bottom-right
//! - **Rotate270**: 270° clockwise, logical y runs left along the columns
//!
//! ## Example
//!
//! ```
//! use s6d0154::{rotation::gram_address, Rotation};
//!
//! // Logical origin at 90° is the last physical row
//! assert_eq!(gram_address(0, 0, Rotation::Rotate90), (0, 319));
//!
//! // And at 180° it is the opposite corner
//! assert_eq!(gram_address(0, 0, Rotation::Rotate180), (239, 319));
//! ```

use crate::color::ColorOrder;
use crate::config::{HEIGHT, Rotation, WIDTH};

/// Map a logical coordinate to the GRAM (horizontal, vertical) address
///
/// # Arguments
///
/// * `x` - Logical column, 0 to the rotated width - 1
/// * `y` - Logical row, 0 to the rotated height - 1
/// * `rotation` - Rotation mode
///
/// # Returns
///
/// Returns the values for R20h (horizontal) and R21h (vertical).
/// Coordinates outside the rotated panel saturate at the panel edge.
#[inline]
pub fn gram_address(x: u16, y: u16, rotation: Rotation) -> (u16, u16) {
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (y, (HEIGHT - 1).saturating_sub(x)),
        Rotation::Rotate180 => (
            (WIDTH - 1).saturating_sub(x),
            (HEIGHT - 1).saturating_sub(y),
        ),
        Rotation::Rotate270 => ((WIDTH - 1).saturating_sub(y), x),
    }
}

/// Map a GRAM address back to the logical coordinate for a rotation
///
/// This is the inverse of [`gram_address`] over the panel area.
pub fn logical_position(horizontal: u16, vertical: u16, rotation: Rotation) -> (u16, u16) {
    match rotation {
        Rotation::Rotate0 => (horizontal, vertical),
        Rotation::Rotate90 => ((HEIGHT - 1).saturating_sub(vertical), horizontal),
        Rotation::Rotate180 => (
            (WIDTH - 1).saturating_sub(horizontal),
            (HEIGHT - 1).saturating_sub(vertical),
        ),
        Rotation::Rotate270 => (vertical, (WIDTH - 1).saturating_sub(horizontal)),
    }
}

/// Address increment and direction bits of the entry mode register
///
/// Bits 5:4 are ID1/ID0 (vertical/horizontal increment) and bit 3 is AM
/// (update vertically first). The values are fixed by the panel wiring.
pub const fn scan_direction(rotation: Rotation) -> u16 {
    match rotation {
        Rotation::Rotate0 => 0x30,
        Rotation::Rotate90 => 0x18,
        Rotation::Rotate180 => 0x00,
        Rotation::Rotate270 => 0x28,
    }
}

/// Full entry mode register value for a rotation and color order
pub fn entry_mode(rotation: Rotation, color_order: ColorOrder) -> u16 {
    color_order.entry_mode_bits() | scan_direction(rotation)
}
