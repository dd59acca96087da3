//! Color channel order
//!
//! The S6D0154 can swap the red and blue channels of incoming pixel data.
//! Which order a module needs depends on how the glass is wired, so it is a
//! configuration value rather than a property of the controller.
//!
//! | Order | BGR bit (R03h bit 12) |
//! |-------|-----------------------|
//! | RGB   | 0                     |
//! | BGR   | 1                     |
//!
//! ## Example
//!
//! ```
//! use s6d0154::ColorOrder;
//!
//! assert_eq!(ColorOrder::Rgb.bit(), 0);
//! assert_eq!(ColorOrder::Bgr.bit(), 1);
//! assert_eq!(ColorOrder::Bgr.entry_mode_bits(), 0x1000);
//! ```

use crate::register::ENTRY_MODE_BGR_SHIFT;

/// Color channel order of the pixel data bus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red-green-blue
    Rgb,
    /// Blue-green-red (the controller's power-on setting)
    #[default]
    Bgr,
}

impl ColorOrder {
    /// Build from the framework's boolean BGR flag
    pub fn from_bgr(bgr: bool) -> Self {
        if bgr { Self::Bgr } else { Self::Rgb }
    }

    /// Value of the BGR bit
    pub fn bit(self) -> u16 {
        match self {
            Self::Rgb => 0,
            Self::Bgr => 1,
        }
    }

    /// The BGR bit shifted into its [`ENTRY_MODE`](crate::register::ENTRY_MODE) position
    pub fn entry_mode_bits(self) -> u16 {
        self.bit() << ENTRY_MODE_BGR_SHIFT
    }
}
