//! Panel capability trait and static panel metadata
//!
//! A host display framework drives a panel through four callbacks: power-on
//! initialization, address window selection, orientation/color setup and
//! gamma programming. [`PanelDriver`] is that surface, and [`PANELS`] lists
//! the identifiers and fixed parameters a framework needs to bind a panel
//! before any bus traffic happens.
//!
//! ## Example
//!
//! ```
//! use s6d0154::panel::find_panel;
//!
//! let Some(panel) = find_panel("spi:fb_s6d0154") else {
//!     return;
//! };
//! assert_eq!((panel.width, panel.height), (240, 320));
//! ```

use embedded_hal::delay::DelayNs;

use crate::config::{HEIGHT, REGISTER_WIDTH, Rotation, WIDTH};
use crate::display::{Display, Window};
use crate::error::Error;
use crate::gamma::{DEFAULT_GAMMA, GAMMA_CURVES, GAMMA_POINTS, GammaTable};
use crate::interface::DisplayInterface;

/// Operations a display framework invokes on a panel
pub trait PanelDriver {
    /// Error type for panel operations
    type Error;

    /// Reset the panel and run its power-on sequence
    fn init_display<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Select the address window for the next pixel transfer
    fn set_addr_window(&mut self, window: Window, rotation: Rotation) -> Result<(), Self::Error>;

    /// Apply a rotation, keeping the current color order
    fn set_var(&mut self, rotation: Rotation) -> Result<(), Self::Error>;

    /// Program a gamma calibration table
    fn set_gamma(&mut self, gamma: &GammaTable) -> Result<(), Self::Error>;
}

impl<I> PanelDriver for Display<I>
where
    I: DisplayInterface,
{
    type Error = Error<I>;

    fn init_display<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.init(delay)
    }

    fn set_addr_window(&mut self, window: Window, rotation: Rotation) -> Result<(), Self::Error> {
        self.set_window_rotated(window, rotation)
    }

    fn set_var(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.set_rotation(rotation)
    }

    fn set_gamma(&mut self, gamma: &GammaTable) -> Result<(), Self::Error> {
        Display::set_gamma(self, gamma)
    }
}

/// Static description of a supported panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelDescriptor {
    /// Driver name
    pub name: &'static str,
    /// Device tree compatible string
    pub compatible: &'static str,
    /// Bus-specific module aliases
    pub aliases: &'static [&'static str],
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    /// Register width in bits
    pub register_width: u8,
    /// Number of gamma curves
    pub gamma_curves: usize,
    /// Points per gamma curve
    pub gamma_points: usize,
    /// Default gamma table in text form
    pub default_gamma: &'static str,
}

impl PanelDescriptor {
    /// Whether `id` names this panel
    pub fn matches(&self, id: &str) -> bool {
        id == self.name || id == self.compatible || self.aliases.contains(&id)
    }

    /// Parse the default gamma table
    pub fn default_gamma_table(&self) -> Result<GammaTable, crate::error::GammaParseError> {
        self.default_gamma.parse()
    }
}

/// The S6D0154 panel
pub static S6D0154: PanelDescriptor = PanelDescriptor {
    name: "fb_s6d0154",
    compatible: "samsung,s6d0154",
    aliases: &[
        "spi:fb_s6d0154",
        "platform:fb_s6d0154",
        "spi:s6d0154",
        "platform:s6d0154",
    ],
    width: WIDTH,
    height: HEIGHT,
    register_width: REGISTER_WIDTH,
    gamma_curves: GAMMA_CURVES,
    gamma_points: GAMMA_POINTS,
    default_gamma: DEFAULT_GAMMA,
};

/// All panels handled by this crate
pub static PANELS: &[&PanelDescriptor] = &[&S6D0154];

/// Look up a panel by driver name, compatible string or alias
pub fn find_panel(id: &str) -> Option<&'static PanelDescriptor> {
    PANELS.iter().copied().find(|panel| panel.matches(id))
}
