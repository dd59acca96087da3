//! Display configuration types and builder

use crate::color::ColorOrder;
pub use crate::error::BuilderError;
use crate::gamma::GammaTable;

/// Panel width in pixels (GRAM columns, horizontal address range 0..=239)
pub const WIDTH: u16 = 240;

/// Panel height in pixels (GRAM rows, vertical address range 0..=319)
pub const HEIGHT: u16 = 320;

/// Width of the controller's registers in bits
pub const REGISTER_WIDTH: u8 = 16;

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows (height in pixels)
    pub rows: u16,
    /// Number of columns (width in pixels)
    pub cols: u16,
}

impl Dimensions {
    /// Native (unrotated) panel dimensions
    pub const NATIVE: Self = Self {
        rows: HEIGHT,
        cols: WIDTH,
    };
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// All rotations, in increasing angle
    pub const ALL: [Self; 4] = [
        Self::Rotate0,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
    ];

    /// Convert an angle in degrees
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRotation` for anything other than
    /// 0, 90, 180 or 270.
    pub fn from_degrees(degrees: u16) -> Result<Self, BuilderError> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(BuilderError::InvalidRotation { degrees }),
        }
    }

    /// Angle in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether width and height are swapped relative to the native panel
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = BuilderError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

/// Display configuration
///
/// This struct holds the runtime-changeable parameters of the panel.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display rotation
    pub rotation: Rotation,
    /// Color channel order
    pub color_order: ColorOrder,
    /// Gamma calibration (stored masked once written to the panel)
    pub gamma: GammaTable,
}

impl Config {
    /// Get the logical dimensions for the configured rotation
    pub fn rotated_dimensions(&self) -> Dimensions {
        rotated_dimensions(self.rotation)
    }
}

/// Logical dimensions seen by callers for a rotation
pub fn rotated_dimensions(rotation: Rotation) -> Dimensions {
    if rotation.is_transposed() {
        Dimensions {
            rows: WIDTH,
            cols: HEIGHT,
        }
    } else {
        Dimensions::NATIVE
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use s6d0154::{Builder, ColorOrder, Rotation};
///
/// let config = match Builder::new()
///     .rotation(Rotation::Rotate90)
///     .color_order(ColorOrder::Rgb)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display rotation, in degrees until validated
    rotation_degrees: u16,
    /// Color channel order
    color_order: ColorOrder,
    /// Gamma calibration
    gamma: GammaTable,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            rotation_degrees: 0,
            // Matches the entry mode written during power-on (R03h = 0x1030)
            color_order: ColorOrder::Bgr,
            gamma: GammaTable::DEFAULT,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation_degrees = rotation.degrees();
        self
    }

    /// Set display rotation from an angle in degrees
    ///
    /// The angle is validated by [`build`](Self::build).
    pub fn rotation_degrees(mut self, degrees: u16) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set color channel order
    pub fn color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Set the gamma calibration applied by `bring_up`
    pub fn gamma(mut self, gamma: GammaTable) -> Self {
        self.gamma = gamma;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRotation` if the rotation is not a right angle
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            rotation: Rotation::from_degrees(self.rotation_degrees)?,
            color_order: self.color_order,
            gamma: self.gamma,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_from_degrees_accepts_right_angles() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Ok(rotation));
        }
    }

    #[test]
    fn test_rotation_from_degrees_rejects_other_angles() {
        for degrees in [1, 45, 89, 91, 360, 540] {
            assert_eq!(
                Rotation::try_from(degrees),
                Err(BuilderError::InvalidRotation { degrees })
            );
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.rotation, Rotation::Rotate0);
        assert_eq!(config.color_order, ColorOrder::Bgr);
        assert_eq!(config.gamma, GammaTable::DEFAULT);
    }

    #[test]
    fn test_builder_invalid_rotation_degrees() {
        let result = Builder::new().rotation_degrees(45).build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidRotation { degrees: 45 })
        ));
    }

    #[test]
    fn test_rotated_dimensions() {
        let config = Builder::new().rotation(Rotation::Rotate90).build().unwrap();
        assert_eq!(
            config.rotated_dimensions(),
            Dimensions {
                rows: 240,
                cols: 320
            }
        );
        assert_eq!(rotated_dimensions(Rotation::Rotate180), Dimensions::NATIVE);
    }
}
