//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and gamma string parsing ([`GammaParseError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`GammaParseError`] - Malformed gamma calibration strings
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! A device code mismatch is not an error: it is logged and bring-up
//! continues. Out-of-range gamma values are not errors either: they are
//! masked to the width of their register field.
//!
//! ## Example
//!
//! ```
//! use s6d0154::{BuilderError, Rotation};
//!
//! // Only right angles are supported
//! let result = Rotation::from_degrees(45);
//! assert!(matches!(result, Err(BuilderError::InvalidRotation { degrees: 45 })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The controller state is unknown afterwards; recover by resetting and
    /// running the initialization again.
    Interface(I::Error),
    /// Address window is inverted or outside the panel
    ///
    /// Coordinates are in the logical space of the rotation in use.
    InvalidWindow {
        /// First column
        x_start: u16,
        /// First row
        y_start: u16,
        /// Last column
        x_end: u16,
        /// Last row
        y_end: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidWindow {
                x_start,
                y_start,
                x_end,
                y_end,
            } => write!(
                f,
                "Invalid window: ({x_start}, {y_start}) to ({x_end}, {y_end})"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Rotation is not one of 0, 90, 180 or 270 degrees
    InvalidRotation {
        /// Rotation requested, in degrees
        degrees: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => write!(
                f,
                "Invalid rotation {degrees} (must be 0, 90, 180 or 270 degrees)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when parsing a gamma string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GammaParseError {
    /// The string does not contain exactly two curves
    WrongCurveCount {
        /// Number of curves found
        found: usize,
    },
    /// A curve does not contain exactly ten points
    WrongPointCount {
        /// Curve index (0 = positive, 1 = negative)
        curve: usize,
        /// Number of points found
        found: usize,
    },
    /// A point is not a hexadecimal number that fits in 16 bits
    InvalidValue {
        /// Curve index (0 = positive, 1 = negative)
        curve: usize,
        /// Point index within the curve
        point: usize,
    },
}

impl core::fmt::Display for GammaParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WrongCurveCount { found } => {
                write!(f, "Expected 2 gamma curves, found {found}")
            }
            Self::WrongPointCount { curve, found } => {
                write!(f, "Expected 10 points in gamma curve {curve}, found {found}")
            }
            Self::InvalidValue { curve, point } => {
                write!(f, "Invalid hex value at gamma curve {curve}, point {point}")
            }
        }
    }
}

impl core::error::Error for GammaParseError {}
