//! S6D0154 TFT LCD Driver
//!
//! A driver for the Samsung S6D0154 controller driving a 240x320, 262K color
//! TFT panel over a 16-bit register bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` geometry integration (with `graphics` feature)
//! - Power-on sequence with device code check
//! - Address window selection in all four rotations
//! - Runtime RGB/BGR color order
//! - Gamma calibration tables, parsable from text
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use s6d0154::{Builder, ColorOrder, Display, Interface, Rotation, Window};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new()
//!     .rotation(Rotation::Rotate90)
//!     .color_order(ColorOrder::Bgr)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.bring_up(&mut delay).is_err() {
//!     return;
//! }
//!
//! // Stream pixels for the top-left 32x32 block after this
//! let _ = display.set_window(Window::new(0, 0, 31, 31));
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Color channel order
pub mod color;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Gamma calibration tables
pub mod gamma;
/// Power-on initialization sequence
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Panel capability trait and metadata
pub mod panel;
/// S6D0154 register definitions
pub mod register;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::ColorOrder;
pub use config::{Builder, Config, Dimensions, HEIGHT, REGISTER_WIDTH, Rotation, WIDTH};
pub use display::{DeviceIdentity, Display, Window};
pub use error::{BuilderError, Error, GammaParseError};
pub use gamma::{Curve, DEFAULT_GAMMA, GAMMA_CURVES, GAMMA_POINTS, GammaTable};
pub use init::{INIT_SEQUENCE, InitStep};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use panel::{PANELS, PanelDescriptor, PanelDriver, find_panel};
