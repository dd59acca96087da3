//! Graphics support via embedded-graphics
//!
//! This module bridges embedded-graphics geometry to the controller's
//! address window: [`Display`] reports its rotated size through
//! [`OriginDimensions`], and a [`Rectangle`] converts into the [`Window`]
//! that [`Display::set_window`] expects.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{prelude::*, primitives::Rectangle};
//! use s6d0154::{Builder, Display, Interface, Rotation, Window};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let config = match Builder::new().rotation(Rotation::Rotate90).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, config);
//! assert_eq!(display.size(), Size::new(320, 240));
//!
//! let area = Rectangle::new(Point::new(10, 20), Size::new(64, 32));
//! if let Some(window) = Window::from_rectangle(&area) {
//!     let _ = display.set_window(window);
//! }
//! ```

use embedded_graphics_core::{
    geometry::{OriginDimensions, Size},
    primitives::Rectangle,
};

use crate::display::{Display, Window};
use crate::interface::DisplayInterface;

impl Window {
    /// Convert a rectangle into a window
    ///
    /// Returns `None` for empty rectangles, rectangles that start at a
    /// negative coordinate, and rectangles past the 16-bit address range.
    pub fn from_rectangle(rect: &Rectangle) -> Option<Self> {
        let bottom_right = rect.bottom_right()?;
        let x_start = u16::try_from(rect.top_left.x).ok()?;
        let y_start = u16::try_from(rect.top_left.y).ok()?;
        let x_end = u16::try_from(bottom_right.x).ok()?;
        let y_end = u16::try_from(bottom_right.y).ok()?;
        Some(Self::new(x_start, y_start, x_end, y_end))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let rotated = self.dimensions();
        Size::new(u32::from(rotated.cols), u32::from(rotated.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Rotation};
    use crate::display::tests::{Log, MockInterface};
    use embedded_graphics_core::geometry::Point;

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new().rotation(rotation).build().unwrap();
        Display::new(MockInterface::new(Log::default()), config)
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_display(Rotation::Rotate0).size(), Size::new(240, 320));
        assert_eq!(test_display(Rotation::Rotate90).size(), Size::new(320, 240));
        assert_eq!(
            test_display(Rotation::Rotate180).size(),
            Size::new(240, 320)
        );
        assert_eq!(
            test_display(Rotation::Rotate270).size(),
            Size::new(320, 240)
        );
    }

    #[test]
    fn test_window_from_rectangle() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(5, 3));
        assert_eq!(
            Window::from_rectangle(&rect),
            Some(Window::new(10, 20, 14, 22))
        );
    }

    #[test]
    fn test_window_from_bounding_box_covers_display() {
        let display = test_display(Rotation::Rotate90);
        let full = Rectangle::new(Point::zero(), display.size());
        assert_eq!(
            Window::from_rectangle(&full),
            Some(Window::full(Rotation::Rotate90))
        );
    }

    #[test]
    fn test_window_from_rectangle_rejects_empty_and_negative() {
        let empty = Rectangle::new(Point::new(4, 4), Size::new(0, 10));
        assert_eq!(Window::from_rectangle(&empty), None);

        let negative = Rectangle::new(Point::new(-1, 0), Size::new(10, 10));
        assert_eq!(Window::from_rectangle(&negative), None);
    }
}
