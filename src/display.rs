//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::color::ColorOrder;
use crate::config::{Config, Dimensions, Rotation, rotated_dimensions};
use crate::error::Error;
use crate::gamma::GammaTable;
use crate::init::{INIT_SEQUENCE, InitStep};
use crate::interface::DisplayInterface;
use crate::register::{
    DEVICE_CODE, ENTRY_MODE, EXPECTED_DEVICE_CODE, GRAM_DATA, GRAM_HORIZONTAL_ADDRESS,
    GRAM_VERTICAL_ADDRESS,
};
use crate::rotation::{entry_mode, gram_address};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Address window in logical (rotated) pixel coordinates
///
/// Both corners are inclusive. Only the start corner is programmed into
/// the controller; the GRAM window registers stay at the full panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x_start: u16,
    /// First row
    pub y_start: u16,
    /// Last column
    pub x_end: u16,
    /// Last row
    pub y_end: u16,
}

impl Window {
    /// Create a new window from its inclusive corners
    pub fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Window covering the whole panel for a rotation
    pub fn full(rotation: Rotation) -> Self {
        let dims = rotated_dimensions(rotation);
        Self::new(0, 0, dims.cols - 1, dims.rows - 1)
    }

    /// Width in pixels, 0 if inverted
    pub fn width(&self) -> u32 {
        span(self.x_start, self.x_end)
    }

    /// Height in pixels, 0 if inverted
    pub fn height(&self) -> u32 {
        span(self.y_start, self.y_end)
    }

    /// Whether the window is well-formed and fits in `dims`
    pub fn fits(&self, dims: Dimensions) -> bool {
        self.x_start <= self.x_end
            && self.y_start <= self.y_end
            && self.x_end < dims.cols
            && self.y_end < dims.rows
    }
}

fn span(start: u16, end: u16) -> u32 {
    if end < start {
        0
    } else {
        u32::from(end - start) + 1
    }
}

/// Result of checking the device code register
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceIdentity {
    /// The controller reported the S6D0154 code
    Matched,
    /// The read returned zero, as on buses with no read line wired
    NotReported,
    /// The controller reported some other code
    Unrecognized(u16),
}

impl DeviceIdentity {
    /// Classify a raw device code
    pub fn classify(code: u16) -> Self {
        match code {
            EXPECTED_DEVICE_CODE => Self::Matched,
            0x0000 => Self::NotReported,
            other => Self::Unrecognized(other),
        }
    }
}

/// Core display driver for S6D0154
///
/// One instance per physical panel. Operations are blocking sequences of
/// register transactions; callers sharing a panel across contexts must
/// hold a lock from [`set_window`](Self::set_window) until the pixel
/// data that follows has been written.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Reset the panel and run the full configuration
    ///
    /// Runs [`init`](Self::init), then applies the configured rotation and
    /// color order and the configured gamma table.
    pub fn bring_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.init(delay)?;
        self.set_var()?;
        let gamma = self.config.gamma;
        self.set_gamma(&gamma)
    }

    /// Perform hardware reset and the power-on sequence
    ///
    /// The device code is read for diagnostics only: an unexpected code is
    /// logged as a warning and initialization continues.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` on the first failed bus transaction. The
    /// sequence is not resumed; reset and call `init` again.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("s6d0154: init");
        self.interface.reset(delay);

        match self.check_device_code()? {
            DeviceIdentity::Matched | DeviceIdentity::NotReported => {}
            DeviceIdentity::Unrecognized(code) => {
                warn!(
                    "s6d0154: unrecognized device code 0x{code:04X} (expected 0x{EXPECTED_DEVICE_CODE:04X})"
                );
            }
        }

        for step in INIT_SEQUENCE {
            trace!("s6d0154: init step {step:?}");
            match *step {
                InitStep::WriteReg(register, value) => self.write_register(register, value)?,
                InitStep::DelayMs(ms) => delay.delay_ms(ms),
            }
        }

        Ok(())
    }

    /// Read the 16-bit device code
    pub fn read_device_code(&mut self) -> core::result::Result<u16, Error<I>> {
        self.interface
            .write_command(DEVICE_CODE)
            .map_err(Error::Interface)?;
        let mut code = [0u8; 2];
        self.interface
            .read_data(&mut code)
            .map_err(Error::Interface)?;
        Ok(u16::from_be_bytes(code))
    }

    /// Read and classify the device code
    pub fn check_device_code(&mut self) -> core::result::Result<DeviceIdentity, Error<I>> {
        let code = self.read_device_code()?;
        debug!("s6d0154: device code {code:#06x}");
        Ok(DeviceIdentity::classify(code))
    }

    /// Point the GRAM cursor at a window and start a GRAM write
    ///
    /// Uses the configured rotation. Pixel data for the window may be
    /// streamed right after this returns.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window does not fit the
    /// rotated panel, or `Error::Interface` on a bus failure.
    pub fn set_window(&mut self, window: Window) -> DisplayResult<I> {
        self.set_window_rotated(window, self.config.rotation)
    }

    /// Point the GRAM cursor at a window for an explicit rotation
    ///
    /// All three registers are written on every call: the controller's
    /// cursor moves as pixels are written.
    pub fn set_window_rotated(&mut self, window: Window, rotation: Rotation) -> DisplayResult<I> {
        if !window.fits(rotated_dimensions(rotation)) {
            return Err(Error::InvalidWindow {
                x_start: window.x_start,
                y_start: window.y_start,
                x_end: window.x_end,
                y_end: window.y_end,
            });
        }

        let (horizontal, vertical) = gram_address(window.x_start, window.y_start, rotation);
        debug!(
            "s6d0154: window ({}, {})-({}, {}) at {} deg -> R20h={horizontal} R21h={vertical}",
            window.x_start,
            window.y_start,
            window.x_end,
            window.y_end,
            rotation.degrees()
        );

        self.write_register(GRAM_HORIZONTAL_ADDRESS, horizontal)?;
        self.write_register(GRAM_VERTICAL_ADDRESS, vertical)?;
        self.interface
            .write_command(GRAM_DATA)
            .map_err(Error::Interface)
    }

    /// Write the entry mode register from the configured rotation and color order
    pub fn set_var(&mut self) -> DisplayResult<I> {
        self.write_entry_mode(self.config.rotation, self.config.color_order)
    }

    /// Change rotation and reprogram the entry mode
    ///
    /// The configuration keeps the previous rotation if the write fails.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        self.write_entry_mode(rotation, self.config.color_order)
    }

    /// Change color order and reprogram the entry mode
    ///
    /// The configuration keeps the previous color order if the write fails.
    pub fn set_color_order(&mut self, color_order: ColorOrder) -> DisplayResult<I> {
        self.write_entry_mode(self.config.rotation, color_order)
    }

    /// Write R03h, then record the state the controller accepted
    fn write_entry_mode(
        &mut self,
        rotation: Rotation,
        color_order: ColorOrder,
    ) -> DisplayResult<I> {
        let value = entry_mode(rotation, color_order);
        debug!(
            "s6d0154: entry mode {value:#06x} ({} deg, {:?})",
            rotation.degrees(),
            color_order
        );
        self.write_register(ENTRY_MODE, value)?;
        self.config.rotation = rotation;
        self.config.color_order = color_order;
        Ok(())
    }

    /// Program a gamma calibration table
    ///
    /// Every point is masked to its register field width before packing;
    /// out-of-range values are clipped, never rejected. The masked table
    /// becomes the configured gamma once all ten registers are written.
    pub fn set_gamma(&mut self, gamma: &GammaTable) -> DisplayResult<I> {
        let masked = gamma.masked();
        debug!("s6d0154: gamma {masked}");
        if masked != *gamma {
            debug!("s6d0154: gamma values clipped to register width");
        }
        for (register, value) in masked.registers() {
            trace!("s6d0154: gamma R{register:02X}h={value:#06x}");
            self.write_register(register, value)?;
        }
        self.config.gamma = masked;
        Ok(())
    }

    /// Write a 16-bit register
    fn write_register(&mut self, register: u16, value: u16) -> DisplayResult<I> {
        self.interface
            .write_register(register, value)
            .map_err(Error::Interface)
    }

    /// Get logical dimensions for the configured rotation
    pub fn dimensions(&self) -> Dimensions {
        self.config.rotated_dimensions()
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Get color order
    pub fn color_order(&self) -> ColorOrder {
        self.config.color_order
    }

    /// Gamma table last written (masked), or the configured one before that
    pub fn gamma(&self) -> &GammaTable {
        &self.config.gamma
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}
