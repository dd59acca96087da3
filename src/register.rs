//! S6D0154 register map
//!
//! The controller exposes a flat 16-bit register space. Every access starts
//! with the register index written with DC low, followed by a 16-bit value
//! (or a read) with DC high. Registers used without a data phase, such as
//! [`GRAM_DATA`], are written as a bare index.
//!
//! ## Example
//!
//! ```rust,no_run
//! use s6d0154::{register, DisplayInterface, Interface};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Move the GRAM cursor to the origin, then start a pixel write
//! let _ = interface.write_register(register::GRAM_HORIZONTAL_ADDRESS, 0);
//! let _ = interface.write_register(register::GRAM_VERTICAL_ADDRESS, 0);
//! let _ = interface.write_command(register::GRAM_DATA);
//! ```

// Identification

/// Device code register (R00h)
///
/// Reading it after writing the index returns the 16-bit device code.
pub const DEVICE_CODE: u16 = 0x0000;

/// Device code reported by a genuine S6D0154
pub const EXPECTED_DEVICE_CODE: u16 = 0x0154;

// Panel geometry and scan control

/// Driver output control (R01h)
///
/// SS bit and number of driving lines.
pub const DRIVER_OUTPUT_CONTROL: u16 = 0x0001;

/// LCD inversion control (R02h)
pub const LCD_INVERSION_CONTROL: u16 = 0x0002;

/// Entry mode (R03h)
///
/// - Bit 12 (BGR): color channel order
/// - Bits 5:4 (ID1, ID0): vertical and horizontal increment
/// - Bit 3 (AM): address update direction
pub const ENTRY_MODE: u16 = 0x0003;

/// Display control (R07h)
pub const DISPLAY_CONTROL: u16 = 0x0007;

/// Blank period control (R08h), front and back porch
pub const BLANK_PERIOD_CONTROL: u16 = 0x0008;

/// Frame cycle control (R0Bh)
pub const FRAME_CYCLE_CONTROL: u16 = 0x000B;

/// External display interface control (R0Ch)
pub const EXTERNAL_INTERFACE_CONTROL: u16 = 0x000C;

/// Start oscillation (R0Fh)
pub const START_OSCILLATION: u16 = 0x000F;

// Power control

/// Power control 1 (R10h): SAP, AP, DSTB, STB
pub const POWER_CONTROL_1: u16 = 0x0010;

/// Power control 2 (R11h): step-up circuit and regulator ramp
pub const POWER_CONTROL_2: u16 = 0x0011;

/// Power control 3 (R12h): VREG1OUT level
pub const POWER_CONTROL_3: u16 = 0x0012;

/// Power control 4 (R13h): VCOM amplitude
pub const POWER_CONTROL_4: u16 = 0x0013;

/// Power control 5 (R14h): VCOMH level
pub const POWER_CONTROL_5: u16 = 0x0014;

/// VCI recycling (R15h)
pub const VCI_RECYCLING: u16 = 0x0015;

// GRAM access

/// GRAM horizontal address set (R20h)
pub const GRAM_HORIZONTAL_ADDRESS: u16 = 0x0020;

/// GRAM vertical address set (R21h)
pub const GRAM_VERTICAL_ADDRESS: u16 = 0x0021;

/// Write data to GRAM (R22h)
///
/// Index-only write; pixel data follows on the data phase.
pub const GRAM_DATA: u16 = 0x0022;

/// Horizontal window end address (R36h)
pub const HORIZONTAL_WINDOW_END: u16 = 0x0036;

/// Horizontal window start address (R37h)
pub const HORIZONTAL_WINDOW_START: u16 = 0x0037;

/// Vertical window end address (R38h)
pub const VERTICAL_WINDOW_END: u16 = 0x0038;

/// Vertical window start address (R39h)
pub const VERTICAL_WINDOW_START: u16 = 0x0039;

// Gamma control

/// Gamma control 1 (R50h): positive KP1/KP0
pub const GAMMA_CONTROL_1: u16 = 0x0050;
/// Gamma control 2 (R51h): positive KP3/KP2
pub const GAMMA_CONTROL_2: u16 = 0x0051;
/// Gamma control 3 (R52h): positive KP5/KP4
pub const GAMMA_CONTROL_3: u16 = 0x0052;
/// Gamma control 4 (R53h): positive RP1/RP0
pub const GAMMA_CONTROL_4: u16 = 0x0053;
/// Gamma control 5 (R54h): negative KN1/KN0
pub const GAMMA_CONTROL_5: u16 = 0x0054;
/// Gamma control 6 (R55h): negative KN3/KN2
pub const GAMMA_CONTROL_6: u16 = 0x0055;
/// Gamma control 7 (R56h): negative KN5/KN4
pub const GAMMA_CONTROL_7: u16 = 0x0056;
/// Gamma control 8 (R57h): negative RN1/RN0
pub const GAMMA_CONTROL_8: u16 = 0x0057;
/// Gamma control 9 (R58h): positive VRP1/VRP0
pub const GAMMA_CONTROL_9: u16 = 0x0058;
/// Gamma control 10 (R59h): negative VRN1/VRN0
pub const GAMMA_CONTROL_10: u16 = 0x0059;

// Field values

/// BGR bit position in [`ENTRY_MODE`]
pub const ENTRY_MODE_BGR_SHIFT: u16 = 12;

/// [`DISPLAY_CONTROL`] value for the intermediate enable step
pub const DISPLAY_PARTIAL_ON: u16 = 0x0016;

/// [`DISPLAY_CONTROL`] value for 262K colors, display on
pub const DISPLAY_ON: u16 = 0x0017;

/// [`DISPLAY_CONTROL`] value with all outputs disabled
pub const DISPLAY_OFF: u16 = 0x0000;
