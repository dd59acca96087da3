//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the S6D0154 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The S6D0154 (in 4-wire serial mode) requires:
//! - SPI bus (MOSI + MISO + SCK), chip select handled by the [`SpiDevice`]
//! - 2 GPIO pins:
//!   - **DC**: Register index / data select (output)
//!   - **RST**: Reset (output, active low)
//!
//! Register indexes and values are 16 bits wide and go over the wire
//! most significant byte first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use s6d0154::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! interface.reset(&mut delay);
//!
//! // Write a register
//! let _ = interface.write_register(0x0007, 0x0017);
//!
//! // Read the device code
//! let mut code = [0u8; 2];
//! let _ = interface.write_command(0x0000);
//! let _ = interface.read_data(&mut code);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the register bus to an S6D0154 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus that can perform index writes, register writes and reads.
///
/// ## Implementing
///
/// For SPI panels, use the provided [`Interface`] struct. Parallel (8080)
/// buses or framework-provided transports implement this trait on their
/// own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write a register index without a data phase
    ///
    /// Used to select a register before a read, and for
    /// [`GRAM_DATA`](crate::register::GRAM_DATA).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    #[allow(clippy::type_complexity)]
    fn write_command(&mut self, register: u16) -> InterfaceResult<(), Self::Error>;

    /// Write a 16-bit value to a register
    ///
    /// The implementation must send the index phase followed by the data
    /// phase, with no other register access in between. The two phases
    /// may be separate bus transactions: the controller latches the index
    /// and keeps it across chip-select cycles, the same way it keeps it
    /// between [`write_command`](Self::write_command) and
    /// [`read_data`](Self::read_data).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    #[allow(clippy::type_complexity)]
    fn write_register(&mut self, register: u16, value: u16) -> InterfaceResult<(), Self::Error>;

    /// Read bytes following a prior [`write_command`](Self::write_command)
    ///
    /// # Arguments
    ///
    /// * `buffer` - Filled with the bytes returned by the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    #[allow(clippy::type_complexity)]
    fn read_data(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 20µs
    /// 3. Set RST pin high
    /// 4. Wait at least 120ms for the controller to come out of reset
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Time the reset line is held low, in microseconds
pub const RESET_PULSE_US: u32 = 20;

/// Time to wait after releasing reset, in milliseconds
pub const RESET_RECOVERY_MS: u32 = 120;

/// Hardware interface implementation for S6D0154
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Index/data select pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use s6d0154::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // OutputPin (DC)
///     MockPin,  // OutputPin (RST)
/// );
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Index/data select pin (low=index, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Index/data pin (output, low=index, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    fn write_index(
        &mut self,
        register: u16,
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, DC::Error>> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi
            .write(&register.to_be_bytes())
            .map_err(InterfaceError::Spi)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn write_command(&mut self, register: u16) -> InterfaceResult<(), Self::Error> {
        self.write_index(register)
    }

    fn write_register(&mut self, register: u16, value: u16) -> InterfaceResult<(), Self::Error> {
        self.write_index(register)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi
            .write(&value.to_be_bytes())
            .map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.read(buffer).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        let _ = self.rst.set_low();
        delay.delay_us(RESET_PULSE_US);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_RECOVERY_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, PartialEq)]
    enum Wire {
        Dc(bool),
        Write(Vec<u8>),
        Read(usize),
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    // SPI and DC share one log so the interleaving is visible.
    type Log = alloc::rc::Rc<core::cell::RefCell<Vec<Wire>>>;

    struct MockSpi {
        log: Log,
        read_bytes: [u8; 2],
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                match op {
                    Operation::Write(data) => {
                        self.log.borrow_mut().push(Wire::Write(data.to_vec()));
                    }
                    Operation::Read(buf) => {
                        self.log.borrow_mut().push(Wire::Read(buf.len()));
                        for (dst, src) in buf.iter_mut().zip(self.read_bytes) {
                            *dst = src;
                        }
                    }
                    _ => {}
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Option<Log>,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if let Some(log) = &self.log {
                log.borrow_mut().push(Wire::Dc(false));
            }
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            if let Some(log) = &self.log {
                log.borrow_mut().push(Wire::Dc(true));
            }
            Ok(())
        }
    }

    struct MockDelay {
        total_us: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_us += u64::from(ns) / 1_000;
        }
    }

    fn interface(fail: bool) -> (Interface<MockSpi, MockPin, MockPin>, Log) {
        let log = Log::default();
        let spi = MockSpi {
            log: log.clone(),
            read_bytes: [0x01, 0x54],
            fail,
        };
        let dc = MockPin {
            log: Some(log.clone()),
        };
        (Interface::new(spi, dc, MockPin { log: None }), log)
    }

    #[test]
    fn test_write_register_sends_index_then_value_big_endian() {
        let (mut iface, log) = interface(false);
        iface.write_register(0x0011, 0x0F3A).unwrap();
        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Wire::Dc(false),
                Wire::Write(alloc::vec![0x00, 0x11]),
                Wire::Dc(true),
                Wire::Write(alloc::vec![0x0F, 0x3A]),
            ]
        );
    }

    #[test]
    fn test_write_command_has_no_data_phase() {
        let (mut iface, log) = interface(false);
        iface.write_command(0x0022).unwrap();
        assert_eq!(
            *log.borrow(),
            alloc::vec![Wire::Dc(false), Wire::Write(alloc::vec![0x00, 0x22])]
        );
    }

    #[test]
    fn test_read_data_in_data_mode() {
        let (mut iface, log) = interface(false);
        let mut buf = [0u8; 2];
        iface.read_data(&mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x54]);
        assert_eq!(*log.borrow(), alloc::vec![Wire::Dc(true), Wire::Read(2)]);
    }

    #[test]
    fn test_spi_failure_maps_to_spi_error() {
        let (mut iface, _log) = interface(true);
        let result = iface.write_register(0x0007, 0x0017);
        assert!(matches!(result, Err(InterfaceError::Spi(_))));
    }

    #[test]
    fn test_reset_waits_for_recovery() {
        let (mut iface, _log) = interface(false);
        let mut delay = MockDelay { total_us: 0 };
        iface.reset(&mut delay);
        assert!(delay.total_us >= u64::from(RESET_RECOVERY_MS) * 1_000);
    }
}
