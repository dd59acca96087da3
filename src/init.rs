//! Power-on initialization sequence
//!
//! The steps below take the controller from hardware reset to an active,
//! 262K color display. They are vendor values for the S6D0154 at VCI = 3.3V
//! and must be issued in exactly this order: the regulator ramp on R11h
//! needs its waits, and the display control register (R07h) only accepts
//! full-on from the intermediate enable state.

use crate::register::{
    BLANK_PERIOD_CONTROL, DISPLAY_CONTROL, DISPLAY_OFF, DISPLAY_ON, DISPLAY_PARTIAL_ON,
    DRIVER_OUTPUT_CONTROL, ENTRY_MODE, EXTERNAL_INTERFACE_CONTROL, FRAME_CYCLE_CONTROL,
    GRAM_HORIZONTAL_ADDRESS, GRAM_VERTICAL_ADDRESS, HORIZONTAL_WINDOW_END,
    HORIZONTAL_WINDOW_START, LCD_INVERSION_CONTROL, POWER_CONTROL_1, POWER_CONTROL_2,
    POWER_CONTROL_3, POWER_CONTROL_4, POWER_CONTROL_5, START_OSCILLATION, VCI_RECYCLING,
    VERTICAL_WINDOW_END, VERTICAL_WINDOW_START,
};

/// One step of an initialization sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Write a value to a register
    WriteReg(u16, u16),
    /// Wait before the next step, in milliseconds
    DelayMs(u32),
}

/// Initialization sequence for the S6D0154, run after hardware reset
pub static INIT_SEQUENCE: &[InitStep] = &[
    // Power supply: DC1/DC0/VC, VREG1OUT, VCOM amplitude, VCOMH
    InitStep::WriteReg(POWER_CONTROL_2, 0x001A),
    InitStep::WriteReg(POWER_CONTROL_3, 0x3121),
    InitStep::WriteReg(POWER_CONTROL_4, 0x006C),
    InitStep::WriteReg(POWER_CONTROL_5, 0x4249),
    // SAP, AP, DSTB, STB
    InitStep::WriteReg(POWER_CONTROL_1, 0x0800),
    // Regulator ramp
    InitStep::WriteReg(POWER_CONTROL_2, 0x011A),
    InitStep::DelayMs(10),
    InitStep::WriteReg(POWER_CONTROL_2, 0x031A),
    InitStep::DelayMs(10),
    InitStep::WriteReg(POWER_CONTROL_2, 0x071A),
    InitStep::DelayMs(10),
    InitStep::WriteReg(POWER_CONTROL_2, 0x0F1A),
    InitStep::DelayMs(10),
    InitStep::WriteReg(POWER_CONTROL_2, 0x0F3A),
    InitStep::DelayMs(30),
    // SS bit, 320 driving lines
    InitStep::WriteReg(DRIVER_OUTPUT_CONTROL, 0x0128),
    // No line inversion, FLD = 0
    InitStep::WriteReg(LCD_INVERSION_CONTROL, 0x0300),
    // BGR, horizontal and vertical increment, AM = 0
    InitStep::WriteReg(ENTRY_MODE, 0x1030),
    InitStep::WriteReg(DISPLAY_CONTROL, DISPLAY_OFF),
    // 8/8 raster periods of front and back porch
    InitStep::WriteReg(BLANK_PERIOD_CONTROL, 0x0808),
    // 1/1/16 input clock
    InitStep::WriteReg(FRAME_CYCLE_CONTROL, 0x1100),
    // System interface, internal clock
    InitStep::WriteReg(EXTERNAL_INTERFACE_CONTROL, 0x0000),
    // VCI recycling, multiplier 2
    InitStep::WriteReg(VCI_RECYCLING, 0x0020),
    // GRAM cursor
    InitStep::WriteReg(GRAM_HORIZONTAL_ADDRESS, 0x0000),
    InitStep::WriteReg(GRAM_VERTICAL_ADDRESS, 0x0000),
    // GRAM window: columns 0..=239, rows 0..=319
    InitStep::WriteReg(HORIZONTAL_WINDOW_START, 0x0000),
    InitStep::WriteReg(HORIZONTAL_WINDOW_END, 0x00EF),
    InitStep::WriteReg(VERTICAL_WINDOW_START, 0x0000),
    InitStep::WriteReg(VERTICAL_WINDOW_END, 0x013F),
    InitStep::WriteReg(START_OSCILLATION, 0x0801),
    InitStep::WriteReg(DISPLAY_CONTROL, DISPLAY_PARTIAL_ON),
    InitStep::WriteReg(DISPLAY_CONTROL, DISPLAY_ON),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEIGHT, WIDTH};

    fn writes() -> impl Iterator<Item = (u16, u16)> {
        INIT_SEQUENCE.iter().filter_map(|step| match *step {
            InitStep::WriteReg(reg, value) => Some((reg, value)),
            InitStep::DelayMs(_) => None,
        })
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(writes().count(), 27);
        let delays: alloc::vec::Vec<u32> = INIT_SEQUENCE
            .iter()
            .filter_map(|step| match *step {
                InitStep::DelayMs(ms) => Some(ms),
                InitStep::WriteReg(..) => None,
            })
            .collect();
        assert_eq!(delays, [10, 10, 10, 10, 30]);
    }

    #[test]
    fn test_gram_window_matches_panel() {
        let value_of = |reg: u16| writes().find(|(r, _)| *r == reg).map(|(_, v)| v);
        assert_eq!(value_of(HORIZONTAL_WINDOW_END), Some(WIDTH - 1));
        assert_eq!(value_of(VERTICAL_WINDOW_END), Some(HEIGHT - 1));
    }

    #[test]
    fn test_display_enabled_in_two_steps_at_the_end() {
        let tail: alloc::vec::Vec<_> = writes().skip(25).collect();
        assert_eq!(
            tail,
            [
                (DISPLAY_CONTROL, DISPLAY_PARTIAL_ON),
                (DISPLAY_CONTROL, DISPLAY_ON)
            ]
        );
    }

    #[test]
    fn test_every_ramp_step_is_followed_by_a_delay() {
        for pair in INIT_SEQUENCE.windows(2) {
            if let InitStep::WriteReg(POWER_CONTROL_2, value) = pair[0] {
                if value != 0x001A {
                    assert!(matches!(pair[1], InitStep::DelayMs(_)), "R11h={value:#06x}");
                }
            }
        }
    }
}
