//! Gamma curve calibration
//!
//! The S6D0154 takes its gamma correction as two curves of ten control
//! points each: the positive polarity curve (`VRP0 VRP1 RP0 RP1 KP0..KP5`)
//! and the negative polarity curve (`VRN0 VRN1 RN0 RN1 KN0..KN5`). The
//! first two points of each curve are 5-bit fields, the rest are 4-bit.
//!
//! Values wider than their field are silently truncated before they reach
//! the controller. Pairs of masked points are packed into the ten gamma
//! registers, high point in the upper byte, in the order given by
//! [`REGISTER_LAYOUT`].
//!
//! ## Text form
//!
//! Calibration is commonly supplied as a string of hexadecimal values,
//! one curve per line (a `/` also separates curves):
//!
//! ```
//! use s6d0154::GammaTable;
//!
//! let table: GammaTable = match "00 10 0 0 1 1 3 6 8 4\n10 00 3 3 5 6 6 4 3 3".parse() {
//!     Ok(table) => table,
//!     Err(_) => return,
//! };
//! assert_eq!(table, GammaTable::DEFAULT);
//!
//! // R50h carries KP1 (point 5) above KP0 (point 4)
//! let (register, value) = table.registers()[0];
//! assert_eq!(register, 0x0050);
//! assert_eq!(value, 0x0101);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::GammaParseError;
use crate::register::{
    GAMMA_CONTROL_1, GAMMA_CONTROL_2, GAMMA_CONTROL_3, GAMMA_CONTROL_4, GAMMA_CONTROL_5,
    GAMMA_CONTROL_6, GAMMA_CONTROL_7, GAMMA_CONTROL_8, GAMMA_CONTROL_9, GAMMA_CONTROL_10,
};

/// Number of gamma curves
pub const GAMMA_CURVES: usize = 2;

/// Number of control points per curve
pub const GAMMA_POINTS: usize = 10;

/// Number of registers written by a gamma update
pub const GAMMA_REGISTERS: usize = 10;

/// Bit width of each control point, by index within a curve
pub const POINT_WIDTHS: [u8; GAMMA_POINTS] = [5, 5, 4, 4, 4, 4, 4, 4, 4, 4];

/// Field mask of each control point, by index within a curve
pub const POINT_MASKS: [u16; GAMMA_POINTS] = {
    let mut masks = [0; GAMMA_POINTS];
    let mut i = 0;
    while i < GAMMA_POINTS {
        masks[i] = field_mask(POINT_WIDTHS[i]);
        i += 1;
    }
    masks
};

/// Default calibration in text form
pub const DEFAULT_GAMMA: &str = "00 10 0 0 1 1 3 6 8 4\n10 00 3 3 5 6 6 4 3 3";

/// Mask with the low `bits` bits set
pub const fn field_mask(bits: u8) -> u16 {
    if bits >= 16 {
        u16::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Truncate a value to a field of `bits` bits
pub const fn mask(value: u16, bits: u8) -> u16 {
    value & field_mask(bits)
}

/// Truncate a value to the field width of control point `point`
///
/// Points past the end of a curve have no field and mask to zero.
pub fn mask_point(point: usize, value: u16) -> u16 {
    POINT_MASKS.get(point).map_or(0, |&m| value & m)
}

/// Gamma curve selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Positive polarity curve
    Positive,
    /// Negative polarity curve
    Negative,
}

impl Curve {
    /// Both curves, in table order
    pub const ALL: [Self; GAMMA_CURVES] = [Self::Positive, Self::Negative];

    const fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
        }
    }
}

/// One gamma register and the two control points packed into it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GammaField {
    /// Register address
    pub register: u16,
    /// Curve both points come from
    pub curve: Curve,
    /// Point stored in bits 15:8
    pub high: usize,
    /// Point stored in bits 7:0
    pub low: usize,
}

const fn field(register: u16, curve: Curve, high: usize, low: usize) -> GammaField {
    GammaField {
        register,
        curve,
        high,
        low,
    }
}

/// Register packing, in write order
///
/// The point-to-register assignment follows the controller's gamma
/// register numbering and is not monotonic in the point index.
pub const REGISTER_LAYOUT: [GammaField; GAMMA_REGISTERS] = [
    field(GAMMA_CONTROL_1, Curve::Positive, 5, 4),
    field(GAMMA_CONTROL_2, Curve::Positive, 7, 6),
    field(GAMMA_CONTROL_3, Curve::Positive, 9, 8),
    field(GAMMA_CONTROL_4, Curve::Positive, 3, 2),
    field(GAMMA_CONTROL_9, Curve::Positive, 1, 0),
    field(GAMMA_CONTROL_5, Curve::Negative, 5, 4),
    field(GAMMA_CONTROL_6, Curve::Negative, 7, 6),
    field(GAMMA_CONTROL_7, Curve::Negative, 9, 8),
    field(GAMMA_CONTROL_8, Curve::Negative, 3, 2),
    field(GAMMA_CONTROL_10, Curve::Negative, 1, 0),
];

/// Gamma calibration table: two curves of ten points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GammaTable {
    curves: [[u16; GAMMA_POINTS]; GAMMA_CURVES],
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GammaTable {
    /// Default calibration for the panel
    pub const DEFAULT: Self = Self::new(
        [0x00, 0x10, 0, 0, 1, 1, 3, 6, 8, 4],
        [0x10, 0x00, 3, 3, 5, 6, 6, 4, 3, 3],
    );

    /// Create a table from its positive and negative curves
    pub const fn new(positive: [u16; GAMMA_POINTS], negative: [u16; GAMMA_POINTS]) -> Self {
        Self {
            curves: [positive, negative],
        }
    }

    /// Control points of one curve
    pub fn curve(&self, curve: Curve) -> &[u16; GAMMA_POINTS] {
        &self.curves[curve.index()]
    }

    /// Control point `point` of `curve`, or `None` past the end of the curve
    pub fn get(&self, curve: Curve, point: usize) -> Option<u16> {
        self.curves[curve.index()].get(point).copied()
    }

    /// Mutable access to a control point
    pub fn get_mut(&mut self, curve: Curve, point: usize) -> Option<&mut u16> {
        self.curves[curve.index()].get_mut(point)
    }

    /// Set a control point, returning `false` past the end of the curve
    ///
    /// The value is stored as given and masked when written.
    pub fn set(&mut self, curve: Curve, point: usize, value: u16) -> bool {
        match self.get_mut(curve, point) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Copy of the table with every point truncated to its field width
    pub fn masked(&self) -> Self {
        let mut out = *self;
        for curve in &mut out.curves {
            for (point, value) in curve.iter_mut().enumerate() {
                *value = mask_point(point, *value);
            }
        }
        out
    }

    /// Rebuild a table from gamma register values
    ///
    /// Registers are matched by address, so any order is accepted. Points
    /// whose register is missing are left at zero, and bits outside a
    /// point's field are dropped.
    pub fn from_registers(registers: &[(u16, u16)]) -> Self {
        let mut table = Self::new([0; GAMMA_POINTS], [0; GAMMA_POINTS]);
        for &(register, value) in registers {
            let Some(layout) = REGISTER_LAYOUT.iter().find(|f| f.register == register) else {
                continue;
            };
            let curve = &mut table.curves[layout.curve.index()];
            curve[layout.high] = mask_point(layout.high, value >> 8);
            curve[layout.low] = mask_point(layout.low, value & 0xFF);
        }
        table
    }

    /// Register writes for this table, in the order they must be issued
    ///
    /// Points are masked before packing, so any table produces valid
    /// register values.
    pub fn registers(&self) -> [(u16, u16); GAMMA_REGISTERS] {
        let masked = self.masked();
        REGISTER_LAYOUT.map(|f| {
            let curve = masked.curve(f.curve);
            (f.register, (curve[f.high] << 8) | curve[f.low])
        })
    }
}

impl FromStr for GammaTable {
    type Err = GammaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut curves = [[0u16; GAMMA_POINTS]; GAMMA_CURVES];
        let mut found = 0;

        for line in s
            .split(|c: char| c == '\n' || c == '/')
            .map(str::trim)
            .filter(|line| !line.is_empty())
        {
            let Some(curve) = curves.get_mut(found) else {
                found += 1;
                continue;
            };
            let mut points = 0;
            for token in line.split_whitespace() {
                if let Some(slot) = curve.get_mut(points) {
                    *slot = parse_hex(token).ok_or(GammaParseError::InvalidValue {
                        curve: found,
                        point: points,
                    })?;
                }
                points += 1;
            }
            if points != GAMMA_POINTS {
                return Err(GammaParseError::WrongPointCount {
                    curve: found,
                    found: points,
                });
            }
            found += 1;
        }

        if found != GAMMA_CURVES {
            return Err(GammaParseError::WrongCurveCount { found });
        }
        Ok(Self { curves })
    }
}

fn parse_hex(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u16::from_str_radix(digits, 16).ok()
}

impl fmt::Display for GammaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, curve) in self.curves.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in curve.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:02x}")?;
            }
        }
        Ok(())
    }
}
