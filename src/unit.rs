//! Unit constants.
//!
//! Each constant is the size of the named unit expressed in internal (SI)
//! units. The base units [`METER`], [`SECOND`] and [`KILOGRAM`] are `1.0`;
//! every other constant is derived from them, from the [`prefix`] table,
//! and from numeric literals.
//!
//! Use the constants with [`convert::from`] and [`convert::to`], or combine
//! them by plain arithmetic:
//!
//! ```
//! use reservoir_units::{prefix::MILLI, unit::{self, convert}};
//!
//! let rate = convert::from(1.0, unit::square(unit::FEET) / unit::DAY);
//! let k_md = convert::to(1.0e-13, MILLI * unit::DARCY);
//! # assert!(rate > 0.0 && k_md > 0.0);
//! ```

pub mod convert;

use std::ops::Mul;

use crate::prefix;

/// Returns `v * v`.
///
/// ```
/// use reservoir_units::unit::square;
///
/// assert_eq!(square(3.0), 9.0);
/// assert_eq!(square(-2), 4);
/// ```
#[inline]
pub fn square<T: Mul<Output = T> + Copy>(v: T) -> T {
    v * v
}

/// Returns `v * v * v`.
///
/// ```
/// use reservoir_units::unit::cubic;
///
/// assert_eq!(cubic(2.0), 8.0);
/// ```
#[inline]
pub fn cubic<T: Mul<Output = T> + Copy>(v: T) -> T {
    v * v * v
}

// Length.
pub const METER: f64 = 1.0;
pub const INCH: f64 = 2.54 * prefix::CENTI * METER;
pub const FEET: f64 = 12.0 * INCH;

// Time.
pub const SECOND: f64 = 1.0;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const YEAR: f64 = 365.0 * DAY;

// Mass.
pub const KILOGRAM: f64 = 1.0;

/// Avoirdupois pound.
pub const POUND: f64 = 0.453_592_37 * KILOGRAM;

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.806_65 * METER / (SECOND * SECOND);

// Force.
pub const NEWTON: f64 = KILOGRAM * METER / (SECOND * SECOND);

/// Pound-force.
pub const LBF: f64 = POUND * GRAVITY;

// Pressure.
pub const PASCAL: f64 = NEWTON / (METER * METER);
pub const BARSA: f64 = 100_000.0 * PASCAL;
pub const ATM: f64 = 101_325.0 * PASCAL;
pub const PSIA: f64 = LBF / (INCH * INCH);

// Viscosity.
pub const PAS: f64 = PASCAL * SECOND;
pub const POISE: f64 = prefix::DECI * PAS;

// One darcy lets 1 cm³/s of a 1 cP fluid through 1 cm² of medium
// under a pressure gradient of 1 atm/cm.
const CENTIMETER: f64 = prefix::CENTI * METER;
const PRESSURE_GRADIENT: f64 = ATM / CENTIMETER;
const AREA: f64 = CENTIMETER * CENTIMETER;
const FLUX: f64 = CENTIMETER * CENTIMETER * CENTIMETER / SECOND;
const VELOCITY: f64 = FLUX / AREA;
const CENTIPOISE: f64 = prefix::CENTI * POISE;

/// Permeability, m².
///
/// Equal to `1e-7 m² / 101325`, or about `9.869232667160130e-13 m²`.
pub const DARCY: f64 = (VELOCITY * CENTIPOISE) / PRESSURE_GRADIENT;
