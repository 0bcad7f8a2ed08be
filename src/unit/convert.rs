//! Conversions between external and internal units.
//!
//! Internal units are *always*, and exclusively, SI. A quantity expressed in
//! an external unit becomes internal by multiplying with that unit's constant,
//! and goes back out by dividing by it.
//!
//! [`from`] and [`to`] never validate the unit factor. Passing a mismatched
//! unit silently produces a wrong value; passing `0.0` to [`to`] produces an
//! infinity or `NaN`. Use [`try_from_unit`] or [`try_to_unit`] where the unit
//! factor is not a known table constant.

mod error;

use std::ops::{Div, Mul};

use num_traits::Float;

pub use error::ConversionError;

/// Converts `q`, given in the external unit `unit`, to internal units.
///
/// ```
/// use reservoir_units::{prefix::MILLI, unit::{self, convert}};
///
/// let k = convert::from(100.0, MILLI * unit::DARCY);
/// assert!((k - 9.869232667160130e-14).abs() < 1e-26);
/// ```
#[inline]
pub fn from<T: Mul<Output = T>>(q: T, unit: T) -> T {
    q * unit
}

/// Converts the internal quantity `q` to the external unit `unit`.
///
/// ```
/// use reservoir_units::unit::{self, convert};
///
/// let p = convert::to(101_325.0, unit::ATM);
/// assert_eq!(p, 1.0);
/// ```
#[inline]
pub fn to<T: Div<Output = T>>(q: T, unit: T) -> T {
    q / unit
}

/// Converts every element of `values` from `unit` to internal units, in place.
///
/// ```
/// use reservoir_units::{prefix::MILLI, unit::{self, convert}};
///
/// let mut kx = vec![100.0, 250.0, 500.0];
/// convert::from_slice(&mut kx, MILLI * unit::DARCY);
/// assert!(kx.iter().all(|k| *k < 1.0e-12));
/// ```
pub fn from_slice<T: Mul<Output = T> + Copy>(values: &mut [T], unit: T) {
    for value in values.iter_mut() {
        *value = from(*value, unit);
    }
}

/// Converts every element of `values` from internal units to `unit`, in place.
///
/// ```
/// use reservoir_units::unit::{self, convert};
///
/// let mut p = vec![1.0e5, 2.0e5];
/// convert::to_slice(&mut p, unit::BARSA);
/// assert_eq!(p, [1.0, 2.0]);
/// ```
pub fn to_slice<T: Div<Output = T> + Copy>(values: &mut [T], unit: T) {
    for value in values.iter_mut() {
        *value = to(*value, unit);
    }
}

/// Like [`from`], but first checks that `unit` is a usable unit factor.
///
/// # Errors
///
/// Returns a [`ConversionError`] if `unit` is zero, negative, infinite or `NaN`.
pub fn try_from_unit<T: Float>(q: T, unit: T) -> Result<T, ConversionError> {
    check_unit(unit)?;
    Ok(from(q, unit))
}

/// Like [`to`], but first checks that `unit` is a usable unit factor.
///
/// ```
/// use reservoir_units::unit::{self, convert::{self, ConversionError}};
///
/// assert_eq!(convert::try_to_unit(86_400.0, unit::DAY), Ok(1.0));
/// assert_eq!(convert::try_to_unit(1.0, 0.0), Err(ConversionError::Zero));
/// ```
///
/// # Errors
///
/// Returns a [`ConversionError`] if `unit` is zero, negative, infinite or `NaN`.
pub fn try_to_unit<T: Float>(q: T, unit: T) -> Result<T, ConversionError> {
    check_unit(unit)?;
    Ok(to(q, unit))
}

fn check_unit<T: Float>(unit: T) -> Result<(), ConversionError> {
    if unit.is_nan() {
        Err(ConversionError::NotANumber)
    } else if unit.is_infinite() {
        Err(ConversionError::Infinite)
    } else if unit.is_zero() {
        Err(ConversionError::Zero)
    } else if unit.is_sign_negative() {
        Err(ConversionError::Negative)
    } else {
        Ok(())
    }
}
