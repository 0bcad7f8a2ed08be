//! Fixed-literal conversion constants used by older well and transmissibility code.
//!
//! These values are *not* derived from [`unit`](crate::unit) and do not
//! agree with it exactly. In particular [`FEET`] differs from
//! [`unit::FEET`](crate::unit::FEET) by about 2e-9 m, and
//! [`MILLIDARCY`] is a rounded value of `MILLI * DARCY`. Callers that mix
//! the two groups get slightly inconsistent results; both are kept as-is
//! so existing results reproduce bit for bit.

pub const MILLIDARCY: f64 = 9.869_23e-16;
pub const VISCOSITY_UNIT: f64 = 1e-3;
pub const DAYS2SECONDS: f64 = 86_400.0;
pub const FEET: f64 = 0.304_799_997_988_32;

/// Scaling applied to well indices: `VISCOSITY_UNIT / (DAYS2SECONDS * 1e5)`.
pub const WELL_INDEX_UNIT: f64 = VISCOSITY_UNIT / (DAYS2SECONDS * 1e5);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{prefix, unit};

    #[test]
    fn literal_values() {
        assert_eq!(MILLIDARCY, 9.86923e-16);
        assert_eq!(VISCOSITY_UNIT, 0.001);
        assert_eq!(FEET, 0.30479999798832);
        assert_eq!(WELL_INDEX_UNIT, 1e-3 / (86_400.0 * 1e5));
    }

    #[test]
    fn feet_differs_from_table() {
        assert_ne!(FEET, unit::FEET);
        assert_relative_eq!(FEET, unit::FEET, max_relative = 1e-8);
    }

    #[test]
    fn close_to_table() {
        assert_ne!(MILLIDARCY, prefix::MILLI * unit::DARCY);
        assert_relative_eq!(MILLIDARCY, prefix::MILLI * unit::DARCY, max_relative = 1e-5);

        assert_eq!(DAYS2SECONDS, unit::DAY);
        assert_eq!(VISCOSITY_UNIT, prefix::CENTI * unit::POISE);
    }
}
