//! Decimal prefixes.
//!
//! Prefixes are plain multipliers and combine with any constant in
//! [`unit`](crate::unit) by multiplication, e.g. `MILLI * DARCY`.

pub const MICRO: f64 = 1.0e-6;
pub const MILLI: f64 = 1.0e-3;
pub const CENTI: f64 = 1.0e-2;
pub const DECI: f64 = 1.0e-1;
pub const KILO: f64 = 1.0e3;
pub const MEGA: f64 = 1.0e6;
pub const GIGA: f64 = 1.0e9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_ten() {
        assert_eq!(MICRO, 1e-6);
        assert_eq!(MILLI, 0.001);
        assert_eq!(CENTI, 0.01);
        assert_eq!(DECI, 0.1);
        assert_eq!(KILO, 1000.0);
        assert_eq!(MEGA, 1_000_000.0);
        assert_eq!(GIGA, 1_000_000_000.0);
    }

    #[test]
    fn kilo_and_milli_cancel() {
        assert_eq!(KILO * MILLI, 1.0);
    }
}
