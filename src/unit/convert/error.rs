use thiserror::Error;

/// An error returned by the checked conversions when the unit factor is unusable.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
    #[error("unit must not be zero")]
    Zero,
    #[error("unit must not be negative")]
    Negative,
    #[error("unit is not a number")]
    NotANumber,
    #[error("unit must be finite")]
    Infinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ConversionError::Zero.to_string(), "unit must not be zero");
        assert_eq!(ConversionError::NotANumber.to_string(), "unit is not a number");
    }
}
