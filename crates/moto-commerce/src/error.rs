//! Marketplace error types.

use thiserror::Error;

/// Errors that can occur in marketplace operations.
///
/// The ledger, compare list, and search pipeline are total over their
/// inputs, so the taxonomy is small: only the calculator entry points can
/// fail, on the two inputs that would otherwise divide by zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// Loan tenure of zero months.
    #[error("Invalid loan tenure: {0} months")]
    InvalidTenure(u32),

    /// Mileage at or below zero km/l.
    #[error("Invalid mileage: {0} km/l")]
    InvalidMileage(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::InvalidTenure(0);
        assert_eq!(err.to_string(), "Invalid loan tenure: 0 months");

        let err = MarketError::InvalidMileage(0.0);
        assert_eq!(err.to_string(), "Invalid mileage: 0 km/l");
    }
}
