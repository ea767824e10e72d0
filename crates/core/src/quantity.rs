//! Stock quantity guard.

use crate::error::{RepositoryError, RepositoryResult};

/// Reject quantities below zero.
pub fn ensure_non_negative(quantity: i64) -> RepositoryResult<i64> {
    if quantity < 0 {
        return Err(RepositoryError::invalid_quantity(quantity));
    }
    Ok(quantity)
}

/// Apply a signed delta to a quantity, rejecting overflow and negative results.
pub fn apply_delta(current: i64, delta: i64) -> RepositoryResult<i64> {
    let next = i128::from(current) + i128::from(delta);
    match i64::try_from(next) {
        Ok(next) => ensure_non_negative(next),
        Err(_) => Err(RepositoryError::invalid_quantity(next)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_allowed() {
        assert_eq!(ensure_non_negative(0), Ok(0));
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(
            ensure_non_negative(-1),
            Err(RepositoryError::InvalidQuantity { quantity: -1 })
        );
    }

    #[test]
    fn delta_below_zero_is_rejected() {
        assert_eq!(apply_delta(10, 5), Ok(15));
        assert_eq!(
            apply_delta(3, -5),
            Err(RepositoryError::InvalidQuantity { quantity: -2 })
        );
    }

    #[test]
    fn delta_overflow_reports_the_unrepresentable_sum() {
        let err = apply_delta(i64::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidQuantity {
                quantity: i128::from(i64::MAX) + 1
            }
        );
        assert_eq!(
            err.to_string(),
            "quantity 9223372036854775808 is outside the valid range 0..=9223372036854775807"
        );
    }

    #[test]
    fn delta_underflow_reports_the_negative_sum() {
        assert_eq!(
            apply_delta(0, i64::MIN),
            Err(RepositoryError::InvalidQuantity {
                quantity: i128::from(i64::MIN)
            })
        );
    }
}
