//! Input validation and the crate error type.
//!
//! Every public solver checks its arguments through [`validate`] before any
//! recursion or table construction starts, so a rejected call performs no
//! partial work.

use thiserror::Error;

/// Caller-input errors reported by all solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The sequence is empty, `n == 0`, or `n` exceeds the sequence length.
    #[error("invalid board count: n = {n} but the sequence holds {len} boards")]
    InvalidLength { n: usize, len: usize },

    /// No painters were supplied.
    #[error("invalid painter count: k = {k}, at least one painter is required")]
    InvalidPainterCount { k: usize },

    /// A board length is zero or negative.
    #[error("invalid board length {value} at index {index}: lengths must be positive")]
    InvalidBoardValue { index: usize, value: i64 },
}

/// Check `(boards, n, k)` in the order length, painters, board values.
///
/// The whole supplied sequence is checked, including boards past `n`.
pub fn validate(boards: &[i64], n: usize, k: usize) -> Result<(), PartitionError> {
    check(boards, n, k).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::debug!(n, k, len = boards.len(), %err, "rejected partition input");
        err
    })
}

fn check(boards: &[i64], n: usize, k: usize) -> Result<(), PartitionError> {
    if boards.is_empty() || n == 0 || n > boards.len() {
        return Err(PartitionError::InvalidLength {
            n,
            len: boards.len(),
        });
    }
    if k == 0 {
        return Err(PartitionError::InvalidPainterCount { k });
    }
    if let Some((index, &value)) = boards.iter().enumerate().find(|(_, b)| **b <= 0) {
        return Err(PartitionError::InvalidBoardValue { index, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        assert_eq!(validate(&[1, 2, 3], 3, 2), Ok(()));
        assert_eq!(validate(&[1, 2, 3], 1, 9), Ok(()));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            validate(&[], 0, 1),
            Err(PartitionError::InvalidLength { n: 0, len: 0 })
        );
        assert_eq!(
            validate(&[4, 5], 0, 1),
            Err(PartitionError::InvalidLength { n: 0, len: 2 })
        );
        assert_eq!(
            validate(&[4, 5], 3, 1),
            Err(PartitionError::InvalidLength { n: 3, len: 2 })
        );
    }

    #[test]
    fn rejects_zero_painters() {
        assert_eq!(
            validate(&[4, 5], 2, 0),
            Err(PartitionError::InvalidPainterCount { k: 0 })
        );
    }

    #[test]
    fn rejects_first_non_positive_board_even_past_n() {
        assert_eq!(
            validate(&[4, 5, 0, -2], 2, 1),
            Err(PartitionError::InvalidBoardValue { index: 2, value: 0 })
        );
    }

    #[test]
    fn length_is_reported_before_painters_and_values() {
        assert!(matches!(
            validate(&[-1], 2, 0),
            Err(PartitionError::InvalidLength { .. })
        ));
        assert!(matches!(
            validate(&[-1], 1, 0),
            Err(PartitionError::InvalidPainterCount { .. })
        ));
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = PartitionError::InvalidBoardValue {
            index: 3,
            value: -7,
        };
        assert_eq!(
            err.to_string(),
            "invalid board length -7 at index 3: lengths must be positive"
        );
    }
}
