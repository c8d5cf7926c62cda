//! Error type shared by every structure and algorithm in the codebook.
//!
//! All failures are local precondition violations detected before any state is
//! mutated: a rejected call leaves the receiver exactly as it was.

/// Errors produced by codebook operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodebookError {
    /// A construction parameter or input value was rejected.
    InvalidArgument {
        /// Human-readable description of the violated precondition.
        reason: &'static str,
    },
    /// An index was outside the valid range `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of valid positions.
        len: usize,
    },
}

impl CodebookError {
    /// Shorthand for [`CodebookError::InvalidArgument`].
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    /// Returns `Ok(())` when `index < len`, otherwise [`CodebookError::IndexOutOfRange`].
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

impl std::fmt::Display for CodebookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for CodebookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_argument() {
        let err = CodebookError::invalid("array must not be empty");
        assert_eq!(err.to_string(), "invalid argument: array must not be empty");
    }

    #[test]
    fn display_index_out_of_range() {
        let err = CodebookError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 out of range for length 4");
    }

    #[test]
    fn check_index_bounds() {
        assert!(CodebookError::check_index(0, 1).is_ok());
        assert_eq!(
            CodebookError::check_index(1, 1),
            Err(CodebookError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(CodebookError::check_index(0, 0).is_err());
    }
}
