//! # Error reporting for the containers
//!
//! Describes what went wrong when a container was created with an unsupported size, indexed
//! outside of the range that it stores, or combined with a container of a different shape.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

/// Created when a request to a container can't be satisfied.
///
/// Requested sizes and positions are reported as signed values, because the caller might have
/// asked for a negative one. Only `u128` requests above `i128::MAX` don't fit; they are reported as
/// `i128::MAX`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// The requested size is negative or larger than the maximum for the container type.
    InvalidSize {
        /// Size that was asked for.
        requested: i128,
        /// Largest size supported.
        max: usize,
    },
    /// The requested start index is negative or not below the size.
    ///
    /// Only an empty sequence may start at its size, which is then zero.
    InvalidStartIndex {
        /// Start index that was asked for.
        requested: i128,
        /// Size of the sequence being created.
        size: usize,
    },
    /// A position outside of `start_index..size` was accessed.
    IndexOutOfRange {
        /// Position that was asked for.
        requested: i128,
        /// First accessible position.
        start_index: usize,
        /// One past the last accessible position.
        size: usize,
    },
    /// Two operands don't have the same accessible ranges.
    SizeMismatch {
        /// Accessible range of the left operand.
        left: Range<usize>,
        /// Accessible range of the right operand.
        right: Range<usize>,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::InvalidSize { requested, max } => {
                write!(f, "Invalid size {}, should be between 0 and {}", requested, max)
            },
            LinearAlgebraError::InvalidStartIndex { requested, size } => {
                write!(f, "Invalid start index {} for size {}", requested, size)
            },
            LinearAlgebraError::IndexOutOfRange { requested, start_index, size } => {
                write!(f, "Index {} out of range {}..{}", requested, start_index, size)
            },
            LinearAlgebraError::SizeMismatch { left, right } => {
                write!(f, "Operands have different ranges {:?} and {:?}", left, right)
            },
        }
    }
}

impl Error for LinearAlgebraError {}
