//! Helper types for the `linear_algebra` module.
use num_traits::PrimInt;

/// A size or position as passed in by the caller, before it is validated.
///
/// Callers may use any primitive integer type, also signed ones. Values that don't fit in a
/// `usize` (such as negative ones) can't be valid, but are kept around for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Requested {
    /// The value, if it is a valid `usize`.
    pub value: Option<usize>,
    /// The value as it should appear in an error message.
    ///
    /// Exact for every primitive integer except `u128` values above `i128::MAX`, which are
    /// reported as `i128::MAX`.
    pub reported: i128,
}

impl Requested {
    pub fn new<I: PrimInt>(value: I) -> Self {
        Self {
            value: value.to_usize(),
            reported: value.to_i128().unwrap_or(i128::MAX),
        }
    }
}
