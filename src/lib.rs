//! # Offset vectors and packed upper triangular matrices
//!
//! A `Sequence` is a vector that can only be indexed from a certain start index onwards. Square
//! upper triangular matrices are stored as a `TriangularGrid` of such sequences, row `i` starting
//! at column `i`, such that the (zero) lower triangle is never stored.
#![warn(missing_docs)]

pub mod data;
