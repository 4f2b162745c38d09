//! # Linear algebra primitives
//!
//! A vector with a logical start index and a square matrix that only stores its upper triangle,
//! diagonal included.
pub use error::LinearAlgebraError;
pub use matrix::TriangularGrid;
pub use vector::Sequence;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

mod utilities;

/// Largest `size` that a `Sequence` can be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest dimension that a `TriangularGrid` can be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
