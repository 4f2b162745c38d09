//! # Traits for elements of the containers
//!
//! Containers are created filled with zeros, so the element type needs to have one. Everything
//! else (addition, multiplication, displaying) is required only by the operations that need it.
use std::fmt::Debug;

use num_traits::Zero;

/// Element of a `Sequence` or `TriangularGrid`.
///
/// This is an alias for the traits that are needed to create, copy and compare the containers.
pub trait Element: Zero + Clone + PartialEq + Debug {}

impl<T: Zero + Clone + PartialEq + Debug> Element for T {}
