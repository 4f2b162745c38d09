//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures that hold values, as well as the errors that can
//! occur when they are created, indexed or combined.

pub mod linear_algebra;
