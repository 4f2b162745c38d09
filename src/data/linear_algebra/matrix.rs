//! # Upper triangular matrices
//!
//! A square matrix of which only the upper triangle, diagonal included, is stored. Row `i` is a
//! `Sequence` starting at column `i`, so accessing a value below the diagonal is an error rather
//! than a read of an implicit zero.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::{Itertools, zip_eq};
use log::{debug, trace};
use num_traits::PrimInt;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::Requested;
use crate::data::linear_algebra::vector::Sequence;

/// Square matrix storing the upper triangle row by row. Dimensions are fixed at creation.
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularGrid<F> {
    size: usize,
    rows: Vec<Sequence<F>>,
}

impl<F: Element> TriangularGrid<F> {
    /// Create a square matrix filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at most `MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A zero matrix, or an `InvalidSize` error.
    ///
    /// Only integer sizes are accepted:
    ///
    /// ```compile_fail
    /// use uptri::data::linear_algebra::TriangularGrid;
    ///
    /// let m = TriangularGrid::<i32>::new(-0.9);
    /// ```
    pub fn new<I: PrimInt>(size: I) -> Result<Self, LinearAlgebraError> {
        let requested = Requested::new(size);
        let size = match requested.value {
            Some(size) if size <= MAX_MATRIX_SIZE => size,
            _ => {
                debug!("Rejected matrix size {}", requested.reported);
                return Err(LinearAlgebraError::InvalidSize {
                    requested: requested.reported,
                    max: MAX_MATRIX_SIZE,
                });
            },
        };
        trace!("Creating triangular matrix of size {}", size);

        let rows = (0..size)
            .map(|i| Sequence::new(size, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, rows })
    }

    /// Add another matrix of the same size.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_rows_with(other, Sequence::checked_add)
    }

    /// Subtract another matrix of the same size.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError>
    where
        F: Sub<Output = F>,
    {
        self.zip_rows_with(other, Sequence::checked_sub)
    }

    fn zip_rows_with(
        &self,
        other: &Self,
        operation: impl Fn(&Sequence<F>, &Sequence<F>) -> Result<Sequence<F>, LinearAlgebraError>,
    ) -> Result<Self, LinearAlgebraError> {
        if self.size != other.size {
            debug!("Rejected operands of sizes {} and {}", self.size, other.size);
            return Err(LinearAlgebraError::SizeMismatch {
                left: 0..self.size,
                right: 0..other.size,
            });
        }

        // Rows with the same index have the same range in matrices of the same size
        let rows = zip_eq(&self.rows, &other.rows)
            .map(|(left, right)| operation(left, right))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size: self.size, rows })
    }

    /// Multiply with a column vector from the right.
    ///
    /// # Arguments
    ///
    /// * `vector`: Column vector of size `self.size()`, accessible from position `0`.
    ///
    /// # Return value
    ///
    /// A vector `y` with `y[i]` the sum of `self[i][j] * vector[j]` over `j >= i`, or a
    /// `SizeMismatch` error.
    pub fn mul_vector(&self, vector: &Sequence<F>) -> Result<Sequence<F>, LinearAlgebraError>
    where
        F: Mul<Output = F>,
    {
        if vector.size() != self.size || vector.start_index() != 0 {
            debug!(
                "Rejected vector {}..{} for matrix of size {}",
                vector.start_index(), vector.size(), self.size,
            );
            return Err(LinearAlgebraError::SizeMismatch {
                left: 0..self.size,
                right: vector.start_index()..vector.size(),
            });
        }

        let values = self.rows.iter()
            .map(|row| {
                zip_eq(row.iter(), &vector.as_slice()[row.start_index()..])
                    .fold(F::zero(), |total, (left, right)| total + left.clone() * right.clone())
            })
            .collect();

        Sequence::from_values(0, values)
    }
}

impl<F> TriangularGrid<F> {
    /// Get a row.
    ///
    /// # Return value
    ///
    /// Row `i`, which can be indexed at columns `i..size`, or an `IndexOutOfRange` error.
    pub fn row<I: PrimInt>(&self, i: I) -> Result<&Sequence<F>, LinearAlgebraError> {
        let i = self.row_index(Requested::new(i))?;
        Ok(&self.rows[i])
    }

    /// Get a row mutably.
    pub fn row_mut<I: PrimInt>(
        &mut self,
        i: I,
    ) -> Result<&mut Sequence<F>, LinearAlgebraError> {
        let i = self.row_index(Requested::new(i))?;
        Ok(&mut self.rows[i])
    }

    /// Get the value at coordinate (`i`, `j`), which should satisfy `i <= j < size`.
    pub fn get<I: PrimInt, J: PrimInt>(
        &self,
        i: I,
        j: J,
    ) -> Result<&F, LinearAlgebraError> {
        self.row(i)?.get(j)
    }

    /// Get the value at coordinate (`i`, `j`) mutably.
    pub fn get_mut<I: PrimInt, J: PrimInt>(
        &mut self,
        i: I,
        j: J,
    ) -> Result<&mut F, LinearAlgebraError> {
        self.row_mut(i)?.get_mut(j)
    }

    fn row_index(&self, i: Requested) -> Result<usize, LinearAlgebraError> {
        match i.value {
            Some(value) if value < self.size => Ok(value),
            _ => {
                debug!("Rejected row {} of matrix of size {}", i.reported, self.size);
                Err(LinearAlgebraError::IndexOutOfRange {
                    requested: i.reported,
                    start_index: 0,
                    size: self.size,
                })
            },
        }
    }

    /// Number of rows, which equals the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> Iter<'_, Sequence<F>> {
        self.rows.iter()
    }
}

impl<F: Clone> Clone for TriangularGrid<F> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        // Reuses the allocations of the rows that both matrices have
        self.rows.clone_from(&source.rows);
    }
}

impl<F> Index<usize> for TriangularGrid<F> {
    type Output = Sequence<F>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.row(index) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<usize> for TriangularGrid<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.row_mut(index) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: Element + Display> Display for TriangularGrid<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rows.iter().format("\n"))
    }
}
