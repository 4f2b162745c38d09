//! # Vector with a start index
//!
//! A `Sequence` represents the positions `0..size`, but only the positions from `start_index`
//! onwards can be accessed. Only those are stored, such that rows of an upper triangular matrix
//! can be represented without storing the zeros below the diagonal.
use std::fmt;
use std::fmt::Display;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use itertools::{Itertools, repeat_n, zip_eq};
use log::{debug, trace};
use num_traits::PrimInt;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::Requested;

/// Vector of fixed size that can only be indexed at `start_index..size`.
///
/// Uses a `Vec` of length `size - start_index` as underlying data structure.
#[derive(Debug, Eq, PartialEq)]
pub struct Sequence<F> {
    // Field order matters for the derived `PartialEq`: the dimensions are compared before the
    // values.
    size: usize,
    start_index: usize,
    data: Vec<F>,
}

impl<F: Element> Sequence<F> {
    /// Create a sequence filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: One past the last accessible position, at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: First accessible position. Has to be below `size`, unless `size` is zero in
    /// which case it has to be zero as well.
    ///
    /// # Return value
    ///
    /// A zero sequence, or an `InvalidSize` or `InvalidStartIndex` error.
    pub fn new<I: PrimInt, J: PrimInt>(
        size: I,
        start_index: J,
    ) -> Result<Self, LinearAlgebraError> {
        let (size, start_index) = validate(Requested::new(size), Requested::new(start_index))?;
        trace!("Creating sequence of size {} starting at {}", size, start_index);

        Ok(Self {
            size,
            start_index,
            data: vec![F::zero(); size - start_index],
        })
    }

    /// Create a sequence filled with zeros that can be indexed from position `0`.
    ///
    /// Sizes are integers; fractional sizes are not accepted:
    ///
    /// ```compile_fail
    /// use uptri::data::linear_algebra::Sequence;
    ///
    /// let v = Sequence::<i32>::zeros(2.5);
    /// ```
    pub fn zeros<I: PrimInt>(size: I) -> Result<Self, LinearAlgebraError> {
        Self::new(size, 0)
    }

    /// Create a sequence from the values at its accessible positions.
    ///
    /// # Arguments
    ///
    /// * `start_index`: Position of the first value.
    /// * `values`: Values at positions `start_index..start_index + values.len()`.
    ///
    /// # Return value
    ///
    /// A sequence of size `start_index + values.len()`, or an error if that size or the start index
    /// is not valid.
    pub fn from_values<J: PrimInt>(
        start_index: J,
        values: Vec<F>,
    ) -> Result<Self, LinearAlgebraError> {
        let requested_start = Requested::new(start_index);
        let size = match requested_start.value {
            Some(start_index) => start_index.saturating_add(values.len()),
            None => {
                debug!("Rejected start index {}", requested_start.reported);
                return Err(LinearAlgebraError::InvalidStartIndex {
                    requested: requested_start.reported,
                    size: values.len(),
                });
            },
        };
        let (size, start_index) = validate(Requested::new(size), requested_start)?;
        debug_assert_eq!(size - start_index, values.len());

        Ok(Self { size, start_index, data: values })
    }

    /// Compute the inner product with another sequence.
    ///
    /// # Return value
    ///
    /// The sum of the products at all accessible positions, or a `SizeMismatch` error if the
    /// accessible positions of the two sequences differ.
    pub fn dot(&self, other: &Self) -> Result<F, LinearAlgebraError>
    where
        F: Mul<Output = F>,
    {
        self.check_same_range(other)?;

        Ok(zip_eq(&self.data, &other.data)
            .fold(F::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }

    /// Add another sequence element wise.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_with(other, |left, right| left.clone() + right.clone())
    }

    /// Subtract another sequence element wise.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError>
    where
        F: Sub<Output = F>,
    {
        self.zip_with(other, |left, right| left.clone() - right.clone())
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: impl Fn(&F, &F) -> F,
    ) -> Result<Self, LinearAlgebraError> {
        self.check_same_range(other)?;

        Ok(Self {
            size: self.size,
            start_index: self.start_index,
            data: zip_eq(&self.data, &other.data)
                .map(|(left, right)| operation(left, right))
                .collect(),
        })
    }
}

impl<F> Sequence<F> {
    /// Get the value at a position.
    ///
    /// # Return value
    ///
    /// A reference to the value, or an `IndexOutOfRange` error if the position is not in
    /// `start_index..size`.
    pub fn get<I: PrimInt>(&self, index: I) -> Result<&F, LinearAlgebraError> {
        let data_index = self.data_index(Requested::new(index))?;
        Ok(&self.data[data_index])
    }

    /// Get the value at a position mutably.
    pub fn get_mut<I: PrimInt>(&mut self, index: I) -> Result<&mut F, LinearAlgebraError> {
        let data_index = self.data_index(Requested::new(index))?;
        Ok(&mut self.data[data_index])
    }

    fn data_index(&self, index: Requested) -> Result<usize, LinearAlgebraError> {
        match index.value {
            Some(index) if self.start_index <= index && index < self.size => {
                Ok(index - self.start_index)
            },
            _ => {
                debug!(
                    "Rejected index {} outside of {}..{}",
                    index.reported, self.start_index, self.size,
                );
                Err(LinearAlgebraError::IndexOutOfRange {
                    requested: index.reported,
                    start_index: self.start_index,
                    size: self.size,
                })
            },
        }
    }

    fn check_same_range(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.size == other.size && self.start_index == other.start_index {
            Ok(())
        } else {
            debug!("Rejected operands {:?} and {:?}", self.range(), other.range());
            Err(LinearAlgebraError::SizeMismatch { left: self.range(), right: other.range() })
        }
    }

    /// One past the last accessible position.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First accessible position.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of values stored, that is, the number of accessible positions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no position is accessible.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn range(&self) -> std::ops::Range<usize> {
        self.start_index..self.size
    }

    /// Iterate over the values at the accessible positions, in order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values at the accessible positions, in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// Iterate over (position, value) tuples.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &F)> {
        (self.start_index..self.size).zip(self.data.iter())
    }

    /// Values at the accessible positions; the value at `start_index` is at index `0`.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }
}

/// Validate the dimensions of a sequence that is about to be created.
fn validate(size: Requested, start_index: Requested) -> Result<(usize, usize), LinearAlgebraError> {
    let size = match size.value {
        Some(value) if value <= MAX_VECTOR_SIZE => value,
        _ => {
            debug!("Rejected sequence size {}", size.reported);
            return Err(LinearAlgebraError::InvalidSize {
                requested: size.reported,
                max: MAX_VECTOR_SIZE,
            });
        },
    };

    match start_index.value {
        Some(value) if value < size || value == 0 => Ok((size, value)),
        _ => {
            debug!("Rejected start index {} for size {}", start_index.reported, size);
            Err(LinearAlgebraError::InvalidStartIndex { requested: start_index.reported, size })
        },
    }
}

impl<F: Clone> Clone for Sequence<F> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.start_index = source.start_index;
        self.data.clone_from(&source.data);
    }
}

impl<F: Element> TryFrom<Vec<F>> for Sequence<F> {
    type Error = LinearAlgebraError;

    fn try_from(values: Vec<F>) -> Result<Self, Self::Error> {
        Self::from_values(0, values)
    }
}

impl<F> Index<usize> for Sequence<F> {
    type Output = F;

    /// # Panics
    ///
    /// When the position is not in `start_index..size`, see `Sequence::get`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<usize> for Sequence<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

macro_rules! scalar_operation {
    ($operation:ident, $method:ident) => {
        impl<F> $operation<F> for Sequence<F>
        where
            F: Element + $operation<Output = F>,
        {
            type Output = Sequence<F>;

            fn $method(mut self, rhs: F) -> Self::Output {
                for value in &mut self.data {
                    *value = mem::replace(value, F::zero()).$method(rhs.clone());
                }

                self
            }
        }

        impl<F> $operation<F> for &Sequence<F>
        where
            F: Element + $operation<Output = F>,
        {
            type Output = Sequence<F>;

            fn $method(self, rhs: F) -> Self::Output {
                self.clone().$method(rhs)
            }
        }
    };
}

scalar_operation!(Add, add);
scalar_operation!(Sub, sub);
scalar_operation!(Mul, mul);

impl<F: Element + Display> Display for Sequence<F> {
    /// Write all positions, the inaccessible ones as zero.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zero = F::zero();
        let values = repeat_n(&zero, self.start_index).chain(self.data.iter());

        write!(f, "{}", values.format(" "))
    }
}
