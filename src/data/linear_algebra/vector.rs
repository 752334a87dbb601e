//! # Vectors with a start index
//!
//! A `Vector` is a fixed-shape, dense sequence of values that is addressed by a logical index. The
//! first value lives at the start index rather than at zero, such that the valid indices are
//! `start_index..start_index + len`. The shape, that is the pair of length and start index, is part
//! of the identity of a vector: equality and all binary operations require it to match.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_SIZE, DEFAULT_START_INDEX, MAX_VECTOR_SIZE};
use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::traits::Entry;

/// Dense, bounds-checked vector addressed from a configurable start index.
///
/// Storage is exclusively owned; clones are deep and never share values with their source.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Vector<T> {
    data: Vec<T>,
    start_index: usize,
}

/// Validate a requested shape and convert it to unsigned values.
fn checked_shape(size: isize, start_index: isize) -> Result<(usize, usize)> {
    let size = usize::try_from(size).map_err(|_| Error::negative_size())?;
    let start_index = usize::try_from(start_index).map_err(|_| Error::negative_start_index())?;
    if size > MAX_VECTOR_SIZE || start_index > MAX_VECTOR_SIZE {
        return Err(Error::too_large());
    }

    Ok((size, start_index))
}

impl<T> Vector<T> {
    /// Create a zero-filled vector.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of values.
    /// * `start_index`: Logical index of the first value.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either argument is negative, `TooLarge` if either exceeds
    /// `MAX_VECTOR_SIZE`.
    pub fn new(size: isize, start_index: isize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        let (size, start_index) = checked_shape(size, start_index)?;
        trace!("creating vector of size {size} starting at {start_index}");

        Ok(Self { data: vec![T::zero(); size], start_index })
    }

    /// Create a zero-filled vector that starts at index zero.
    pub fn with_size(size: isize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        Self::new(size, 0)
    }

    /// Wrap existing values.
    ///
    /// # Arguments
    ///
    /// * `values`: Values in logical order; the first one is found at `start_index`.
    /// * `start_index`: Logical index of the first value.
    ///
    /// # Errors
    ///
    /// Same as `new`, with the size being the number of values provided.
    pub fn from_values(values: Vec<T>, start_index: isize) -> Result<Self> {
        let size = isize::try_from(values.len()).map_err(|_| Error::too_large())?;
        let (_, start_index) = checked_shape(size, start_index)?;

        Ok(Self { data: values, start_index })
    }

    /// Build without validation, for callers that derived the shape from an existing vector.
    pub(crate) fn from_parts(data: Vec<T>, start_index: usize) -> Self {
        debug_assert!(data.len() <= MAX_VECTOR_SIZE);
        debug_assert!(start_index <= MAX_VECTOR_SIZE);

        Self { data, start_index }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first value.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last valid logical index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    /// Whether `index` addresses a value of this vector.
    pub fn contains_index(&self, index: isize) -> bool {
        self.offset(index).is_ok()
    }

    /// Whether two vectors have the same length and start index.
    pub fn same_shape<U>(&self, other: &Vector<U>) -> bool {
        self.len() == other.len() && self.start_index == other.start_index
    }

    /// Position in the underlying storage of a logical index.
    ///
    /// The upper bound is checked first, like for any sequence; the lower bound is specific to
    /// vectors that don't start at zero.
    fn offset(&self, index: isize) -> Result<usize> {
        // Both bounds are at most `2 * MAX_VECTOR_SIZE`, which fits.
        let start = self.start_index as isize;
        let end = self.end_index() as isize;

        if index >= end {
            Err(Error::out_of_range())
        } else if index < start {
            Err(Error::below_start_index())
        } else {
            Ok((index - start) as usize)
        }
    }

    /// Value at a logical index.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is at or beyond `end_index`, `BelowStartIndex` if it is before
    /// `start_index`.
    pub fn get(&self, index: isize) -> Result<&T> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Mutable value at a logical index, see `get`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Overwrite the value at a logical index, see `get`.
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Values in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable values in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Values paired with their logical index.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        (self.start_index..).zip(self.data.iter())
    }

    /// Values as a slice; position zero holds the value at `start_index`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Take the values out of the vector.
    pub fn into_values(self) -> Vec<T> {
        self.data
    }

    /// Replace the contents of this vector with those of `source`.
    ///
    /// The storage is only reallocated when the lengths differ; otherwise, the values are
    /// overwritten in place, which for nested vectors recursively reuses their storage as well.
    /// The start index is always taken over from `source`.
    ///
    /// # Return value
    ///
    /// This vector, so that assignments can be chained.
    pub fn assign(&mut self, source: &Self) -> &mut Self
    where
        T: Clone,
    {
        if self.data.len() != source.data.len() {
            debug!(
                "reallocating vector storage from {} to {} values",
                self.data.len(), source.data.len(),
            );
            self.data = source.data.clone();
        } else {
            self.data.clone_from_slice(&source.data);
        }
        self.start_index = source.start_index;

        self
    }

    fn check_same_shape(&self, rhs: &Self, error: Error) -> Result<()> {
        if self.same_shape(rhs) {
            Ok(())
        } else {
            debug!(
                "rejecting operation between vectors of shape ({}, {}) and ({}, {})",
                self.len(), self.start_index, rhs.len(), rhs.start_index,
            );
            Err(error)
        }
    }

    /// Combine two vectors of equal shape value by value.
    fn zip_with<F>(&self, rhs: &Self, mut operation: F) -> Result<Self>
    where
        F: FnMut(&T, &T) -> Result<T>,
    {
        self.check_same_shape(rhs, Error::non_equal())?;

        let data = self.data.iter()
            .zip_eq(&rhs.data)
            .map(|(left, right)| operation(left, right))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { data, start_index: self.start_index })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` unless both length and start index are equal. For vectors of vectors, also
    /// when any pair of inner vectors differs in shape.
    pub fn try_add(&self, rhs: &Self) -> Result<Self>
    where
        T: Entry,
    {
        self.zip_with(rhs, T::try_add)
    }

    /// Element-wise difference, see `try_add`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self>
    where
        T: Entry,
    {
        self.zip_with(rhs, T::try_sub)
    }

    /// Inner product: the sum of all pairwise products, starting from zero.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` unless both length and start index are equal.
    pub fn dot(&self, rhs: &Self) -> Result<T>
    where
        T: Zero + Clone + Mul<Output = T>,
    {
        self.check_same_shape(rhs, Error::not_equal())?;

        let mut total = T::zero();
        for (left, right) in self.data.iter().zip_eq(&rhs.data) {
            total = total + left.clone() * right.clone();
        }

        Ok(total)
    }

    /// Apply a function to every value, keeping the shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, operation: F) -> Vector<U> {
        Vector { data: self.data.iter().map(operation).collect(), start_index: self.start_index }
    }

    /// Add a scalar to every value.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        T: Clone + Add<Output = T>,
    {
        self.map(|v| v.clone() + value.clone())
    }

    /// Subtract a scalar from every value.
    pub fn sub_scalar(&self, value: &T) -> Self
    where
        T: Clone + Sub<Output = T>,
    {
        self.map(|v| v.clone() - value.clone())
    }

    /// Multiply every value by a scalar.
    pub fn mul_scalar(&self, value: &T) -> Self
    where
        T: Clone + Mul<Output = T>,
    {
        self.map(|v| v.clone() * value.clone())
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Zero + Clone> Default for Vector<T> {
    /// A zero vector of `DEFAULT_SIZE` values starting at `DEFAULT_START_INDEX`.
    fn default() -> Self {
        Self { data: vec![T::zero(); DEFAULT_SIZE], start_index: DEFAULT_START_INDEX }
    }
}

impl<T: Entry> Entry for Vector<T> {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, T::try_add)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, T::try_sub)
    }
}

impl<T> Index<isize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `index` is not a valid logical index, see `Vector::get`.
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("index {index}: {error}"),
        }
    }
}

impl<T> IndexMut<isize> for Vector<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("index {index}: {error}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Add<Output = T>> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(&rhs)
    }
}

impl<T: Clone + Add<Output = T>> Add<T> for Vector<T> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        for value in &mut self.data {
            *value = value.clone() + rhs.clone();
        }
        self
    }
}

impl<T: Clone + Sub<Output = T>> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(&rhs)
    }
}

impl<T: Clone + Sub<Output = T>> Sub<T> for Vector<T> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self::Output {
        for value in &mut self.data {
            *value = value.clone() - rhs.clone();
        }
        self
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        for value in &mut self.data {
            *value = value.clone() * rhs.clone();
        }
        self
    }
}

impl<T: Display> Display for Vector<T> {
    /// Every value followed by a single space, without a line break.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for value in &self.data {
            write!(f, "{value} ")?;
        }

        Ok(())
    }
}

/// Shorthand for creating a vector from literal values, optionally with a start index.
///
/// `V!(1, 2, 3)` starts at zero, `V!(@2; 1, 2, 3)` starts at index two.
///
/// # Panics
///
/// When the shape is not valid for a vector.
#[macro_export]
macro_rules! V {
    (@$start:expr; $($value:expr),* $(,)?) => {
        $crate::data::linear_algebra::vector::Vector::from_values(vec![$($value),*], $start)
            .unwrap()
    };
    ($($value:expr),* $(,)?) => {
        $crate::V!(@0; $($value),*)
    };
}
