//! # Upper triangular matrices
//!
//! A matrix of order `n` is stored as a vector of `n` rows, where row `i` is itself a vector of
//! length `n - i` that starts at index `i`. Each row therefore holds exactly the columns on and to
//! the right of the diagonal, and nothing is stored for the lower triangle.
//!
//! Comparison, assignment, addition and subtraction are those of the vector of rows. Because the
//! shape of every row is derived from its position, two matrices of the same order always agree in
//! shape row by row, and two matrices of different order never do.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use log::{trace, warn};
use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_ORDER, MAX_MATRIX_SIZE};
use crate::data::linear_algebra::error::{Error, ErrorKind, Result};
use crate::data::linear_algebra::traits::Entry;
use crate::data::linear_algebra::vector::Vector;

/// Square matrix of which only the diagonal and the values above it are stored.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct TriangularMatrix<T> {
    rows: Vector<Vector<T>>,
}

/// Whether a vector of rows has the shape of an upper triangular matrix.
fn is_triangular<T>(rows: &Vector<Vector<T>>) -> bool {
    let order = rows.len();

    rows.start_index() == 0
        && rows.iter().enumerate().all(|(i, row)| row.start_index() == i && row.len() == order - i)
}

impl<T> TriangularMatrix<T> {
    /// Create a zero matrix.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows (and columns).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the order is negative, `TooLarge` if it exceeds `MAX_MATRIX_SIZE`.
    pub fn new(order: isize) -> Result<Self>
    where
        T: Zero + Clone,
    {
        let order = usize::try_from(order).map_err(|_| Error::negative_size())?;
        if order > MAX_MATRIX_SIZE {
            return Err(Error::too_large());
        }

        Ok(Self::zeros(order))
    }

    /// Row `i` has length `order - i` and starts at column `i`.
    fn zeros(order: usize) -> Self
    where
        T: Zero + Clone,
    {
        trace!("creating triangular matrix of order {order}");

        let rows = (0..order)
            .map(|i| Vector::from_parts(vec![T::zero(); order - i], i))
            .collect();

        Self { rows: Vector::from_parts(rows, 0) }
    }

    /// Reinterpret a vector of rows as a matrix, without checking its shape.
    ///
    /// The caller is responsible for row `i` having length `order - i` and start index `i`, and for
    /// the outer vector starting at zero. Operations on a matrix built from a differently shaped
    /// value still never read out of bounds, but their results are not those of a triangular
    /// matrix. Use `TryFrom` for a checked conversion.
    pub fn from_rows_unchecked(rows: Vector<Vector<T>>) -> Self {
        if cfg!(debug_assertions) && !is_triangular(&rows) {
            warn!("vector of {} rows is not upper triangular", rows.len());
        }

        Self { rows }
    }

    /// Number of rows and columns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Whether this matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The underlying vector of rows.
    pub fn rows(&self) -> &Vector<Vector<T>> {
        &self.rows
    }

    /// Take the vector of rows out of the matrix.
    pub fn into_rows(self) -> Vector<Vector<T>> {
        self.rows
    }

    /// Iterate over the rows, top to bottom.
    pub fn iter_rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Row `i`, which is indexed by column.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `i` is at least the order, `BelowStartIndex` if it is negative.
    pub fn row(&self, i: isize) -> Result<&Vector<T>> {
        self.rows.get(i)
    }

    /// Value at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `BelowStartIndex` if `j < i`, as those values are below the diagonal and not stored.
    /// Otherwise, see `Vector::get`.
    pub fn get(&self, i: isize, j: isize) -> Result<&T> {
        self.rows.get(i)?.get(j)
    }

    /// Mutable value at row `i` and column `j`, see `get`.
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut T> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Overwrite the value at row `i` and column `j`, see `get`.
    pub fn set(&mut self, i: isize, j: isize, value: T) -> Result<()> {
        self.rows.get_mut(i)?.set(j, value)
    }

    /// Mutable rows, for filling a matrix one row at a time.
    pub(crate) fn iter_rows_mut(&mut self) -> IterMut<'_, Vector<T>> {
        self.rows.iter_mut()
    }

    /// Replace the contents of this matrix with those of `source`.
    ///
    /// Rows are only reallocated when the orders differ, see `Vector::assign`.
    pub fn assign(&mut self, source: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.rows.assign(&source.rows);

        self
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self>
    where
        T: Entry,
    {
        Ok(Self { rows: self.rows.try_add(&rhs.rows)? })
    }

    /// Element-wise difference, see `try_add`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self>
    where
        T: Entry,
    {
        Ok(Self { rows: self.rows.try_sub(&rhs.rows)? })
    }

    /// Add a scalar to every stored value.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        T: Clone + Add<Output = T>,
    {
        Self { rows: self.rows.map(|row| row.add_scalar(value)) }
    }

    /// Subtract a scalar from every stored value.
    pub fn sub_scalar(&self, value: &T) -> Self
    where
        T: Clone + Sub<Output = T>,
    {
        Self { rows: self.rows.map(|row| row.sub_scalar(value)) }
    }

    /// Multiply every stored value by a scalar.
    pub fn mul_scalar(&self, value: &T) -> Self
    where
        T: Clone + Mul<Output = T>,
    {
        Self { rows: self.rows.map(|row| row.mul_scalar(value)) }
    }
}

impl<T> TryFrom<Vector<Vector<T>>> for TriangularMatrix<T> {
    type Error = Error;

    /// Checked alternative to `from_rows_unchecked`.
    fn try_from(rows: Vector<Vector<T>>) -> Result<Self> {
        if rows.len() > MAX_MATRIX_SIZE {
            return Err(Error::too_large());
        }
        if !is_triangular(&rows) {
            return Err(Error::new(ErrorKind::SizeMismatch, "not upper triangular"));
        }

        Ok(Self { rows })
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Zero + Clone> Default for TriangularMatrix<T> {
    /// A zero matrix of order `DEFAULT_ORDER`.
    fn default() -> Self {
        Self::zeros(DEFAULT_ORDER)
    }
}

impl<T> Index<(isize, isize)> for TriangularMatrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `(i, j)` is not stored, see `TriangularMatrix::get`.
    fn index(&self, (i, j): (isize, isize)) -> &Self::Output {
        match self.get(i, j) {
            Ok(value) => value,
            Err(error) => panic!("index ({i}, {j}): {error}"),
        }
    }
}

impl<T> IndexMut<(isize, isize)> for TriangularMatrix<T> {
    fn index_mut(&mut self, (i, j): (isize, isize)) -> &mut Self::Output {
        match self.get_mut(i, j) {
            Ok(value) => value,
            Err(error) => panic!("index ({i}, {j}): {error}"),
        }
    }
}

impl<T: Display> Display for TriangularMatrix<T> {
    /// One line per row, values separated by spaces.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }

        Ok(())
    }
}
