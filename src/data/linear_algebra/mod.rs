//! # Linear algebra primitives
//!
//! Vectors addressed from an arbitrary start index, and upper triangular matrices that store each
//! row as such a vector.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Upper bound on both the length and the start index of a vector.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Upper bound on the order of a matrix; storage grows quadratically with the order.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Length of a default vector.
pub const DEFAULT_SIZE: usize = 10;
/// Start index of a default vector.
pub const DEFAULT_START_INDEX: usize = 0;
/// Order of a default matrix.
pub const DEFAULT_ORDER: usize = 10;
