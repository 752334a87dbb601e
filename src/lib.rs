//! # Vectors with a start index and upper triangular matrices
//!
//! A `Vector` holds its values at the logical indices `start_index..start_index + len`. An upper
//! triangular `TriangularMatrix` is a vector of such vectors, where each row is one shorter than
//! the previous one and starts one column further to the right.
//!
//! All shape checks happen at runtime and are reported through `data::linear_algebra::error`.
#![warn(missing_docs)]

pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
