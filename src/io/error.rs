//! # Error reporting for reading vectors and matrices
//!
//! Reading can fail because the input can't be read, because a token is not a value of the
//! element type, because the input ends early, or because the requested shape is not valid.
use std::io;

use thiserror::Error;

use crate::data::linear_algebra::error::Error as ShapeError;

/// A `ReadError` is created when input could not be turned into a vector or matrix.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input couldn't be opened or was interrupted.
    #[error("could not read input: {0}")]
    IO(#[from] io::Error),
    /// A token is not a valid value of the element type.
    #[error("could not parse \"{token}\" as a value at line {line_number}")]
    Parse {
        /// The offending token.
        token: String,
        /// Line on which the token was found, counting from one.
        line_number: u64,
    },
    /// The input contains fewer values than the container holds.
    #[error("input ended after {found} of {expected} values")]
    UnexpectedEnd {
        /// Number of values the container holds.
        expected: usize,
        /// Number of values that were present.
        found: usize,
    },
    /// The container to read into could not be created.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
