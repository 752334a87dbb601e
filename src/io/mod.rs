//! # Reading and writing of vectors and matrices
//!
//! This module provides read and write functionality for the plain text format described in
//! `text`.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use num_traits::Zero;

use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::io::error::ReadError;
use crate::io::text::{read_matrix, Tokens};

pub mod error;
pub mod text;

/// Import an upper triangular matrix from a file.
///
/// The file holds the stored values of the matrix row by row, see `text`.
///
/// # Arguments
///
/// * `file_path`: File to read.
/// * `order`: Order of the matrix described by the file.
///
/// # Errors
///
/// When the order is not valid, the file cannot be found or read, or its contents are not the
/// values of a matrix of this order.
pub fn import<T>(file_path: &Path, order: isize) -> Result<TriangularMatrix<T>, ReadError>
where
    T: Zero + Clone + FromStr,
{
    let mut matrix = TriangularMatrix::new(order)?;

    debug!("reading matrix of order {order} from {}", file_path.display());
    let file = File::open(file_path)?;
    read_matrix(&mut matrix, &mut Tokens::new(BufReader::new(file)))?;

    Ok(matrix)
}
