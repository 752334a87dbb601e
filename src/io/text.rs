//! # Plain text format
//!
//! Values are separated by whitespace and appear in logical order. A vector is written as its
//! values, each followed by a space. A matrix is written one row per line, starting with the
//! diagonal value of that row; nothing below the diagonal is written, and there is no header.
//!
//! Reading never changes the shape of a container: exactly as many values are read as it holds.
use std::collections::VecDeque;
use std::fmt::Display;
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;

use num_traits::Zero;

use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::vector::Vector;
use crate::io::error::ReadError;

/// Whitespace delimited tokens read from a buffered reader, one line at a time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line_number: u64,
}

impl<R: BufRead> Tokens<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), line_number: 0 }
    }

    /// Next token, or `None` when the input is exhausted.
    ///
    /// # Errors
    ///
    /// When the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front())
    }

    /// Parse the next `count` tokens as values.
    ///
    /// # Errors
    ///
    /// `UnexpectedEnd` when fewer than `count` tokens remain, `Parse` when a token is not a value.
    pub fn take_values<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>, ReadError> {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let Some(token) = self.next_token()? else {
                return Err(ReadError::UnexpectedEnd { expected: count, found: values.len() });
            };
            match token.parse() {
                Ok(value) => values.push(value),
                Err(_) => return Err(ReadError::Parse { token, line_number: self.line_number }),
            }
        }

        Ok(values)
    }
}

/// Fill a vector with values read from the input, in logical order.
///
/// Nothing is written to the vector unless all of its values could be read.
pub fn read_vector<T: FromStr, R: BufRead>(
    vector: &mut Vector<T>,
    tokens: &mut Tokens<R>,
) -> Result<(), ReadError> {
    let values = tokens.take_values(vector.len())?;
    for (slot, value) in vector.iter_mut().zip(values) {
        *slot = value;
    }

    Ok(())
}

/// Fill a matrix with values read from the input, row by row.
///
/// Nothing is written to the matrix unless all of its values could be read.
pub fn read_matrix<T: FromStr, R: BufRead>(
    matrix: &mut TriangularMatrix<T>,
    tokens: &mut Tokens<R>,
) -> Result<(), ReadError> {
    let count = matrix.iter_rows().map(Vector::len).sum();
    let mut values = tokens.take_values(count)?.into_iter();
    for row in matrix.iter_rows_mut() {
        for (slot, value) in row.iter_mut().zip(&mut values) {
            *slot = value;
        }
    }

    Ok(())
}

/// Create a matrix of a given order and fill it from text.
///
/// # Errors
///
/// When the order is not valid, or when the text doesn't hold enough values.
pub fn parse_matrix<T>(order: isize, input: &str) -> Result<TriangularMatrix<T>, ReadError>
where
    T: Zero + Clone + FromStr,
{
    let mut matrix = TriangularMatrix::new(order)?;
    read_matrix(&mut matrix, &mut Tokens::new(input.as_bytes()))?;

    Ok(matrix)
}

/// Write the values of a vector, each followed by a space.
pub fn write_vector<T: Display>(mut writer: impl Write, vector: &Vector<T>) -> io::Result<()> {
    write!(writer, "{vector}")
}

/// Write a matrix, one line per row.
pub fn write_matrix<T: Display>(
    mut writer: impl Write,
    matrix: &TriangularMatrix<T>,
) -> io::Result<()> {
    write!(writer, "{matrix}")
}
