//! # Errors raised by vectors and matrices
//!
//! Every failure in this module is fatal for the operation that raised it: construction does not
//! complete, and binary operations leave both operands untouched. Callers only receive the kind of
//! failure and a short message describing it.
use std::result;

use thiserror::Error as ThisError;

/// Convenience alias for results of fallible vector and matrix operations.
pub type Result<T> = result::Result<T, Error>;

/// Classification of the failures that vectors and matrices can report.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A negative size, start index or order was requested.
    InvalidArgument,
    /// A size, start index or order exceeds the configured maximum.
    TooLarge,
    /// A logical index at or beyond the end of the valid range.
    OutOfRange,
    /// A logical index before the start index.
    BelowStartIndex,
    /// The operands of a binary operation differ in shape.
    SizeMismatch,
}

/// A failed vector or matrix operation.
///
/// The message is the only structured information attached; it is what `Display` shows.
#[derive(ThisError, Debug, Clone, Copy, Eq, PartialEq)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
}

impl Error {
    /// Create an error of a given kind.
    ///
    /// # Arguments
    ///
    /// * `kind`: Classification of the failure.
    /// * `message`: Short description, shown to the end user.
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    pub(crate) const fn negative_size() -> Self {
        Self::new(ErrorKind::InvalidArgument, "negative size")
    }

    pub(crate) const fn negative_start_index() -> Self {
        Self::new(ErrorKind::InvalidArgument, "negative SI")
    }

    pub(crate) const fn too_large() -> Self {
        Self::new(ErrorKind::TooLarge, "too large size")
    }

    pub(crate) const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange, "out of range")
    }

    pub(crate) const fn below_start_index() -> Self {
        Self::new(ErrorKind::BelowStartIndex, "pos can not be less than SI")
    }

    /// Shape mismatch in element-wise addition or subtraction.
    pub(crate) const fn non_equal() -> Self {
        Self::new(ErrorKind::SizeMismatch, "non equal")
    }

    /// Shape mismatch in an inner product.
    pub(crate) const fn not_equal() -> Self {
        Self::new(ErrorKind::SizeMismatch, "not equal")
    }

    /// What went wrong.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Description of the failure.
    pub const fn message(&self) -> &'static str {
        self.message
    }
}
