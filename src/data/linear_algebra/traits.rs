//! # Traits for elements of vectors
//!
//! A vector can hold plain numbers, but it can also hold other vectors, as a triangular matrix
//! does with its rows. Adding two numbers never fails, while adding two rows fails when the rows
//! differ in shape. The `Entry` trait captures both, such that element-wise arithmetic on a
//! vector can be written once and reused at every nesting level.
use std::fmt::Debug;

use num_traits::Num;

use crate::data::linear_algebra::error::Result;

/// Element of a `Vector` that supports element-wise addition and subtraction.
///
/// Implemented for every numeric type, for which these operations always succeed, and for
/// `Vector` itself, for which they succeed only when the shapes of both operands agree.
pub trait Entry: Clone + PartialEq + Debug {
    /// Sum of this element and another one.
    fn try_add(&self, rhs: &Self) -> Result<Self>;
    /// Difference of this element and another one.
    fn try_sub(&self, rhs: &Self) -> Result<Self>;
}

impl<T: Num + Clone + Debug> Entry for T {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self.clone() + rhs.clone())
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self.clone() - rhs.clone())
    }
}
