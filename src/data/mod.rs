//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures and the limits on their sizes.

pub mod linear_algebra;
