//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const TEXT_LITERAL_STRING`
//! * `fn rows_form()`
//! * `fn matrix_form()`
