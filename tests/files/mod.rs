//! # Matrices stored in text files
use std::path::{Path, PathBuf};

use utmatrix::data::linear_algebra::matrix::TriangularMatrix;
use utmatrix::io::error::ReadError;
use utmatrix::io::import;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

fn read(file_name: &str, order: isize) -> Result<TriangularMatrix<i32>, ReadError> {
    import(&problem_file_directory().join(file_name), order)
}

#[test]
fn import_and_add() {
    let a = read("order_3_a.txt", 3).unwrap();
    let b = read("order_3_b.txt", 3).unwrap();

    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.to_string(), "7 7 7 \n7 7 \n7 \n");
}

#[test]
fn import_smaller_order_ignores_rest() {
    let a = read("order_3_a.txt", 2).unwrap();
    assert_eq!(a.to_string(), "1 2 \n3 \n");
}

#[test]
fn import_too_short() {
    match read("order_3_short.txt", 3) {
        Err(ReadError::UnexpectedEnd { expected, found }) => {
            assert_eq!(expected, 6);
            assert_eq!(found, 4);
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn import_invalid_value() {
    match read("order_3_invalid.txt", 3) {
        Err(ReadError::Parse { token, line_number }) => {
            assert_eq!(token, "x");
            assert_eq!(line_number, 1);
        },
        other => panic!("unexpected result {other:?}"),
    }
}
