//! # Public interface of vectors and matrices
use utmatrix::data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
use utmatrix::data::linear_algebra::error::ErrorKind;
use utmatrix::data::linear_algebra::matrix::TriangularMatrix;
use utmatrix::data::linear_algebra::traits::Entry;
use utmatrix::data::linear_algebra::vector::Vector;
use utmatrix::V;

#[test]
fn vector_shapes() {
    for size in [0, 1, 7] {
        for start_index in [0, 3, MAX_VECTOR_SIZE as isize - size] {
            let v = Vector::<u64>::new(size, start_index).unwrap();
            assert_eq!(v.len(), size as usize);
            assert_eq!(v.start_index(), start_index as usize);
            assert!(v.iter().all(|&x| x == 0));
        }
    }
    for (size, start_index) in [(-1, 0), (0, -1), (MAX_VECTOR_SIZE as isize + 1, 0)] {
        assert!(Vector::<u64>::new(size, start_index).is_err());
    }
}

#[test]
fn vector_indexing_outside_range() {
    let v = Vector::<i8>::new(3, 2).unwrap();
    for index in [-5, -1, 0, 1] {
        assert_eq!(v.get(index).unwrap_err().kind(), ErrorKind::BelowStartIndex);
    }
    for index in [5, 6, 1000] {
        assert_eq!(v.get(index).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
    for index in 2..5 {
        assert_eq!(v.get(index), Ok(&0));
    }
}

#[test]
fn vector_arithmetic() {
    let v1 = V!(@2; 1, 2, 3, 4, 5);
    let v2 = V!(@2; 2, 3, 4, 5, 6);
    let v3 = V!(@2; 1, 1, 1, 1, 1);

    assert_eq!(v1.try_add(&v2).unwrap(), V!(@2; 3, 5, 7, 9, 11));
    assert_eq!(v1.dot(&v2).unwrap(), 70);
    let mut total = v1.clone();
    total.assign(&total.try_add(&v2).and_then(|v| v.try_add(&v3)).unwrap());
    assert_eq!(total, V!(@2; 4, 6, 8, 10, 12));

    assert!(v1.try_add(&V!(1, 2, 3, 4, 5)).is_err());
    assert!(v1.dot(&V!(@2; 1, 2)).is_err());
}

#[test]
fn vectors_are_entries() {
    let rows = Vector::from_values(vec![V!(1.0, 2.0), V!(@1; 3.0)], 0).unwrap();
    let doubled = Entry::try_add(&rows, &rows).unwrap();
    assert_eq!(doubled.as_slice()[0], V!(2.0, 4.0));
}

#[test]
fn matrix_shapes() {
    for order in [0, 1, 2, 10] {
        let m = TriangularMatrix::<i32>::new(order).unwrap();
        assert_eq!(m.order(), order as usize);
        for i in 0..order {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), (order - i) as usize);
            assert_eq!(row.start_index(), i as usize);
        }
    }
    assert_eq!(
        TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE as isize + 1).unwrap_err().kind(),
        ErrorKind::TooLarge,
    );
    assert_eq!(TriangularMatrix::<i32>::new(-1).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn matrix_arithmetic() {
    let mut a = TriangularMatrix::<i32>::new(3).unwrap();
    let mut b = TriangularMatrix::<i32>::new(3).unwrap();
    for i in 0..3 {
        for j in i..3 {
            a[(i, j)] = 1;
            b[(i, j)] = (j - i) as i32;
        }
    }

    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.to_string(), "1 2 3 \n1 2 \n1 \n");
    assert_eq!(sum.try_sub(&b).unwrap(), a);
    assert!(a.try_add(&TriangularMatrix::new(2).unwrap()).is_err());
    assert_ne!(a, TriangularMatrix::new(2).unwrap());
}
