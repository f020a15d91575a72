//! Tests for element-wise vector and matrix operations.

use sparseblas::{
    ewise_add_matrix, ewise_add_vector, ewise_mult_matrix_with, ewise_mult_vector, ExecOptions,
    GraphError, Matrix, Max, NoAccumulate, Plus, Times, Vector,
};

#[test]
fn add_is_union_mult_is_intersection() {
    let u = Vector::from_pairs(5, vec![(0, 1.0), (2, 2.0), (4, 3.0)]).unwrap();
    let v = Vector::from_pairs(5, vec![(2, 10.0), (3, 20.0)]).unwrap();

    let mut sum = Vector::new(5);
    ewise_add_vector(&mut sum, None, &NoAccumulate, &Plus, &u, &v, false).unwrap();
    assert_eq!(sum.to_dense(0.0), vec![1.0, 0.0, 12.0, 20.0, 3.0]);
    assert_eq!(sum.nvals(), 4);

    let mut prod = Vector::new(5);
    ewise_mult_vector(&mut prod, None, &NoAccumulate, &Times, &u, &v, false).unwrap();
    assert_eq!(prod, Vector::from_pairs(5, vec![(2, 20.0)]).unwrap());
}

#[test]
fn masked_replace_mult() {
    let u = Vector::from_dense(&[1, 2, 3, 4], 0);
    let v = Vector::from_dense(&[5, 6, 7, 8], 0);
    let mask = Vector::from_dense(&[true, false, true, false], false);
    let mut w = Vector::from_dense(&[9, 9, 9, 9], 0);
    ewise_mult_vector(&mut w, Some(&mask), &NoAccumulate, &Times, &u, &v, true).unwrap();
    assert_eq!(w.to_dense(0), vec![5, 0, 21, 0]);
}

#[test]
fn matrix_add_with_max_accumulator() {
    let a = Matrix::from_dense_rows(&[vec![1, 0], vec![5, 0]], 0).unwrap();
    let b = Matrix::from_dense_rows(&[vec![2, 0], vec![0, 7]], 0).unwrap();
    let mut c = Matrix::from_dense_rows(&[vec![4, 4], vec![4, 4]], 0).unwrap();
    ewise_add_matrix(&mut c, None, &Max, &Plus, &a, &b, false).unwrap();
    assert_eq!(c, Matrix::from_dense_rows(&[vec![4, 4], vec![5, 7]], 0).unwrap());
}

#[test]
fn matrix_shape_mismatch() {
    let a: Matrix<i32> = Matrix::new(2, 2);
    let b: Matrix<i32> = Matrix::new(2, 3);
    let mut c: Matrix<i32> = Matrix::new(2, 2);
    let err = ewise_add_matrix(&mut c, None, &NoAccumulate, &Plus, &a, &b, false).unwrap_err();
    assert_eq!(
        err,
        GraphError::DimensionMismatch("ewise_add: failed size(C) == size(B) check".into())
    );
}

#[test]
fn matrix_mult_parallel_matches_serial() {
    let n = 64;
    let a = Matrix::from_triples(n, n, (0..n).map(|i| (i, (i * 7) % n, i as i64 + 1))).unwrap();
    let b = Matrix::from_triples(n, n, (0..n).map(|i| (i, (i * 7) % n, 2i64))).unwrap();
    let parallel = ExecOptions { parallel_rows: true, min_parallel_rows: 1 };

    let mut serial_out = Matrix::new(n, n);
    let serial = ExecOptions::serial();
    ewise_mult_matrix_with(&mut serial_out, None, &NoAccumulate, &Times, &a, &b, false, &serial)
        .unwrap();
    let mut parallel_out = Matrix::new(n, n);
    ewise_mult_matrix_with(&mut parallel_out, None, &NoAccumulate, &Times, &a, &b, false, &parallel)
        .unwrap();

    assert_eq!(serial_out, parallel_out);
    assert_eq!(serial_out.nvals(), n);
    assert_eq!(serial_out.extract_element(3, 21), Ok(&8));
}
