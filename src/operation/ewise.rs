//! Element-wise combination of two vectors or matrices of the same shape.
//!
//! `ewise_add` works on the union of the stored patterns, applying the
//! operator where both operands hold a value and copying the lone value
//! elsewhere. `ewise_mult` works on the intersection only.

use crate::algebra::{Accumulator, BinaryOp};
use crate::config::ExecOptions;
use crate::core::sequence::{SparseSequence, SparseView};
use crate::engine::{write_matrix, write_vector};
use crate::error::GraphError;
use crate::matrix::{Matrix, Vector};
use crate::parallel::map_rows;
use crate::utils::check::{check_dimension, check_matrix_mask, check_vector_mask};

fn union_with<T: Clone, Op: BinaryOp<T>>(
    u: SparseView<'_, T>,
    v: SparseView<'_, T>,
    op: &Op,
) -> SparseSequence<T> {
    let (ui, uv) = (u.indices(), u.values());
    let (vi, vv) = (v.indices(), v.values());
    let mut out = SparseSequence::with_capacity(ui.len() + vi.len());
    let (mut i, mut j) = (0, 0);
    while i < ui.len() || j < vi.len() {
        if j == vi.len() || (i < ui.len() && ui[i] < vi[j]) {
            out.push(ui[i], uv[i].clone());
            i += 1;
        } else if i == ui.len() || vi[j] < ui[i] {
            out.push(vi[j], vv[j].clone());
            j += 1;
        } else {
            out.push(ui[i], op.apply(uv[i].clone(), vv[j].clone()));
            i += 1;
            j += 1;
        }
    }
    out
}

fn intersect_with<T: Clone, Op: BinaryOp<T>>(
    u: SparseView<'_, T>,
    v: SparseView<'_, T>,
    op: &Op,
) -> SparseSequence<T> {
    let (ui, uv) = (u.indices(), u.values());
    let (vi, vv) = (v.indices(), v.values());
    let mut out = SparseSequence::with_capacity(ui.len().min(vi.len()));
    let (mut i, mut j) = (0, 0);
    while i < ui.len() && j < vi.len() {
        if ui[i] < vi[j] {
            i += 1;
        } else if vi[j] < ui[i] {
            j += 1;
        } else {
            out.push(ui[i], op.apply(uv[i].clone(), vv[j].clone()));
            i += 1;
            j += 1;
        }
    }
    out
}

fn check_vector_operands<T>(
    w: &Vector<T>,
    mask: Option<&Vector<bool>>,
    u: &Vector<T>,
    v: &Vector<T>,
    name: &str,
) -> Result<(), GraphError> {
    check_vector_mask(w, mask, &format!("{}: failed size(w) == size(mask) check", name))?;
    check_dimension(w.size(), u.size(), &format!("{}: failed size(w) == size(u) check", name))?;
    check_dimension(w.size(), v.size(), &format!("{}: failed size(w) == size(v) check", name))
}

fn check_matrix_operands<T>(
    c: &Matrix<T>,
    mask: Option<&Matrix<bool>>,
    a: &Matrix<T>,
    b: &Matrix<T>,
    name: &str,
) -> Result<(), GraphError> {
    check_matrix_mask(c, mask, &format!("{}: failed size(C) == size(mask) check", name))?;
    for (m, label) in [(a, "A"), (b, "B")] {
        let msg = format!("{}: failed size(C) == size({}) check", name, label);
        check_dimension(c.nrows(), m.nrows(), &msg)?;
        check_dimension(c.ncols(), m.ncols(), &msg)?;
    }
    Ok(())
}

/// `w<mask> ⊙= u ⊕ v` over the union of stored indices.
pub fn ewise_add_vector<T, Op, Acc>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    op: &Op,
    u: &Vector<T>,
    v: &Vector<T>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    Op: BinaryOp<T>,
    Acc: Accumulator<T>,
{
    check_vector_operands(w, mask, u, v, "ewise_add")?;
    let t = union_with(u.contents(), v.contents(), op);
    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}

/// `w<mask> ⊙= u ⊗ v` over the intersection of stored indices.
pub fn ewise_mult_vector<T, Op, Acc>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    op: &Op,
    u: &Vector<T>,
    v: &Vector<T>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    Op: BinaryOp<T>,
    Acc: Accumulator<T>,
{
    check_vector_operands(w, mask, u, v, "ewise_mult")?;
    let t = intersect_with(u.contents(), v.contents(), op);
    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}

/// `C<mask> ⊙= A ⊕ B` over the union of stored positions.
pub fn ewise_add_matrix<T, Op, Acc>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    op: &Op,
    a: &Matrix<T>,
    b: &Matrix<T>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone + Send + Sync,
    Op: BinaryOp<T> + Sync,
    Acc: Accumulator<T>,
{
    ewise_add_matrix_with(c, mask, accum, op, a, b, replace_flag, &ExecOptions::default())
}

/// [`ewise_add_matrix`] with explicit execution options.
#[allow(clippy::too_many_arguments)]
pub fn ewise_add_matrix_with<T, Op, Acc>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    op: &Op,
    a: &Matrix<T>,
    b: &Matrix<T>,
    replace_flag: bool,
    opts: &ExecOptions,
) -> Result<(), GraphError>
where
    T: Clone + Send + Sync,
    Op: BinaryOp<T> + Sync,
    Acc: Accumulator<T>,
{
    check_matrix_operands(c, mask, a, b, "ewise_add")?;
    let t = map_rows(c.nrows(), opts, |r| union_with(a.row(r), b.row(r), op));
    write_matrix(c, mask, accum, t, replace_flag);
    Ok(())
}

/// `C<mask> ⊙= A ⊗ B` over the intersection of stored positions.
pub fn ewise_mult_matrix<T, Op, Acc>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    op: &Op,
    a: &Matrix<T>,
    b: &Matrix<T>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone + Send + Sync,
    Op: BinaryOp<T> + Sync,
    Acc: Accumulator<T>,
{
    ewise_mult_matrix_with(c, mask, accum, op, a, b, replace_flag, &ExecOptions::default())
}

/// [`ewise_mult_matrix`] with explicit execution options.
#[allow(clippy::too_many_arguments)]
pub fn ewise_mult_matrix_with<T, Op, Acc>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    op: &Op,
    a: &Matrix<T>,
    b: &Matrix<T>,
    replace_flag: bool,
    opts: &ExecOptions,
) -> Result<(), GraphError>
where
    T: Clone + Send + Sync,
    Op: BinaryOp<T> + Sync,
    Acc: Accumulator<T>,
{
    check_matrix_operands(c, mask, a, b, "ewise_mult")?;
    let t = map_rows(c.nrows(), opts, |r| intersect_with(a.row(r), b.row(r), op));
    write_matrix(c, mask, accum, t, replace_flag);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Min, NoAccumulate, Plus, Times};

    fn seq(pairs: &[(usize, i32)]) -> SparseSequence<i32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn union_and_intersection() {
        let u = seq(&[(0, 1), (2, 2), (4, 4)]);
        let v = seq(&[(1, 10), (2, 20), (5, 50)]);
        assert_eq!(
            union_with(u.view(), v.view(), &Plus),
            seq(&[(0, 1), (1, 10), (2, 22), (4, 4), (5, 50)])
        );
        assert_eq!(intersect_with(u.view(), v.view(), &Times), seq(&[(2, 40)]));
        assert_eq!(intersect_with(u.view(), seq(&[]).view(), &Times), seq(&[]));
    }

    #[test]
    fn vector_shape_mismatch() {
        let u = Vector::from_dense(&[1, 2], 0);
        let v = Vector::from_dense(&[1, 2, 3], 0);
        let mut w = Vector::new(2);
        let err =
            ewise_add_vector(&mut w, None, &NoAccumulate, &Plus, &u, &v, false).unwrap_err();
        assert_eq!(
            err,
            GraphError::DimensionMismatch("ewise_add: failed size(w) == size(v) check".into())
        );
    }

    #[test]
    fn matrix_min_accumulated() {
        let a = Matrix::from_dense_rows(&[vec![4, 0], vec![0, 2]], 0).unwrap();
        let b = Matrix::from_dense_rows(&[vec![1, 3], vec![0, 0]], 0).unwrap();
        let mut c = Matrix::from_dense_rows(&[vec![2, 2], vec![2, 2]], 0).unwrap();
        ewise_add_matrix(&mut c, None, &Min, &Plus, &a, &b, false).unwrap();
        // a+b = [[5,3],[.,2]]; min with 2 everywhere
        assert_eq!(c, Matrix::from_dense_rows(&[vec![2, 2], vec![2, 2]], 0).unwrap());
        ewise_mult_matrix(&mut c, None, &Plus, &Times, &a, &b, false).unwrap();
        assert_eq!(c, Matrix::from_dense_rows(&[vec![6, 2], vec![2, 2]], 0).unwrap());
    }
}
