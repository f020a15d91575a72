use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use sparseblas::{mxv_with, ArithmeticSemiring, ExecOptions, Matrix, NoAccumulate, Vector};

fn bench_mxv_vs_faer(c: &mut Criterion) {
    let n = 2000;
    // banded matrix, 5 entries per row
    let triples = (0..n).flat_map(|i| {
        (i.saturating_sub(2)..(i + 3).min(n)).map(move |j| (i, j, ((i * 31 + j) as f64).sin()))
    });
    let a = Matrix::from_triples(n, n, triples).unwrap();
    let u_dense: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let u = Vector::from_dense(&u_dense, 0.0);

    c.bench_function("sparseblas mxv serial", |ben| {
        let opts = ExecOptions::serial();
        ben.iter(|| {
            let mut w = Vector::new(n);
            let (a, u) = (black_box(&a), black_box(&u));
            mxv_with(&mut w, None, &NoAccumulate, &ArithmeticSemiring, a, u, false, &opts).unwrap();
            w
        })
    });

    c.bench_function("sparseblas mxv parallel", |ben| {
        let opts = ExecOptions { parallel_rows: true, min_parallel_rows: 1 };
        ben.iter(|| {
            let mut w = Vector::new(n);
            let (a, u) = (black_box(&a), black_box(&u));
            mxv_with(&mut w, None, &NoAccumulate, &ArithmeticSemiring, a, u, false, &opts).unwrap();
            w
        })
    });

    let dense = a.to_faer(0.0);
    let x = Mat::from_fn(n, 1, |i, _| u_dense[i]);
    c.bench_function("faer dense matvec", |ben| {
        ben.iter(|| &dense * black_box(&x))
    });
}

criterion_group!(benches, bench_mxv_vs_faer);
criterion_main!(benches);
