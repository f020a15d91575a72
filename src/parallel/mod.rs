//! Row scheduling for the row-oriented kernels.
//!
//! Each output row is computed independently from immutable inputs, so rows
//! may be evaluated on the rayon pool. Results are always gathered in row
//! order and committed by the caller on a single thread, so the parallel and
//! serial paths produce identical output.

use crate::config::ExecOptions;

/// Evaluate `f` for every row in `0..nrows`, in parallel when `opts` allows it.
pub fn map_rows<R, F>(nrows: usize, opts: &ExecOptions, f: F) -> Vec<R>
where
    F: Fn(usize) -> R + Send + Sync,
    R: Send,
{
    #[cfg(feature = "rayon")]
    {
        if opts.use_parallel(nrows) {
            use rayon::prelude::*;
            log::trace!("map_rows: {} rows on {} threads", nrows, rayon::current_num_threads());
            return (0..nrows).into_par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = opts;
    (0..nrows).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_and_serial_agree() {
        let parallel = ExecOptions { parallel_rows: true, min_parallel_rows: 1 };
        let a = map_rows(257, &parallel, |r| r * r);
        let b = map_rows(257, &ExecOptions::serial(), |r| r * r);
        assert_eq!(a, b);
        assert_eq!(a[16], 256);
    }
}
