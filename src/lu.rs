//! Dense LU decomposition with partial pivoting.

use ndarray::{Array1, Array2};

use crate::error::{Error, Result};

/// `PA = LU` factorisation of a square matrix.
///
/// `L` (unit diagonal, stored below the diagonal) and `U` share one array.
/// `perm[i]` is the row of the original matrix placed at row `i`.
#[derive(Debug, Clone)]
pub(crate) struct Lu {
    lu: Array2<f64>,
    perm: Vec<usize>,
}

impl Lu {
    /// Factorises `a` in place.
    ///
    /// A pivot is treated as zero when its magnitude does not exceed
    /// `n * EPSILON * max|a|`.
    pub(crate) fn factor(mut a: Array2<f64>) -> Result<Self> {
        let (n, cols) = a.dim();
        if n != cols {
            return Err(Error::DimensionMismatch {
                expected: n,
                actual: cols,
            });
        }

        let scale = a.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        let tol = scale * n as f64 * f64::EPSILON;
        let mut perm: Vec<usize> = (0..n).collect();

        for k in 0..n {
            let (p, pivot) = (k..n)
                .map(|i| (i, a[[i, k]].abs()))
                .fold((k, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            if !(pivot > tol) {
                return Err(Error::Singular { column: k });
            }
            if p != k {
                for j in 0..n {
                    a.swap([k, j], [p, j]);
                }
                perm.swap(k, p);
            }

            let diag = a[[k, k]];
            for i in (k + 1)..n {
                let f = a[[i, k]] / diag;
                a[[i, k]] = f;
                if f != 0.0 {
                    for j in (k + 1)..n {
                        a[[i, j]] -= f * a[[k, j]];
                    }
                }
            }
        }

        Ok(Self { lu: a, perm })
    }

    /// Solves `A x = b` using the factorisation.
    pub(crate) fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        let n = self.perm.len();
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                actual: b.len(),
            });
        }

        let mut x: Array1<f64> = self.perm.iter().map(|&i| b[i]).collect();

        // Forward substitution (L has a unit diagonal).
        for i in 0..n {
            let s: f64 = (0..i).map(|j| self.lu[[i, j]] * x[j]).sum();
            x[i] -= s;
        }
        // Back substitution.
        for i in (0..n).rev() {
            let s: f64 = ((i + 1)..n).map(|j| self.lu[[i, j]] * x[j]).sum();
            x[i] = (x[i] - s) / self.lu[[i, i]];
        }

        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteSolution);
        }
        Ok(x)
    }
}
