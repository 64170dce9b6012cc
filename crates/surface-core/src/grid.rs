use serde::{Deserialize, Serialize};

/// A 2D array of f64 samples, row-major.
/// Row index follows Y, column index follows X ("xy" meshgrid indexing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major samples.
    pub data: Vec<f64>,
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    /// Create a new Grid filled with the given value.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// A zero-filled grid with the same shape as `other`.
    pub fn zeros_like(other: &Grid) -> Self {
        Self::new(other.rows, other.cols, 0.0)
    }

    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { data, rows, cols }
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.cols + col] = val;
    }

    /// Smallest sample. NaN is skipped, infinities are not.
    pub fn min(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample. NaN is skipped, infinities are not.
    pub fn max(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `(min, max)` over finite samples only, or None when nothing is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in self.data.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo <= hi).then_some((lo, hi))
    }
}

/// `n` evenly spaced samples over `[lo, hi]`.
///
/// `v[i] = lo + i * step` with `step = (hi - lo) / (n - 1)`; the last sample
/// is exactly `hi`. `n == 1` yields `[lo]`.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| lo + i as f64 * step).collect();
            v[n - 1] = hi;
            v
        }
    }
}

/// Outer product of two axes: `X[r][c] = xs[c]`, `Y[r][c] = ys[r]`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid, Grid) {
    let x = Grid::from_fn(ys.len(), xs.len(), |_, c| xs[c]);
    let y = Grid::from_fn(ys.len(), xs.len(), |r, _| ys[r]);
    (x, y)
}
