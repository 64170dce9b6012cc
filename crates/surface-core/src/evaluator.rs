//! Grid evaluation: selector + sampling settings → (X, Y, Z).

use log::{debug, warn};
use serde::Serialize;

use crate::catalog::Selector;
use crate::config::SamplingConfig;
use crate::grid::{linspace, meshgrid, Grid};

/// The three equal-shaped grids of one evaluated surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// None when the requested name was not in the catalog (Z is all zeros).
    pub selector: Option<Selector>,
    pub x: Grid,
    pub y: Grid,
    pub z: Grid,
}

impl Surface {
    /// Assemble a surface from parts.
    ///
    /// # Panics
    /// If the three grids do not share a shape.
    pub fn from_parts(selector: Option<Selector>, x: Grid, y: Grid, z: Grid) -> Self {
        assert_eq!(x.shape(), y.shape(), "X and Y must share a shape");
        assert_eq!(x.shape(), z.shape(), "X and Z must share a shape");
        Self { selector, x, y, z }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.z.shape()
    }

    pub fn stats(&self) -> SurfaceStats {
        SurfaceStats::of(self)
    }
}

/// Evaluate the surface named `name` (display name or slug).
///
/// Unrecognized names are not an error: they produce the zero surface.
pub fn evaluate(name: &str, sampling: &SamplingConfig) -> Surface {
    let selector = Selector::parse(name);
    if selector.is_none() {
        warn!("unknown surface '{name}', falling back to a flat surface");
    }
    evaluate_selector(selector, sampling)
}

/// Evaluate a catalog surface, or the zero surface for `None`.
pub fn evaluate_selector(selector: Option<Selector>, sampling: &SamplingConfig) -> Surface {
    let [lo, hi] = sampling.domain;
    let n = sampling.resolution;
    let xs = linspace(lo, hi, n);
    let ys = linspace(lo, hi, n);
    let (x, y) = meshgrid(&xs, &ys);

    let z = match selector {
        Some(sel) => height_field(sel, &x, &y),
        None => Grid::zeros_like(&x),
    };

    debug!(
        "evaluated {} on {n}x{n} over [{lo}, {hi}]",
        selector.map_or("flat surface", |s| s.name())
    );

    Surface { selector, x, y, z }
}

#[cfg(not(feature = "threading"))]
fn height_field(sel: Selector, x: &Grid, y: &Grid) -> Grid {
    let data = x
        .data
        .iter()
        .zip(&y.data)
        .map(|(&xv, &yv)| sel.eval(xv, yv))
        .collect();
    Grid { data, rows: x.rows, cols: x.cols }
}

#[cfg(feature = "threading")]
fn height_field(sel: Selector, x: &Grid, y: &Grid) -> Grid {
    use rayon::prelude::*;

    let mut z = Grid::zeros_like(x);
    let cols = x.cols.max(1);
    z.data
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, row)| {
            let start = r * cols;
            for (c, out) in row.iter_mut().enumerate() {
                *out = sel.eval(x.data[start + c], y.data[start + c]);
            }
        });
    z
}

/// Summary of a height field, for diagnostics and the CLI's `--stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceStats {
    pub surface: String,
    pub rows: usize,
    pub cols: usize,
    /// Finite minimum; None when no sample is finite.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub non_finite: usize,
}

impl SurfaceStats {
    pub fn of(surface: &Surface) -> Self {
        let z = &surface.z;
        let finite: Vec<f64> = z.data.iter().cloned().filter(|v| v.is_finite()).collect();
        let range = z.finite_range();
        let mean = (!finite.is_empty()).then(|| finite.iter().sum::<f64>() / finite.len() as f64);
        Self {
            surface: surface
                .selector
                .map_or_else(|| "flat".to_string(), |s| s.name().to_string()),
            rows: z.rows,
            cols: z.cols,
            min: range.map(|r| r.0),
            max: range.map(|r| r.1),
            mean,
            non_finite: z.data.len() - finite.len(),
        }
    }
}
