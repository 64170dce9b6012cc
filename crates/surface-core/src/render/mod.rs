//! Surface renderer: (X, Y, Z) + view parameters → [`Figure`].
//!
//! Pipeline:
//!   1. Normalize the domain into the plot box, heights into [-Z_SCALE, Z_SCALE].
//!   2. Stride the grid down to at most `rcount × ccount` quads.
//!   3. Colour each quad by the mean height of its corners.
//!   4. Project, sort back to front, fit to the canvas scaled by zoom.
//!   5. Add the three labelled axes from the bottom corner nearest the viewer.

pub mod projection;
pub mod raster;

use log::debug;

use crate::config::RenderConfig;
use crate::evaluator::Surface;
use crate::figure::{AxisLine, Facet, Figure};
use crate::view::ViewParams;
use projection::{box_corners, box_radius, Camera, Point3, DEFAULT_DISTANCE, Z_SCALE};

/// Fraction of the shorter canvas side the box spans at the default distance.
const FILL: f64 = 0.9;
/// Pixel offset of axis labels from their axis midpoint.
const LABEL_OFFSET: f64 = 16.0;

/// Render a surface.
///
/// Angles are used as given; clamping to slider ranges is the host's job.
/// A non-positive or non-finite zoom falls back to the default distance.
///
/// # Panics
/// If X, Y and Z do not share a shape.
pub fn render(surface: &Surface, view: &ViewParams, config: &RenderConfig) -> Figure {
    let (x, y, z) = (&surface.x, &surface.y, &surface.z);
    assert_eq!(x.shape(), y.shape(), "X and Y must share a shape");
    assert_eq!(x.shape(), z.shape(), "X and Z must share a shape");

    let camera = Camera::from_degrees(view.elevation, view.azimuth);
    let distance = if view.zoom.is_finite() && view.zoom > 0.0 {
        view.zoom
    } else {
        debug!("zoom {} is not a positive distance, using {DEFAULT_DISTANCE}", view.zoom);
        DEFAULT_DISTANCE
    };

    // ── Normalization ────────────────────────────────────────────────────────
    let nx = normalizer(x.finite_range(), 1.0);
    let ny = normalizer(y.finite_range(), 1.0);
    let z_range = z.finite_range().unwrap_or((0.0, 0.0));
    let nz = normalizer(Some(z_range), Z_SCALE);
    let (z_lo, z_hi) = z_range;

    // ── Canvas mapping ───────────────────────────────────────────────────────
    let (w, h) = (config.width as f64, config.height as f64);
    let scale = 0.5 * w.min(h) * FILL / box_radius() * DEFAULT_DISTANCE / distance;
    let to_screen = |p: Point3| {
        let (sx, sy) = camera.project(p);
        (w / 2.0 + sx * scale, h / 2.0 - sy * scale)
    };

    // ── Facets ───────────────────────────────────────────────────────────────
    let rows = stride_indices(z.rows, config.rcount);
    let cols = stride_indices(z.cols, config.ccount);
    let mut facets = Vec::with_capacity(rows.len().saturating_sub(1) * cols.len().saturating_sub(1));
    let mut skipped = 0usize;

    for rw in rows.windows(2) {
        for cw in cols.windows(2) {
            let corners = [(rw[0], cw[0]), (rw[0], cw[1]), (rw[1], cw[1]), (rw[1], cw[0])];
            let heights = corners.map(|(r, c)| z.get(r, c));
            if heights.iter().any(|v| !v.is_finite()) {
                skipped += 1;
                continue;
            }

            let points = corners.map(|(r, c)| Point3::new(nx(x.get(r, c)), ny(y.get(r, c)), nz(z.get(r, c))));
            let mean = heights.iter().sum::<f64>() / 4.0;
            let center = Point3::new(
                points.iter().map(|p| p.x).sum::<f64>() / 4.0,
                points.iter().map(|p| p.y).sum::<f64>() / 4.0,
                points.iter().map(|p| p.z).sum::<f64>() / 4.0,
            );

            facets.push(Facet {
                points: points.map(&to_screen),
                depth: camera.depth(center),
                color: config.colormap.map(mean, z_lo, z_hi),
            });
        }
    }

    // Painter's algorithm: furthest first.
    facets.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));

    debug!(
        "rendered {} facets ({skipped} skipped as non-finite) at elev={} azim={} dist={distance}",
        facets.len(),
        view.elevation,
        view.azimuth
    );

    Figure {
        width: config.width,
        height: config.height,
        view: *view,
        colormap: config.colormap,
        z_range,
        title: surface.selector.map(|s| s.name().to_string()),
        facets,
        axes: axes(&camera, &to_screen, (w / 2.0, h / 2.0)),
    }
}

/// Maps `[lo, hi]` onto `[-half, half]`. A missing or degenerate range maps
/// everything to `-half`.
fn normalizer(range: Option<(f64, f64)>, half: f64) -> impl Fn(f64) -> f64 {
    let (lo, span) = match range {
        Some((lo, hi)) if hi > lo => (lo, hi - lo),
        Some((lo, _)) => (lo, 0.0),
        None => (0.0, 0.0),
    };
    move |v| {
        if span > 0.0 {
            (v - lo) / span * 2.0 * half - half
        } else {
            -half
        }
    }
}

/// Every `ceil(n / count)`-th index, always ending with `n - 1`.
fn stride_indices(n: usize, count: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let stride = n.div_ceil(count.max(1)).max(1);
    let mut out: Vec<usize> = (0..n - 1).step_by(stride).collect();
    out.push(n - 1);
    out
}

/// Axis edges from the bottom box corner nearest the viewer.
fn axes(camera: &Camera, to_screen: &impl Fn(Point3) -> (f64, f64), center: (f64, f64)) -> Vec<AxisLine> {
    let origin = box_corners()
        .into_iter()
        .filter(|p| p.z < 0.0)
        .min_by(|a, b| {
            camera
                .depth(*a)
                .partial_cmp(&camera.depth(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(Point3::new(-1.0, -1.0, -Z_SCALE));

    let ends = [
        ("X", Point3::new(-origin.x, origin.y, origin.z)),
        ("Y", Point3::new(origin.x, -origin.y, origin.z)),
        ("Z", Point3::new(origin.x, origin.y, Z_SCALE)),
    ];

    ends.into_iter()
        .map(|(label, end)| {
            let from = to_screen(origin);
            let to = to_screen(end);
            let mid = to_screen(origin.lerp(end, 0.5));
            let (dx, dy) = (mid.0 - center.0, mid.1 - center.1);
            let len = (dx * dx + dy * dy).sqrt();
            let label_at = if len > 1e-9 {
                (mid.0 + dx / len * LABEL_OFFSET, mid.1 + dy / len * LABEL_OFFSET)
            } else {
                (mid.0 + LABEL_OFFSET, mid.1)
            };
            AxisLine {
                from,
                to,
                label: label.to_string(),
                label_at,
            }
        })
        .collect()
}
