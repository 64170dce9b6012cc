//! The renderer's output and its PNG / SVG export.

use std::fmt::Write as _;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::colormap::Colormap;
use crate::error::{Result, SurfaceError};
use crate::render::raster::{draw_label, draw_line, fill_quad};
use crate::view::ViewParams;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const AXIS_COLOR: [u8; 3] = [102, 102, 102];
const LABEL_SIZE: f64 = 10.0;

/// One projected quad of the surface, in pixel coordinates (+y down).
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub points: [(f64, f64); 4],
    /// Camera depth of the quad centre; larger is further away.
    pub depth: f64,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub label: String,
    pub label_at: (f64, f64),
}

/// A rendered surface. Facets are stored back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub view: ViewParams,
    pub colormap: Colormap,
    /// Finite height range the colour scale spans.
    pub z_range: (f64, f64),
    /// Catalog name of the surface; None for the flat fallback.
    pub title: Option<String>,
    pub facets: Vec<Facet>,
    pub axes: Vec<AxisLine>,
}

/// Output formats `Figure::save` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(SurfaceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Figure {
    /// Bounding box `(min_x, min_y, max_x, max_y)` of all facets, unclipped.
    pub fn footprint(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.facets.iter().flat_map(|f| f.points.iter());
        let &(x, y) = it.next()?;
        Some(it.fold((x, y, x, y), |(x0, y0, x1, y1), &(px, py)| {
            (x0.min(px), y0.min(py), x1.max(px), y1.max(py))
        }))
    }

    /// Rasterize onto a white canvas: facets, then axes, then labels.
    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, Rgb(BACKGROUND));
        for facet in &self.facets {
            fill_quad(&mut img, facet.points, facet.color);
        }
        for axis in &self.axes {
            draw_line(&mut img, axis.from, axis.to, AXIS_COLOR);
            draw_label(&mut img, &axis.label, axis.label_at, LABEL_SIZE, AXIS_COLOR);
        }
        img
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
        Ok(buf)
    }

    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = String::with_capacity(self.facets.len() * 120 + 1024);

        let _ = writeln!(
            svg,
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">"
        );
        if let Some(title) = &self.title {
            let _ = writeln!(svg, "<title>{}</title>", escape(title));
        }
        let _ = writeln!(svg, "<rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>");

        for f in &self.facets {
            let [r, g, b] = f.color;
            svg.push_str("<polygon points=\"");
            for (i, (x, y)) in f.points.iter().enumerate() {
                if i > 0 {
                    svg.push(' ');
                }
                let _ = write!(svg, "{x:.1},{y:.1}");
            }
            // Same-colour stroke closes hairline seams between neighbours.
            let _ = writeln!(
                svg,
                "\" fill=\"rgb({r},{g},{b})\" stroke=\"rgb({r},{g},{b})\" stroke-width=\"0.5\"/>"
            );
        }

        let [ar, ag, ab] = AXIS_COLOR;
        for a in &self.axes {
            let _ = writeln!(
                svg,
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"rgb({ar},{ag},{ab})\" stroke-width=\"1\"/>",
                a.from.0, a.from.1, a.to.0, a.to.1
            );
            let _ = writeln!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"rgb({ar},{ag},{ab})\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
                a.label_at.0,
                a.label_at.1,
                escape(&a.label)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to `path`, picking PNG or SVG from the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        match ImageFormat::from_path(path)? {
            ImageFormat::Png => fs::write(path, self.to_png_bytes()?)?,
            ImageFormat::Svg => fs::write(path, self.to_svg())?,
        }
        Ok(())
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
