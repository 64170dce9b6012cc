//! Pixel-level drawing onto an `RgbImage`: filled triangles, lines and the
//! stroke glyphs used for axis labels.

use image::{Rgb, RgbImage};

/// Fill a triangle given in pixel coordinates. Pixels whose centres lie
/// inside or on an edge are painted.
pub fn fill_triangle(img: &mut RgbImage, p: [(f64, f64); 3], color: [u8; 3]) {
    let area = edge(p[0], p[1], p[2]);
    if area == 0.0 || !area.is_finite() {
        return;
    }

    let (w, h) = (img.width() as f64, img.height() as f64);
    let min_x = p.iter().map(|q| q.0).fold(f64::INFINITY, f64::min).floor().max(0.0);
    let max_x = p.iter().map(|q| q.0).fold(f64::NEG_INFINITY, f64::max).ceil().min(w - 1.0);
    let min_y = p.iter().map(|q| q.1).fold(f64::INFINITY, f64::min).floor().max(0.0);
    let max_y = p.iter().map(|q| q.1).fold(f64::NEG_INFINITY, f64::max).ceil().min(h - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }

    let sign = area.signum();
    for py in min_y as u32..=max_y as u32 {
        for px in min_x as u32..=max_x as u32 {
            let c = (px as f64 + 0.5, py as f64 + 0.5);
            let w0 = edge(p[1], p[2], c) * sign;
            let w1 = edge(p[2], p[0], c) * sign;
            let w2 = edge(p[0], p[1], c) * sign;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                img.put_pixel(px, py, Rgb(color));
            }
        }
    }
}

/// Fill a convex quad as two triangles.
pub fn fill_quad(img: &mut RgbImage, q: [(f64, f64); 4], color: [u8; 3]) {
    fill_triangle(img, [q[0], q[1], q[2]], color);
    fill_triangle(img, [q[0], q[2], q[3]], color);
}

/// One-pixel line between two points. Only the part inside the canvas is
/// stepped, so the cost is bounded by the canvas size.
pub fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), color: [u8; 3]) {
    let Some((a, b)) = clip_segment(a, b, img.width() as f64, img.height() as f64) else {
        return;
    };
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let steps = dx.abs().max(dy.abs()).ceil();
    if !steps.is_finite() {
        return;
    }
    let n = steps.max(1.0) as u32;
    for i in 0..=n {
        let t = i as f64 / n as f64;
        put(img, a.0 + dx * t, a.1 + dy * t, color);
    }
}

/// Draw `text` centred on `center`, each glyph `size` pixels tall.
pub fn draw_label(img: &mut RgbImage, text: &str, center: (f64, f64), size: f64, color: [u8; 3]) {
    let advance = size * 0.8;
    let width = advance * text.chars().count() as f64 - size * 0.2;
    let mut left = center.0 - width / 2.0;
    let top = center.1 - size / 2.0;
    for ch in text.chars() {
        for &((x0, y0), (x1, y1)) in glyph_strokes(ch) {
            let glyph_w = size * 0.6;
            draw_line(
                img,
                (left + x0 * glyph_w, top + y0 * size),
                (left + x1 * glyph_w, top + y1 * size),
                color,
            );
        }
        left += advance;
    }
}

type Stroke = ((f64, f64), (f64, f64));

/// Strokes in a unit box, y pointing down. Only the axis letters are defined.
fn glyph_strokes(ch: char) -> &'static [Stroke] {
    static X: [Stroke; 2] = [((0.0, 0.0), (1.0, 1.0)), ((1.0, 0.0), (0.0, 1.0))];
    static Y: [Stroke; 3] = [
        ((0.0, 0.0), (0.5, 0.5)),
        ((1.0, 0.0), (0.5, 0.5)),
        ((0.5, 0.5), (0.5, 1.0)),
    ];
    static Z: [Stroke; 3] = [
        ((0.0, 0.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.0, 1.0)),
        ((0.0, 1.0), (1.0, 1.0)),
    ];
    match ch.to_ascii_uppercase() {
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        _ => &[],
    }
}

/// Liang-Barsky clip of segment `a`-`b` to `[0, w] x [0, h]`.
fn clip_segment(a: (f64, f64), b: (f64, f64), w: f64, h: f64) -> Option<((f64, f64), (f64, f64))> {
    if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.0), (dx, w - a.0), (-dy, a.1), (dy, h - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        (a.0 + dx * t0, a.1 + dy * t0),
        (a.0 + dx * t1, a.1 + dy * t1),
    ))
}

#[inline]
fn edge(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

#[inline]
fn put(img: &mut RgbImage, x: f64, y: f64, color: [u8; 3]) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (px, py) = (x as u32, y as u32);
    if px < img.width() && py < img.height() {
        img.put_pixel(px, py, Rgb(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [255, 0, 0];

    fn blank(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    fn painted(img: &RgbImage) -> usize {
        img.pixels().filter(|p| p.0 == RED).count()
    }

    #[test]
    fn triangle_fill_ignores_winding() {
        let mut a = blank(20, 20);
        let mut b = blank(20, 20);
        fill_triangle(&mut a, [(2.0, 2.0), (18.0, 2.0), (2.0, 18.0)], RED);
        fill_triangle(&mut b, [(2.0, 2.0), (2.0, 18.0), (18.0, 2.0)], RED);
        assert_eq!(a, b);
        assert!(painted(&a) > 100);
        assert_eq!(a.get_pixel(3, 3).0, RED);
        assert_ne!(a.get_pixel(17, 17).0, RED);
    }

    #[test]
    fn quad_covers_its_square() {
        let mut img = blank(10, 10);
        fill_quad(&mut img, [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], RED);
        assert_eq!(painted(&img), 100);
    }

    #[test]
    fn offscreen_and_degenerate_shapes_are_ignored() {
        let mut img = blank(10, 10);
        fill_triangle(&mut img, [(-50.0, -50.0), (-40.0, -50.0), (-50.0, -40.0)], RED);
        fill_triangle(&mut img, [(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], RED);
        fill_triangle(&mut img, [(f64::NAN, 1.0), (5.0, 5.0), (9.0, 1.0)], RED);
        draw_line(&mut img, (-5.0, -5.0), (-1.0, -1.0), RED);
        assert_eq!(painted(&img), 0);
    }

    #[test]
    fn line_paints_both_endpoints() {
        let mut img = blank(10, 10);
        draw_line(&mut img, (1.0, 1.0), (8.0, 4.0), RED);
        assert_eq!(img.get_pixel(1, 1).0, RED);
        assert_eq!(img.get_pixel(8, 4).0, RED);
    }

    #[test]
    fn huge_lines_are_clipped_to_the_canvas() {
        let mut img = blank(10, 10);
        draw_line(&mut img, (-1e12, -1e12), (1e12, 1e12), RED);
        for i in 0..10 {
            assert_eq!(img.get_pixel(i, i).0, RED);
        }
        let mut img = blank(10, 10);
        draw_line(&mut img, (5.0, -1e12), (5.0, 1e12), RED);
        assert_eq!(painted(&img), 10);
        let mut img = blank(10, 10);
        draw_line(&mut img, (-1e12, 20.0), (1e12, 20.0), RED);
        assert_eq!(painted(&img), 0);
    }

    #[test]
    fn clipping_keeps_inside_segments_unchanged() {
        assert_eq!(
            clip_segment((1.0, 2.0), (8.0, 4.0), 10.0, 10.0),
            Some(((1.0, 2.0), (8.0, 4.0)))
        );
        assert_eq!(
            clip_segment((-10.0, 5.0), (30.0, 5.0), 10.0, 10.0),
            Some(((0.0, 5.0), (10.0, 5.0)))
        );
        assert_eq!(clip_segment((-5.0, -5.0), (-1.0, -1.0), 10.0, 10.0), None);
        assert_eq!(clip_segment((f64::INFINITY, 0.0), (1.0, 1.0), 10.0, 10.0), None);
    }

    #[test]
    fn labels_draw_axis_letters_only() {
        let mut img = blank(40, 20);
        draw_label(&mut img, "XYZ", (20.0, 10.0), 10.0, RED);
        assert!(painted(&img) > 0);
        let mut img = blank(40, 20);
        draw_label(&mut img, "?", (20.0, 10.0), 10.0, RED);
        assert_eq!(painted(&img), 0);
    }
}
