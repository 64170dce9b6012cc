//! Orthographic camera on a sphere around the plot box.

/// Half-height of the normalized plot box; X and Y span [-1, 1].
pub const Z_SCALE: f64 = 0.75;

/// Camera distance at which the box fills the canvas.
pub const DEFAULT_DISTANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(self, other: Point3, t: f64) -> Point3 {
        Point3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

/// Camera angles in radians, with precomputed sines and cosines.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    sa: f64,
    ca: f64,
    se: f64,
    ce: f64,
}

impl Camera {
    /// Azimuth is measured from +X towards +Y, elevation above the XY plane.
    pub fn from_degrees(elevation: f64, azimuth: f64) -> Self {
        let (sa, ca) = azimuth.to_radians().sin_cos();
        let (se, ce) = elevation.to_radians().sin_cos();
        Self { sa, ca, se, ce }
    }

    /// Screen-plane coordinates, +y up.
    pub fn project(&self, p: Point3) -> (f64, f64) {
        // Right: (-sin a, cos a, 0). Up: (-cos a sin e, -sin a sin e, cos e).
        let sx = -p.x * self.sa + p.y * self.ca;
        let sy = -p.x * self.ca * self.se - p.y * self.sa * self.se + p.z * self.ce;
        (sx, sy)
    }

    /// Distance along the viewing direction; larger is further away.
    pub fn depth(&self, p: Point3) -> f64 {
        -(p.x * self.ce * self.ca + p.y * self.ce * self.sa + p.z * self.se)
    }
}

/// The eight corners of the normalized plot box.
pub fn box_corners() -> [Point3; 8] {
    let mut out = [Point3::new(0.0, 0.0, 0.0); 8];
    for (i, corner) in out.iter_mut().enumerate() {
        let x = if i & 1 == 0 { -1.0 } else { 1.0 };
        let y = if i & 2 == 0 { -1.0 } else { 1.0 };
        let z = if i & 4 == 0 { -Z_SCALE } else { Z_SCALE };
        *corner = Point3::new(x, y, z);
    }
    out
}

/// Half the box diagonal: the projected box never extends further from the
/// centre than this, whatever the angles.
pub fn box_radius() -> f64 {
    (2.0 + Z_SCALE * Z_SCALE).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn top_down_view_drops_z() {
        let cam = Camera::from_degrees(90.0, 0.0);
        let (sx, sy) = cam.project(Point3::new(0.3, 0.4, 0.9));
        assert_abs_diff_eq!(sx, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(sy, -0.3, epsilon = 1e-12);
    }

    #[test]
    fn side_view_shows_z_as_height() {
        let cam = Camera::from_degrees(0.0, 0.0);
        let (_, sy) = cam.project(Point3::new(0.0, 0.0, 0.5));
        assert_abs_diff_eq!(sy, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn points_towards_the_camera_are_nearer() {
        let cam = Camera::from_degrees(30.0, 30.0);
        let toward = Point3::new(1.0, 1.0, Z_SCALE);
        let away = Point3::new(-1.0, -1.0, -Z_SCALE);
        assert!(cam.depth(toward) < cam.depth(away));
    }

    #[test]
    fn projected_corners_stay_within_radius() {
        for (e, a) in [(0.0, 0.0), (30.0, 30.0), (90.0, 270.0), (45.0, 123.0)] {
            let cam = Camera::from_degrees(e, a);
            for p in box_corners() {
                let (sx, sy) = cam.project(p);
                assert!((sx * sx + sy * sy).sqrt() <= box_radius() + 1e-9);
            }
        }
    }
}
