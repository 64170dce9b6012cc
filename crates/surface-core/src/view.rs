use serde::{Deserialize, Serialize};

/// Host slider ranges. The renderer accepts any value; hosts clamp.
pub const ELEVATION_RANGE: (f64, f64) = (0.0, 90.0);
pub const AZIMUTH_RANGE: (f64, f64) = (0.0, 360.0);
pub const ZOOM_RANGE: (f64, f64) = (5.0, 20.0);

/// Camera controls: angles in degrees, zoom as a camera distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Angle above the XY plane, default 30.
    pub elevation: f64,
    /// Rotation about Z measured from +X towards +Y, default 30.
    pub azimuth: f64,
    /// Camera distance, default 10. Larger values draw a smaller surface.
    pub zoom: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: 30.0,
            zoom: 10.0,
        }
    }
}

impl ViewParams {
    pub fn new(elevation: f64, azimuth: f64, zoom: f64) -> Self {
        Self { elevation, azimuth, zoom }
    }

    /// Copy with every parameter pulled into its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            elevation: self.elevation.clamp(ELEVATION_RANGE.0, ELEVATION_RANGE.1),
            azimuth: self.azimuth.clamp(AZIMUTH_RANGE.0, AZIMUTH_RANGE.1),
            zoom: self.zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1),
        }
    }

    pub fn is_within_ranges(&self) -> bool {
        self.clamped() == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider_defaults() {
        let v = ViewParams::default();
        assert_eq!((v.elevation, v.azimuth, v.zoom), (30.0, 30.0, 10.0));
        assert!(v.is_within_ranges());
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let v = ViewParams::new(120.0, -15.0, 2.0).clamped();
        assert_eq!(v, ViewParams::new(90.0, 0.0, 5.0));
        assert!(!ViewParams::new(45.0, 400.0, 10.0).is_within_ranges());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let v: ViewParams = serde_json::from_str(r#"{"azimuth": 120}"#).unwrap();
        assert_eq!(v, ViewParams::new(30.0, 120.0, 10.0));
    }
}
