//! Evaluation and rendering settings, loadable from JSON.
//! Every field has a default, so `{}` is a valid config file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colormap::Colormap;
use crate::error::{Result, SurfaceError};
use crate::view::ViewParams;

pub const DEFAULT_RESOLUTION: usize = 200;
pub const DEFAULT_DOMAIN: [f64; 2] = [-5.0, 5.0];
/// Upper bound on samples per axis; each grid holds `resolution²` values.
pub const MAX_RESOLUTION: usize = 2048;

/// How the grid is sampled. The same interval is used on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Sampling interval `[lo, hi]`.
    pub domain: [f64; 2],
    /// Samples per axis.
    pub resolution: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SamplingConfig {
    pub fn new(resolution: usize, domain: [f64; 2]) -> Self {
        Self { domain, resolution }
    }

    pub fn validate(&self) -> Result<()> {
        let [lo, hi] = self.domain;
        if !lo.is_finite() || !hi.is_finite() {
            return Err(SurfaceError::InvalidConfig(format!(
                "domain bounds must be finite, got [{lo}, {hi}]"
            )));
        }
        if lo >= hi {
            return Err(SurfaceError::InvalidConfig(format!(
                "domain must satisfy lo < hi, got [{lo}, {hi}]"
            )));
        }
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(SurfaceError::InvalidConfig(format!(
                "resolution must be in 2..={MAX_RESOLUTION}, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

/// Canvas and colouring options for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub colormap: Colormap,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Maximum number of sampled rows drawn as facet edges.
    pub rcount: usize,
    /// Maximum number of sampled columns drawn as facet edges.
    pub ccount: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colormap: Colormap::Viridis,
            width: 800,
            height: 600,
            rcount: 50,
            ccount: 50,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SurfaceError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.rcount < 2 || self.ccount < 2 {
            return Err(SurfaceError::InvalidConfig(format!(
                "rcount and ccount must be at least 2, got {} and {}",
                self.rcount, self.ccount
            )));
        }
        Ok(())
    }
}

/// Everything a host needs for one evaluate-then-render cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sampling: SamplingConfig,
    pub render: RenderConfig,
    pub view: ViewParams,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.sampling.validate()?;
        self.render.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = Config::from_json_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.sampling.resolution, 200);
        assert_eq!(cfg.sampling.domain, [-5.0, 5.0]);
        assert_eq!(cfg.render.colormap, Colormap::Viridis);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let cfg = Config::from_json_str(
            r#"{"sampling": {"resolution": 51}, "render": {"colormap": "inferno"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.sampling.resolution, 51);
        assert_eq!(cfg.sampling.domain, DEFAULT_DOMAIN);
        assert_eq!(cfg.render.colormap, Colormap::Inferno);
        assert_eq!(cfg.render.width, 800);
    }

    #[test]
    fn rejects_bad_sampling() {
        assert!(SamplingConfig::new(1, DEFAULT_DOMAIN).validate().is_err());
        assert!(SamplingConfig::new(10, [3.0, 3.0]).validate().is_err());
        assert!(SamplingConfig::new(10, [f64::NAN, 1.0]).validate().is_err());
        assert!(SamplingConfig::new(2, [0.0, 1.0]).validate().is_ok());
    }

    #[test]
    fn resolution_has_an_upper_bound() {
        assert!(SamplingConfig::new(MAX_RESOLUTION, DEFAULT_DOMAIN).validate().is_ok());
        assert!(SamplingConfig::new(MAX_RESOLUTION + 1, DEFAULT_DOMAIN).validate().is_err());
        assert!(SamplingConfig::new(65_536, DEFAULT_DOMAIN).validate().is_err());
        assert!(matches!(
            Config::from_json_str(r#"{"sampling": {"resolution": 100000}}"#),
            Err(SurfaceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_bad_render_settings() {
        let cfg = RenderConfig { width: 0, ..RenderConfig::default() };
        assert!(matches!(cfg.validate(), Err(SurfaceError::InvalidConfig(_))));
        let cfg = RenderConfig { rcount: 1, ..RenderConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_colormap_in_json_is_an_error() {
        assert!(matches!(
            Config::from_json_str(r#"{"render": {"colormap": "jet"}}"#),
            Err(SurfaceError::Json(_))
        ));
    }
}
