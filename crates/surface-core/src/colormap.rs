use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;

/// Named colour scales. All but `Gray` are perceptually uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    #[serde(alias = "grey")]
    Gray,
}

// ── Anchor tables (nine evenly spaced samples each) ──────────────────────────

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135],
    [75, 3, 161],
    [125, 3, 168],
    [168, 34, 150],
    [203, 70, 121],
    [229, 107, 93],
    [248, 148, 65],
    [253, 195, 40],
    [240, 249, 33],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const CIVIDIS: [[u8; 3]; 9] = [
    [0, 34, 78],
    [35, 62, 108],
    [76, 84, 108],
    [106, 107, 112],
    [131, 130, 121],
    [161, 154, 117],
    [193, 179, 104],
    [226, 206, 82],
    [254, 232, 56],
];

const GRAY: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

impl Colormap {
    pub const ALL: [Colormap; 6] = [
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Inferno,
        Colormap::Magma,
        Colormap::Cividis,
        Colormap::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Magma => "magma",
            Colormap::Cividis => "cividis",
            Colormap::Gray => "gray",
        }
    }

    fn anchors(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Inferno => &INFERNO,
            Colormap::Magma => &MAGMA,
            Colormap::Cividis => &CIVIDIS,
            Colormap::Gray => &GRAY,
        }
    }

    /// Colour at `t` in [0, 1]; out-of-range and NaN inputs are clamped to the ends.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let c = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let x = t * (c.len() - 1) as f64;
        let i = x.floor() as usize;
        if i >= c.len() - 1 {
            return c[c.len() - 1];
        }
        let f = x - i as f64;
        let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
        [
            lerp(c[i][0], c[i + 1][0]),
            lerp(c[i][1], c[i + 1][1]),
            lerp(c[i][2], c[i + 1][2]),
        ]
    }

    /// Colour of `value` on a scale spanning `[lo, hi]`.
    /// A degenerate range maps everything to the low end.
    pub fn map(self, value: f64, lo: f64, hi: f64) -> [u8; 3] {
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.0 };
        self.sample(t)
    }

    fn supported() -> String {
        Self::ALL.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Colormap {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("grey").then_some(Colormap::Gray))
            .ok_or_else(|| SurfaceError::UnknownColormap {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
