//! The closed catalog of plottable surfaces.
//!
//! Each surface is one row in [`CATALOG`]: its display name, the LaTeX shown
//! next to the plot, and the point function the evaluator maps over the grid.
//! Adding a surface means adding a variant and a row, nothing else.

use serde::{Deserialize, Serialize};

/// Discipline a surface is usually associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Mathematics,
    Physics,
    Economics,
    Biology,
    Chemistry,
}

/// One of the twelve surfaces. Discriminants index into [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    ParabolicSurface,
    HyperbolicParaboloid,
    EllipticCone,
    SineWaveSurface,
    ExponentialDecay,
    LogarithmicSpiral,
    CircularWave,
    WaveInterference,
    CobbDouglas,
    GaussianBeam,
    PopulationGrowth,
    PotentialEnergy,
}

pub struct CatalogEntry {
    pub selector: Selector,
    /// Name shown in the host's picker; also the canonical parse key.
    pub name: &'static str,
    pub slug: &'static str,
    pub field: Field,
    pub latex: &'static str,
    pub func: fn(f64, f64) -> f64,
}

// Squares are written as products and `^0.5` as sqrt so results match the
// array-language formulas bit for bit; sqrt of a negative is NaN.

fn parabolic(x: f64, y: f64) -> f64 {
    x * x + y * y
}

fn hyperbolic(x: f64, y: f64) -> f64 {
    x * x - y * y
}

fn cone(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

fn sine_wave(x: f64, y: f64) -> f64 {
    x.sin() + y.sin()
}

fn exp_decay(x: f64, y: f64) -> f64 {
    (-(x * x + y * y)).exp()
}

fn log_spiral(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt().ln()
}

fn circular_wave(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt().sin()
}

fn interference(x: f64, y: f64) -> f64 {
    x.sin() * y.cos()
}

fn cobb_douglas(x: f64, y: f64) -> f64 {
    x.sqrt() * y.sqrt()
}

fn gaussian_beam(x: f64, y: f64) -> f64 {
    (-(x * x) - y * y).exp() * (10.0 * (x * x + y * y).sqrt()).cos()
}

fn population(x: f64, y: f64) -> f64 {
    // Left to right: 1 / (1 + e^-x) * 1 / (1 + e^-y)
    1.0 / (1.0 + (-x).exp()) * 1.0 / (1.0 + (-y).exp())
}

fn potential(x: f64, y: f64) -> f64 {
    x.powf(4.0) - x * x + y.powf(4.0) - y * y
}

pub static CATALOG: [CatalogEntry; 12] = [
    CatalogEntry {
        selector: Selector::ParabolicSurface,
        name: "Parabolic Surface",
        slug: "parabolic-surface",
        field: Field::Mathematics,
        latex: r"Z = X^2 + Y^2",
        func: parabolic,
    },
    CatalogEntry {
        selector: Selector::HyperbolicParaboloid,
        name: "Hyperbolic Paraboloid",
        slug: "hyperbolic-paraboloid",
        field: Field::Mathematics,
        latex: r"Z = X^2 - Y^2",
        func: hyperbolic,
    },
    CatalogEntry {
        selector: Selector::EllipticCone,
        name: "Elliptic Cone",
        slug: "elliptic-cone",
        field: Field::Mathematics,
        latex: r"Z = \sqrt{X^2 + Y^2}",
        func: cone,
    },
    CatalogEntry {
        selector: Selector::SineWaveSurface,
        name: "Sine Wave Surface",
        slug: "sine-wave-surface",
        field: Field::Mathematics,
        latex: r"Z = \sin(X) + \sin(Y)",
        func: sine_wave,
    },
    CatalogEntry {
        selector: Selector::ExponentialDecay,
        name: "Exponential Decay",
        slug: "exponential-decay",
        field: Field::Mathematics,
        latex: r"Z = e^{-(X^2 + Y^2)}",
        func: exp_decay,
    },
    CatalogEntry {
        selector: Selector::LogarithmicSpiral,
        name: "Logarithmic Spiral",
        slug: "logarithmic-spiral",
        field: Field::Mathematics,
        latex: r"Z = \log(\sqrt{X^2 + Y^2})",
        func: log_spiral,
    },
    CatalogEntry {
        selector: Selector::CircularWave,
        name: "Circular Wave",
        slug: "circular-wave",
        field: Field::Mathematics,
        latex: r"Z = \sin(\sqrt{X^2 + Y^2})",
        func: circular_wave,
    },
    CatalogEntry {
        selector: Selector::WaveInterference,
        name: "Wave Interference (Physics)",
        slug: "wave-interference",
        field: Field::Physics,
        latex: r"Z = \sin(X) \cdot \cos(Y)",
        func: interference,
    },
    CatalogEntry {
        selector: Selector::CobbDouglas,
        name: "Cobb-Douglas Production Function (Economics)",
        slug: "cobb-douglas",
        field: Field::Economics,
        latex: r"Z = X^{0.5} \cdot Y^{0.5}",
        func: cobb_douglas,
    },
    CatalogEntry {
        selector: Selector::GaussianBeam,
        name: "Gaussian Beam (Physics)",
        slug: "gaussian-beam",
        field: Field::Physics,
        latex: r"Z = e^{-X^2 - Y^2} \cdot \cos(10 \cdot \sqrt{X^2 + Y^2})",
        func: gaussian_beam,
    },
    CatalogEntry {
        selector: Selector::PopulationGrowth,
        name: "Population Growth (Biology)",
        slug: "population-growth",
        field: Field::Biology,
        latex: r"Z = \frac{1}{1 + \exp(-X)} \cdot \frac{1}{1 + \exp(-Y)}",
        func: population,
    },
    CatalogEntry {
        selector: Selector::PotentialEnergy,
        name: "Potential Energy Surface (Chemistry)",
        slug: "potential-energy",
        field: Field::Chemistry,
        latex: r"Z = X^4 - X^2 + Y^4 - Y^2",
        func: potential,
    },
];

impl Selector {
    pub fn all() -> impl Iterator<Item = Selector> {
        CATALOG.iter().map(|e| e.selector)
    }

    #[inline]
    pub fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn slug(self) -> &'static str {
        self.entry().slug
    }

    pub fn field(self) -> Field {
        self.entry().field
    }

    pub fn latex(self) -> &'static str {
        self.entry().latex
    }

    /// Height of this surface at a single point.
    #[inline]
    pub fn eval(self, x: f64, y: f64) -> f64 {
        (self.entry().func)(x, y)
    }

    /// Exact match on the display name.
    pub fn from_name(name: &str) -> Option<Selector> {
        CATALOG.iter().find(|e| e.name == name).map(|e| e.selector)
    }

    /// Display name, or slug compared case-insensitively.
    pub fn parse(s: &str) -> Option<Selector> {
        let s = s.trim();
        Self::from_name(s).or_else(|| {
            CATALOG
                .iter()
                .find(|e| e.slug.eq_ignore_ascii_case(s))
                .map(|e| e.selector)
        })
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn catalog_rows_match_discriminants() {
        for (i, e) in CATALOG.iter().enumerate() {
            assert_eq!(e.selector as usize, i, "{} is out of order", e.name);
        }
    }

    #[test]
    fn names_and_slugs_round_trip_and_are_unique() {
        let mut names = HashSet::new();
        let mut slugs = HashSet::new();
        for sel in Selector::all() {
            assert!(names.insert(sel.name()));
            assert!(slugs.insert(sel.slug()));
            assert_eq!(Selector::from_name(sel.name()), Some(sel));
            assert_eq!(Selector::parse(sel.slug()), Some(sel));
            assert_eq!(Selector::parse(&sel.slug().to_uppercase()), Some(sel));
        }
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(Selector::parse("Not A Real Surface"), None);
        assert_eq!(Selector::from_name("parabolic surface"), None);
    }

    #[test]
    fn point_values() {
        assert_eq!(Selector::ParabolicSurface.eval(0.0, 0.0), 0.0);
        assert_eq!(Selector::ParabolicSurface.eval(5.0, 5.0), 50.0);
        assert_eq!(Selector::WaveInterference.eval(0.0, 0.0), 0.0);
        assert_eq!(Selector::GaussianBeam.eval(0.0, 0.0), 1.0);
        assert_eq!(Selector::PopulationGrowth.eval(0.0, 0.0), 0.25);
        assert_eq!(Selector::PotentialEnergy.eval(1.0, -1.0), 0.0);
        assert_eq!(Selector::EllipticCone.eval(3.0, 4.0), 5.0);
        assert_eq!(Selector::CobbDouglas.eval(4.0, 9.0), 6.0);
        assert_eq!(Selector::ExponentialDecay.eval(1.0, 0.0), (-1.0f64).exp());
        assert_eq!(Selector::ExponentialDecay.eval(0.0, 0.0), 1.0);
        assert_eq!(Selector::CircularWave.eval(3.0, 4.0), 5f64.sin());
        assert_eq!(
            Selector::SineWaveSurface.eval(1.5, -2.25),
            1.5f64.sin() + (-2.25f64).sin()
        );
        assert_eq!(Selector::HyperbolicParaboloid.eval(3.0, 2.0), 5.0);
    }

    #[test]
    fn population_growth_divides_left_to_right() {
        let (x, y) = (1.0f64, 2.0f64);
        let left_to_right = ((1.0 / (1.0 + (-x).exp())) * 1.0) / (1.0 + (-y).exp());
        assert_eq!(Selector::PopulationGrowth.eval(x, y), left_to_right);
        let logistic = |v: f64| 1.0 / (1.0 + (-v).exp());
        assert_abs_diff_eq!(
            Selector::PopulationGrowth.eval(x, y),
            logistic(x) * logistic(y),
            epsilon = 1e-15
        );
    }

    #[test]
    fn non_finite_results_propagate() {
        assert_eq!(Selector::LogarithmicSpiral.eval(0.0, 0.0), f64::NEG_INFINITY);
        assert!(Selector::CobbDouglas.eval(-1.0, 4.0).is_nan());
    }

    #[test]
    fn fields_follow_display_names() {
        assert_eq!(Selector::GaussianBeam.field(), Field::Physics);
        assert_eq!(Selector::CobbDouglas.field(), Field::Economics);
        assert_eq!(Selector::PopulationGrowth.field(), Field::Biology);
        assert_eq!(Selector::PotentialEnergy.field(), Field::Chemistry);
        assert_eq!(Selector::CircularWave.field(), Field::Mathematics);
    }
}
