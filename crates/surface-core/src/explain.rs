use crate::catalog::Selector;

/// The LaTeX formula shown next to a surface, if the name is in the catalog.
pub fn formula(name: &str) -> Option<&'static str> {
    Selector::parse(name).map(Selector::latex)
}

/// Explanation block for a surface: a short paragraph naming it, then its
/// formula on its own line. Slugs are shown by their display name; names
/// outside the catalog appear as typed and get the paragraph only.
pub fn explanation(name: &str) -> String {
    let selector = Selector::parse(name);
    let name: &str = selector.map_or(name, |s| s.name());
    let mut text = format!(
        "This application visualizes a 3D surface plot of the {name}. These functions are \
         commonly used in various fields such as physics, economics, biology, chemistry, and \
         mathematics to describe different phenomena.\n\n\
         The equation for the surface is given by:\n"
    );
    if let Some(latex) = selector.map(Selector::latex) {
        text.push('\n');
        text.push_str(latex);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas_are_verbatim() {
        assert_eq!(formula("Parabolic Surface"), Some(r"Z = X^2 + Y^2"));
        assert_eq!(
            formula("Gaussian Beam (Physics)"),
            Some(r"Z = e^{-X^2 - Y^2} \cdot \cos(10 \cdot \sqrt{X^2 + Y^2})")
        );
        assert_eq!(
            formula("Population Growth (Biology)"),
            Some(r"Z = \frac{1}{1 + \exp(-X)} \cdot \frac{1}{1 + \exp(-Y)}")
        );
        assert_eq!(formula("Not A Real Surface"), None);
    }

    #[test]
    fn explanation_names_surface_and_ends_with_formula() {
        let text = explanation("Elliptic Cone");
        assert!(text.contains("surface plot of the Elliptic Cone."));
        assert!(text.trim_end().ends_with(r"Z = \sqrt{X^2 + Y^2}"));
    }

    #[test]
    fn explanation_shows_display_name_for_slugs() {
        let text = explanation("gaussian-beam");
        assert!(text.contains("surface plot of the Gaussian Beam (Physics)."));
        assert!(!text.contains("gaussian-beam"));
        assert_eq!(text, explanation("Gaussian Beam (Physics)"));
    }

    #[test]
    fn explanation_for_unknown_surface_has_no_formula() {
        let text = explanation("Mystery");
        assert!(text.contains("the Mystery."));
        assert!(!text.contains("Z ="));
    }

    #[test]
    fn every_selector_has_a_formula_for_its_height() {
        for sel in Selector::all() {
            let f = formula(sel.name()).unwrap();
            assert!(f.starts_with("Z = "), "{sel}: {f}");
            assert_eq!(f, sel.latex());
        }
    }
}
