//! Browser host boundary: the page owns the picker and sliders, this module
//! evaluates and renders on request.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use surface_core::{
    evaluate, render, Config, Field, Figure, RenderConfig, SamplingConfig, Selector, ViewParams,
};

/// One row of the picker.
#[derive(Debug, Serialize)]
struct CatalogRow {
    name: &'static str,
    slug: &'static str,
    field: Field,
    formula: &'static str,
}

/// Render request sent by the page as JSON. Missing fields take defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RenderRequest {
    surface: String,
    sampling: SamplingConfig,
    render: RenderConfig,
    view: ViewParams,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            surface: Selector::ParabolicSurface.name().to_string(),
            sampling: SamplingConfig::default(),
            render: RenderConfig::default(),
            view: ViewParams::default(),
        }
    }
}

/// Parse, validate, evaluate and render. Sliders are clamped here, as a host should.
fn figure_for(request_json: &str) -> surface_core::Result<Figure> {
    let req: RenderRequest = serde_json::from_str(request_json)?;
    let cfg = Config {
        sampling: req.sampling,
        render: req.render,
        view: req.view.clamped(),
    };
    cfg.validate()?;
    let surface = evaluate(&req.surface, &cfg.sampling);
    Ok(render(&surface, &cfg.view, &cfg.render))
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The surface catalog as an array of `{name, slug, field, formula}`.
#[wasm_bindgen]
pub fn catalog() -> Result<JsValue, JsValue> {
    let rows: Vec<CatalogRow> = Selector::all()
        .map(|s| CatalogRow {
            name: s.name(),
            slug: s.slug(),
            field: s.field(),
            formula: s.latex(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&rows).map_err(to_js)
}

/// LaTeX formula for a surface, or undefined for names outside the catalog.
#[wasm_bindgen]
pub fn formula(name: &str) -> Option<String> {
    surface_core::formula(name).map(str::to_string)
}

#[wasm_bindgen]
pub fn explanation(name: &str) -> String {
    surface_core::explanation(name)
}

/// Validated row-major heights of `name` over the default domain.
fn heights_for(name: &str, resolution: usize) -> surface_core::Result<Vec<f64>> {
    let sampling = SamplingConfig {
        resolution,
        ..SamplingConfig::default()
    };
    sampling.validate()?;
    Ok(evaluate(name, &sampling).z.data)
}

/// Row-major height field of `name` over the default domain.
#[wasm_bindgen]
pub fn evaluate_z(name: &str, resolution: usize) -> Result<js_sys::Float64Array, JsValue> {
    let heights = heights_for(name, resolution).map_err(to_js)?;
    Ok(js_sys::Float64Array::from(heights.as_slice()))
}

/// Render a request to PNG bytes.
#[wasm_bindgen]
pub fn render_png(request_json: &str) -> Result<js_sys::Uint8Array, JsValue> {
    let bytes = figure_for(request_json)
        .and_then(|fig| fig.to_png_bytes())
        .map_err(to_js)?;
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

/// Render a request to an SVG document.
#[wasm_bindgen]
pub fn render_svg(request_json: &str) -> Result<String, JsValue> {
    figure_for(request_json).map(|fig| fig.to_svg()).map_err(to_js)
}
