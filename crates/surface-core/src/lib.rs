//! Catalog of closed-form surfaces, grid evaluation and a small 3D surface
//! rasterizer. Hosts (CLI, browser) live in their own workspace members.

pub mod catalog;
pub mod colormap;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod explain;
pub mod figure;
pub mod grid;
pub mod render;
pub mod view;

pub use catalog::{Field, Selector, CATALOG};
pub use colormap::Colormap;
pub use config::{Config, RenderConfig, SamplingConfig, MAX_RESOLUTION};
pub use error::{Result, SurfaceError};
pub use evaluator::{evaluate, evaluate_selector, Surface, SurfaceStats};
pub use explain::{explanation, formula};
pub use figure::{Figure, ImageFormat};
pub use grid::Grid;
pub use render::render;
pub use view::ViewParams;
