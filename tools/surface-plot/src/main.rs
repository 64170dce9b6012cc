//! Command-line host: pick a surface and a view, write the plot to PNG or SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use surface_core::{evaluate, explanation, render, Colormap, Config, Selector};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "surface-plot", about = "Plot a catalog surface in 3D")]
struct Args {
    /// Surface display name or slug (see --list).
    #[arg(short, long, default_value = "Parabolic Surface")]
    surface: String,

    /// Camera elevation in degrees, 0-90.
    #[arg(long, allow_hyphen_values = true)]
    elevation: Option<f64>,

    /// Camera azimuth in degrees, 0-360.
    #[arg(long, allow_hyphen_values = true)]
    azimuth: Option<f64>,

    /// Camera distance, 5-20. Larger is further away.
    #[arg(long)]
    zoom: Option<f64>,

    /// Samples per axis.
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Lower bound of the sampled interval (both axes).
    #[arg(long, allow_hyphen_values = true)]
    domain_min: Option<f64>,

    /// Upper bound of the sampled interval (both axes).
    #[arg(long, allow_hyphen_values = true)]
    domain_max: Option<f64>,

    /// Colour scale: viridis, plasma, inferno, magma, cividis, gray.
    #[arg(long)]
    colormap: Option<String>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// JSON config file; flags given on the command line take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image (.png or .svg).
    #[arg(short, long, default_value = "surface.png")]
    output: PathBuf,

    /// Print the surface catalog and exit.
    #[arg(long)]
    list: bool,

    /// Print the explanation and formula for the chosen surface.
    #[arg(long)]
    explain: bool,

    /// Print summary statistics of the height field as JSON.
    #[arg(long)]
    stats: bool,
}

// ── Config resolution ─────────────────────────────────────────────────────────

/// File config (or defaults), overridden by flags, view clamped to slider ranges.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(n) = args.resolution {
        cfg.sampling.resolution = n;
    }
    if let Some(lo) = args.domain_min {
        cfg.sampling.domain[0] = lo;
    }
    if let Some(hi) = args.domain_max {
        cfg.sampling.domain[1] = hi;
    }
    if let Some(name) = &args.colormap {
        cfg.render.colormap = name.parse::<Colormap>()?;
    }
    if let Some(w) = args.width {
        cfg.render.width = w;
    }
    if let Some(h) = args.height {
        cfg.render.height = h;
    }
    if let Some(e) = args.elevation {
        cfg.view.elevation = e;
    }
    if let Some(a) = args.azimuth {
        cfg.view.azimuth = a;
    }
    if let Some(z) = args.zoom {
        cfg.view.zoom = z;
    }

    if !cfg.view.is_within_ranges() {
        let clamped = cfg.view.clamped();
        warn!("view {:?} outside slider ranges, clamped to {:?}", cfg.view, clamped);
        cfg.view = clamped;
    }

    cfg.validate().context("Invalid settings")?;
    Ok(cfg)
}

fn print_catalog() {
    for sel in Selector::all() {
        println!("{:<22} {:<46} {}", sel.slug(), sel.name(), sel.latex());
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        print_catalog();
        return Ok(());
    }

    let cfg = resolve_config(&args)?;

    let name = Selector::parse(&args.surface).map_or(args.surface.as_str(), |s| s.name());

    let n = cfg.sampling.resolution;
    let [lo, hi] = cfg.sampling.domain;
    info!("Evaluating {name} ({n}x{n} over [{lo}, {hi}])");
    let surface = evaluate(&args.surface, &cfg.sampling);

    if args.explain {
        println!("{}", explanation(&args.surface));
    }
    if args.stats {
        println!("{}", serde_json::to_string_pretty(&surface.stats())?);
    }

    info!(
        "Rendering elev={} azim={} zoom={} ({})",
        cfg.view.elevation, cfg.view.azimuth, cfg.view.zoom, cfg.render.colormap
    );
    let figure = render(&surface, &cfg.view, &cfg.render);
    figure
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
