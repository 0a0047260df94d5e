//! Polydraw headless driver.
//!
//! Replays a script of input events against a canvas and renders the final
//! frame as SVG.

use clap::{Args, Parser};
use kurbo::Size;
use polydraw_core::canvas::Canvas;
use polydraw_core::config::CanvasConfig;
use polydraw_core::input::InputEvent;
use polydraw_render::{RenderContext, Renderer, RendererError, SvgRenderer};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Command line options.
#[derive(Debug, Parser)]
#[command(name = "polydraw")]
#[command(about = "Replay a script of input events and print the canvas as SVG")]
pub struct Options {
    /// Canvas configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Event script; stdin when absent or "-"
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderSettings,
}

/// How the final frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct RenderSettings {
    /// Outline width for shapes
    #[arg(long, default_value_t = 1.0)]
    pub stroke_width: f64,

    /// Radius of pending point markers
    #[arg(long, default_value_t = 3.0)]
    pub marker_radius: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            marker_radius: 3.0,
        }
    }
}

/// Load the canvas configuration, falling back to defaults without a path.
pub fn load_config(path: Option<&Path>) -> AppResult<CanvasConfig> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };
    let file = File::open(path)?;
    let config = serde_json::from_reader(BufReader::new(file))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Read an event script: a JSON array of events.
pub fn load_script(reader: impl Read) -> AppResult<Vec<InputEvent>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Feed events to the canvas in order.
///
/// Rejected events are logged and skipped; the canvas stays usable.
pub fn replay(canvas: &mut Canvas, events: Vec<InputEvent>) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for (index, event) in events.into_iter().enumerate() {
        match canvas.handle_event(event) {
            Ok(redraw) => {
                log::debug!("Event {} applied (redraw: {})", index, redraw);
                summary.applied += 1;
            }
            Err(err) => {
                log::warn!("Event {} rejected: {}", index, err);
                summary.rejected += 1;
            }
        }
    }
    summary
}

/// Replay `events` on a fresh canvas and return the final frame as SVG.
pub fn render_script(
    config: CanvasConfig,
    events: Vec<InputEvent>,
    settings: RenderSettings,
) -> AppResult<String> {
    let size = Size::new(f64::from(config.canvas_width), f64::from(config.canvas_height));
    let mut canvas = Canvas::with_config(config);
    let summary = replay(&mut canvas, events);
    log::info!(
        "Replayed {} event(s), {} rejected; {} shape(s) on canvas",
        summary.applied + summary.rejected,
        summary.rejected,
        canvas.document().len()
    );

    let frame = canvas.render_frame();
    let ctx = RenderContext::new(&frame, size)
        .with_stroke_width(settings.stroke_width)
        .with_marker_radius(settings.marker_radius);
    let mut renderer = SvgRenderer::new();
    renderer.build_scene(&ctx)?;
    Ok(renderer.into_svg())
}

/// Run the driver with command line arguments, program name first.
pub fn run<I, T>(args: I) -> AppResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = Options::try_parse_from(args)?;
    let config = load_config(options.config.as_deref())?;
    let script = options.script.as_deref().filter(|path| *path != Path::new("-"));
    let events = match script {
        Some(path) => load_script(BufReader::new(File::open(path)?))?,
        None => load_script(io::stdin().lock())?,
    };
    render_script(config, events, options.render)
}
