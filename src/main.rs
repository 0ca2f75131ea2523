//! linea-demo: spin a line in a fixed-timestep game loop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linea::demo::{GameLoop, RendererKind};
use linea::DemoConfig;

#[derive(Debug, Parser)]
#[command(name = "linea-demo", version, about = "Rotating line rendered by a fixed-timestep game loop")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides in key=value,key=value form
    #[arg(short, long)]
    set: Option<String>,

    #[arg(long)]
    frames: Option<u64>,

    #[arg(long)]
    fps: Option<u32>,

    /// png or terminal
    #[arg(short, long)]
    renderer: Option<RendererKind>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Do not sleep between frames; every frame advances exactly 1/fps seconds
    #[arg(long)]
    simulate: bool,

    /// Used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<DemoConfig> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    if let Some(parameters) = &args.set {
        config
            .apply_parameters(parameters)
            .context("applying --set overrides")?;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(renderer) = args.renderer {
        config.renderer = renderer;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }

    config.validate().context("invalid demo configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    // Logs go to stderr so the terminal renderer owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    info!(renderer = %config.renderer, frames = config.frames, fps = config.fps, "starting demo");

    let mut game = GameLoop::new(&config)?;
    let mut renderer = config.renderer.create(&config);

    let stats = if args.simulate {
        game.run_simulated(renderer.as_mut())
    } else {
        game.run(renderer.as_mut())
    }
    .context("running game loop")?;

    info!(
        frames = stats.frames,
        updates = stats.updates,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        final_angle_degrees = game.line().angle().to_degrees(),
        "demo finished"
    );
    Ok(())
}
