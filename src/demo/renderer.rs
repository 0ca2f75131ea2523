//! Frame renderers for the demo
//!
//! Renderers receive the finished canvas once per frame. They follow a
//! start / render / stop lifecycle; rendering before `start` is an error.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::demo::canvas::{Canvas, Color};
use crate::error::{ConfigError, DemoError};

/// Trait that all frame renderers implement.
pub trait FrameRenderer {
    fn start(&mut self) -> Result<(), DemoError>;
    fn render_frame(&mut self, frame: u64, canvas: &Canvas) -> Result<(), DemoError>;
    fn stop(&mut self);
    fn name(&self) -> &'static str;
}

/// Kinds of renderer backends available to the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Png,
    Terminal,
}

impl RendererKind {
    pub fn all() -> Vec<Self> {
        vec![RendererKind::Png, RendererKind::Terminal]
    }

    pub fn create(self, config: &DemoConfig) -> Box<dyn FrameRenderer> {
        match self {
            RendererKind::Png => Box::new(PngSequenceRenderer::new(
                config.output_dir.clone(),
                config.png_every,
            )),
            RendererKind::Terminal => Box::new(TerminalRenderer::stdout(
                config.terminal_columns,
                config.terminal_rows,
                config.background,
            )),
        }
    }
}

impl FromStr for RendererKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(RendererKind::Png),
            "terminal" | "term" => Ok(RendererKind::Terminal),
            other => Err(ConfigError::invalid(
                "renderer",
                format!("unknown renderer '{}', expected png or terminal", other),
            )),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::Png => f.write_str("png"),
            RendererKind::Terminal => f.write_str("terminal"),
        }
    }
}

/// Writes `frame_NNNNN.png` files into a directory.
pub struct PngSequenceRenderer {
    output_dir: PathBuf,
    every: u32,
    running: bool,
    frames_written: u64,
}

impl PngSequenceRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, every: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            every: every.max(1),
            running: false,
            frames_written: 0,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn frame_path(&self, frame: u64) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame))
    }
}

impl FrameRenderer for PngSequenceRenderer {
    fn start(&mut self) -> Result<(), DemoError> {
        std::fs::create_dir_all(&self.output_dir)?;
        self.running = true;
        info!(dir = %self.output_dir.display(), every = self.every, "png renderer started");
        Ok(())
    }

    fn render_frame(&mut self, frame: u64, canvas: &Canvas) -> Result<(), DemoError> {
        if !self.running {
            return Err(DemoError::NotStarted(self.name()));
        }
        if frame % u64::from(self.every) != 0 {
            return Ok(());
        }
        let path = self.frame_path(frame);
        canvas.save_png(&path)?;
        self.frames_written += 1;
        debug!(path = %path.display(), "frame written");
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        info!(frames_written = self.frames_written, "png renderer stopped");
    }

    fn name(&self) -> &'static str {
        "png"
    }
}

/// Draws each frame as ASCII art into any writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: u32,
    rows: u32,
    background: Color,
    /// Move the cursor home before each frame so frames overwrite each other
    ansi: bool,
    running: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, columns: u32, rows: u32, background: Color) -> Self {
        Self {
            out,
            columns,
            rows,
            background,
            ansi: false,
            running: false,
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(columns: u32, rows: u32, background: Color) -> Self {
        Self::new(io::stdout(), columns, rows, background).with_ansi(true)
    }
}

impl<W: Write> FrameRenderer for TerminalRenderer<W> {
    fn start(&mut self) -> Result<(), DemoError> {
        if self.ansi {
            // clear screen
            self.out.write_all(b"\x1b[2J")?;
        }
        self.running = true;
        info!(columns = self.columns, rows = self.rows, "terminal renderer started");
        Ok(())
    }

    fn render_frame(&mut self, frame: u64, canvas: &Canvas) -> Result<(), DemoError> {
        if !self.running {
            return Err(DemoError::NotStarted(self.name()));
        }
        if self.ansi {
            self.out.write_all(b"\x1b[H")?;
        }
        writeln!(self.out, "frame {}", frame)?;
        self.out
            .write_all(canvas.to_ascii(self.columns, self.rows, self.background).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        info!("terminal renderer stopped");
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}
