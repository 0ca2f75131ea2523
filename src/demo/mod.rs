//! linea::demo - the rotating-line example
//!
//! Public submodules:
//! - line (RotatingLine)
//! - canvas (Canvas, Color)
//! - renderer (FrameRenderer, PngSequenceRenderer, TerminalRenderer)
//! - game_loop (GameLoop, LoopStats)

pub mod canvas;
pub mod game_loop;
pub mod line;
pub mod renderer;

pub use canvas::{Canvas, Color};
pub use game_loop::{GameLoop, LoopStats, MAX_STEPS_PER_TICK};
pub use line::RotatingLine;
pub use renderer::{FrameRenderer, PngSequenceRenderer, RendererKind, TerminalRenderer};
