//! Fixed-timestep game loop driving the rotating line.
//!
//! Simulation and rendering are decoupled: elapsed time is accumulated and
//! the line is advanced in constant `timestep` slices, then one frame is
//! drawn. A slow frame therefore produces several updates, never a larger
//! `dt`.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::DemoConfig;
use crate::demo::canvas::{Canvas, Color};
use crate::demo::line::RotatingLine;
use crate::demo::renderer::FrameRenderer;
use crate::error::DemoError;

/// Upper bound on updates per tick. Backlog beyond this is dropped so a
/// stalled process does not spend its next frames catching up.
pub const MAX_STEPS_PER_TICK: u32 = 8;

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopStats {
    pub frames: u64,
    pub updates: u64,
    pub elapsed: Duration,
}

pub struct GameLoop {
    line: RotatingLine,
    canvas: Canvas,
    background: Color,
    foreground: Color,
    timestep: Duration,
    frame_duration: Duration,
    frames: u64,
    accumulator: Duration,
}

impl GameLoop {
    pub fn new(config: &DemoConfig) -> Result<Self, DemoError> {
        config.validate()?;
        Ok(Self {
            line: RotatingLine::from_config(config),
            canvas: Canvas::new(config.width, config.height),
            background: config.background,
            foreground: config.foreground,
            timestep: config.timestep(),
            frame_duration: config.frame_duration(),
            frames: config.frames,
            accumulator: Duration::ZERO,
        })
    }

    pub fn line(&self) -> &RotatingLine {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut RotatingLine {
        &mut self.line
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Feed `elapsed` wall time into the loop and run the fixed updates it
    /// pays for. Returns the number of updates performed.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let dt = self.timestep.as_secs_f32();

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < MAX_STEPS_PER_TICK {
            self.line.update(dt);
            self.accumulator -= self.timestep;
            steps += 1;
        }

        if self.accumulator >= self.timestep {
            warn!(
                backlog_ms = self.accumulator.as_millis() as u64,
                "game loop falling behind, dropping backlog"
            );
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    /// Redraw the canvas from the current line state.
    pub fn draw(&mut self) {
        self.canvas.clear(self.background);
        self.line.draw(&mut self.canvas, self.foreground);
    }

    /// Run in real time, sleeping out the remainder of each frame budget.
    pub fn run(&mut self, renderer: &mut dyn FrameRenderer) -> Result<LoopStats, DemoError> {
        self.drive(renderer, true)
    }

    /// Run as fast as possible, treating every frame after the first as
    /// exactly one frame budget long. Deterministic, so useful for tests and
    /// offline export.
    pub fn run_simulated(&mut self, renderer: &mut dyn FrameRenderer) -> Result<LoopStats, DemoError> {
        self.drive(renderer, false)
    }

    fn drive(&mut self, renderer: &mut dyn FrameRenderer, realtime: bool) -> Result<LoopStats, DemoError> {
        renderer.start()?;
        info!(
            renderer = renderer.name(),
            frames = self.frames,
            realtime,
            "game loop started"
        );

        let started = Instant::now();
        let mut last = started;
        let mut updates = 0u64;

        for frame in 0..self.frames {
            let frame_start = Instant::now();
            // Frame 0 always shows the initial pose
            let elapsed = if realtime {
                frame_start - last
            } else if frame == 0 {
                Duration::ZERO
            } else {
                self.frame_duration
            };
            last = frame_start;

            updates += u64::from(self.tick(elapsed));
            self.draw();

            if let Err(error) = renderer.render_frame(frame, &self.canvas) {
                renderer.stop();
                return Err(error);
            }
            debug!(frame, angle = self.line.angle(), "frame rendered");

            if realtime {
                let spent = frame_start.elapsed();
                if spent < self.frame_duration {
                    thread::sleep(self.frame_duration - spent);
                }
            }
        }

        renderer.stop();
        let stats = LoopStats {
            frames: self.frames,
            updates,
            elapsed: started.elapsed(),
        };
        info!(
            frames = stats.frames,
            updates = stats.updates,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "game loop finished"
        );
        Ok(stats)
    }
}
