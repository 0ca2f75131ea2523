//! Configuration for the rotating-line demo
//!
//! A `DemoConfig` is assembled in layers: built-in defaults, an optional TOML
//! file, then a `key=value,key=value` parameter string for quick overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::demo::canvas::Color;
use crate::demo::renderer::RendererKind;
use crate::error::ConfigError;

/// Largest canvas edge accepted by `validate`.
pub const MAX_CANVAS_EDGE: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Target render rate
    pub fps: u32,
    /// Fixed simulation rate; the line is updated in 1/updates_per_second slices
    pub updates_per_second: u32,
    /// Number of frames to render before the loop exits
    pub frames: u64,
    /// Distance from the center to either end of the line
    pub arm_length: f32,
    /// Rotation speed, degrees per second
    pub angular_velocity_degrees: f32,
    pub renderer: RendererKind,
    /// Where the PNG renderer writes its frames
    pub output_dir: PathBuf,
    /// PNG renderer writes every n-th frame
    pub png_every: u32,
    /// Terminal renderer grid size
    pub terminal_columns: u32,
    pub terminal_rows: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            fps: 30,
            updates_per_second: 60,
            frames: 90,
            arm_length: 100.0,
            angular_velocity_degrees: 90.0,
            renderer: RendererKind::Terminal,
            output_dir: PathBuf::from("frames"),
            png_every: 1,
            terminal_columns: 64,
            terminal_rows: 32,
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }
}

impl DemoConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(source)?;
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded demo config file");
        Self::from_toml_str(&source)
    }

    /// Apply overrides of the form `"fps=60,renderer=png"`.
    ///
    /// Whitespace around keys and values is ignored, as are empty entries.
    pub fn apply_parameters(&mut self, parameters: &str) -> Result<(), ConfigError> {
        for entry in parameters.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::invalid(entry, "expected key=value"))?;
            self.set(key.trim(), value.trim())?;
        }
        Ok(())
    }

    /// Set a single key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "width" => self.width = parse_value(key, value)?,
            "height" => self.height = parse_value(key, value)?,
            "fps" => self.fps = parse_value(key, value)?,
            "updates_per_second" => self.updates_per_second = parse_value(key, value)?,
            "frames" => self.frames = parse_value(key, value)?,
            "arm_length" => self.arm_length = parse_value(key, value)?,
            "angular_velocity_degrees" => self.angular_velocity_degrees = parse_value(key, value)?,
            "renderer" => self.renderer = value.parse()?,
            "output_dir" => self.output_dir = PathBuf::from(value),
            "png_every" => self.png_every = parse_value(key, value)?,
            "terminal_columns" => self.terminal_columns = parse_value(key, value)?,
            "terminal_rows" => self.terminal_rows = parse_value(key, value)?,
            "background" => self.background = value.parse()?,
            "foreground" => self.foreground = value.parse()?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        debug!(key, value, "config override applied");
        Ok(())
    }

    /// Reject configurations the game loop cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, edge) in [("width", self.width), ("height", self.height)] {
            if edge == 0 || edge > MAX_CANVAS_EDGE {
                return Err(ConfigError::invalid(
                    key,
                    format!("must be between 1 and {}", MAX_CANVAS_EDGE),
                ));
            }
        }
        let positive = [
            ("fps", self.fps),
            ("updates_per_second", self.updates_per_second),
            ("png_every", self.png_every),
            ("terminal_columns", self.terminal_columns),
            ("terminal_rows", self.terminal_rows),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::invalid(key, "must be greater than zero"));
            }
        }
        if self.frames == 0 {
            return Err(ConfigError::invalid("frames", "must be greater than zero"));
        }
        if !self.arm_length.is_finite() || self.arm_length < 0.0 {
            return Err(ConfigError::invalid("arm_length", "must be a finite, non-negative number"));
        }
        if self.arm_length > MAX_CANVAS_EDGE as f32 {
            return Err(ConfigError::invalid(
                "arm_length",
                format!("must not exceed {}", MAX_CANVAS_EDGE),
            ));
        }
        if !self.angular_velocity_degrees.is_finite() {
            return Err(ConfigError::invalid("angular_velocity_degrees", "must be finite"));
        }
        Ok(())
    }

    /// Wall-clock budget for one rendered frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Length of one fixed simulation step.
    pub fn timestep(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.updates_per_second.max(1)))
    }
}

fn parse_value<V: std::str::FromStr>(key: &str, value: &str) -> Result<V, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("cannot parse '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_duration(), Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let config = DemoConfig::from_toml_str(
            r##"
            fps = 25
            renderer = "png"
            foreground = "#ff0000"
            output_dir = "out/frames"
            "##,
        )
        .unwrap();

        assert_eq!(config.fps, 25);
        assert_eq!(config.renderer, RendererKind::Png);
        assert_eq!(config.foreground, Color([255, 0, 0, 255]));
        assert_eq!(config.output_dir, PathBuf::from("out/frames"));
        assert_eq!(config.width, DemoConfig::default().width);
    }

    #[test]
    fn test_from_toml_rejects_unknown_fields() {
        let result = DemoConfig::from_toml_str("colour = \"red\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = DemoConfig::default();
        config.apply_parameters("width=64,background=#102030").unwrap();

        let text = toml::to_string(&config).unwrap();
        let back = DemoConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_apply_parameters() {
        let mut config = DemoConfig::default();
        config
            .apply_parameters(" fps = 60 , frames=10,renderer=png,, arm_length=12.5 ")
            .unwrap();

        assert_eq!(config.fps, 60);
        assert_eq!(config.frames, 10);
        assert_eq!(config.renderer, RendererKind::Png);
        assert_eq!(config.arm_length, 12.5);
    }

    #[test]
    fn test_apply_parameters_errors() {
        let mut config = DemoConfig::default();

        assert!(matches!(
            config.apply_parameters("fps"),
            Err(ConfigError::InvalidParameter { .. })
        ));
        assert!(matches!(
            config.apply_parameters("fps=fast"),
            Err(ConfigError::InvalidParameter { ref key, .. }) if key == "fps"
        ));
        assert!(matches!(
            config.apply_parameters("speed=3"),
            Err(ConfigError::UnknownKey(ref key)) if key == "speed"
        ));
        assert!(config.apply_parameters("renderer=opengl").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            "width=0",
            "height=5000",
            "fps=0",
            "updates_per_second=0",
            "frames=0",
            "png_every=0",
            "arm_length=-1",
            "arm_length=NaN",
            "arm_length=1e9",
            "angular_velocity_degrees=inf",
        ];
        for case in cases {
            let mut config = DemoConfig::default();
            config.apply_parameters(case).unwrap();
            assert!(config.validate().is_err(), "{} should be rejected", case);
        }
    }

    #[test]
    fn test_validate_arm_length_limit() {
        let mut config = DemoConfig::default();
        config.arm_length = MAX_CANVAS_EDGE as f32;
        assert!(config.validate().is_ok());

        config.arm_length = 1e9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { ref key, .. }) if key == "arm_length"
        ));
    }

    #[test]
    fn test_from_toml_color_strings() {
        let config = DemoConfig::from_toml_str(
            r##"
            background = "#00000080"
            foreground = "#ffffff"
            "##,
        )
        .unwrap();
        assert_eq!(config.background, Color([0, 0, 0, 128]));
        assert_eq!(config.foreground, Color::WHITE);
    }

    #[test]
    fn test_timestep() {
        let mut config = DemoConfig::default();
        config.apply_parameters("updates_per_second=50").unwrap();
        assert_eq!(config.timestep(), Duration::from_millis(20));
    }
}
