pub mod config;
pub mod demo;
pub mod error;
pub mod numerics;

pub use config::DemoConfig;
pub use error::{ConfigError, DemoError, VectorError};
pub use numerics::{FloatingPoint, Point2, Vector2};
