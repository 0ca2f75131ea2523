//! The rotating line: a segment spinning about its center at a fixed rate.

use crate::config::DemoConfig;
use crate::demo::canvas::{Canvas, Color};
use crate::numerics::{Point2, Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingLine {
    center: Point2,
    arm: Vector2,
    arm_length: f32,
    /// Radians per second
    angular_velocity: f32,
}

impl RotatingLine {
    /// A line of total length `2 * arm_length` lying along +x.
    pub fn new(center: Point2, arm_length: f32, angular_velocity: f32) -> Self {
        Self {
            center,
            arm: Vector2::new(arm_length, 0.0),
            arm_length,
            angular_velocity,
        }
    }

    /// Centered on the canvas, speed converted from degrees per second.
    pub fn from_config(config: &DemoConfig) -> Self {
        let center = Point2::new(config.width as f32, config.height as f32) * 0.5;
        Self::new(
            center,
            config.arm_length,
            config.angular_velocity_degrees.to_radians(),
        )
    }

    /// Advance the rotation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.arm.rotate(self.angular_velocity * dt);
        // Re-pin the length so float error does not accumulate over many frames
        self.arm.set_length(self.arm_length);
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn arm(&self) -> Vector2 {
        self.arm
    }

    pub fn angle(&self) -> f32 {
        self.arm.angle()
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Both ends of the segment, tail first.
    pub fn endpoints(&self) -> (Point2, Point2) {
        (self.center - self.arm, self.center + self.arm)
    }

    pub fn draw(&self, canvas: &mut Canvas, color: Color) {
        let (tail, tip) = self.endpoints();
        canvas.draw_line(tail, tip, color);
    }
}
