//! Raster target for the demo
//!
//! `Canvas` is a thin wrapper around an `image::RgbaImage` that knows how to
//! plot points and lines given in floating-point pixel coordinates. The pixel
//! frame is y-down, so a positive rotation turns clockwise on screen.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DemoError};
use crate::numerics::{Point2, Vector2};

/// An RGBA8 color, written as `#rrggbb` or `#rrggbbaa` in configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::invalid("color", format!("'{}' is not #rrggbb or #rrggbbaa", s));

        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut channels = [255u8; 4];
        for (i, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Color(channels))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.0)
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn clear(&mut self, color: Color) {
        let fill = Rgba::from(color);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    /// Set the pixel nearest to `point`. Points off the canvas are ignored.
    pub fn plot(&mut self, point: Point2, color: Color) {
        if !point.is_finite() {
            return;
        }
        let x = point.x.round();
        let y = point.y.round();
        if x < 0.0 || y < 0.0 || x >= self.width() as f32 || y >= self.height() as f32 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color.into());
    }

    /// Draw a segment by stepping along `b - a` one pixel at a time.
    ///
    /// The segment is first clipped to the canvas, so the number of steps is
    /// bounded by the canvas size however far the endpoints lie outside it.
    pub fn draw_line(&mut self, a: Point2, b: Point2, color: Color) {
        if !a.is_finite() || !b.is_finite() {
            return;
        }
        let Some((a, b)) = self.clip(a, b) else {
            return;
        };
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as u32;
        if steps == 0 {
            self.plot(a, color);
            return;
        }
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.plot(a.lerp(&b, t), color);
        }
    }

    /// Liang-Barsky clip of `a..b` against the pixel centers `[0, w-1] x [0, h-1]`.
    /// Worked in f64 so endpoints far off the canvas keep sub-pixel precision.
    fn clip(&self, a: Point2, b: Point2) -> Option<(Point2, Point2)> {
        if self.width() == 0 || self.height() == 0 {
            return None;
        }
        let start = Vector2::<f64>::new(a.x.into(), a.y.into());
        let end = Vector2::<f64>::new(b.x.into(), b.y.into());
        let delta = end - start;
        let max_x = f64::from(self.width() - 1);
        let max_y = f64::from(self.height() - 1);

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        let edges = [
            (-delta.x, start.x),
            (delta.x, max_x - start.x),
            (-delta.y, start.y),
            (delta.y, max_y - start.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // Parallel to this edge: either wholly inside or wholly outside
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        let narrow = |v: Vector2<f64>| Point2::new(v.x as f32, v.y as f32);
        let clipped_a = if t0 > 0.0 { narrow(start.lerp(&end, t0)) } else { a };
        let clipped_b = if t1 < 1.0 { narrow(start.lerp(&end, t1)) } else { b };
        Some((clipped_a, clipped_b))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color(p.0))
    }

    /// Number of pixels currently holding `color`.
    pub fn count_pixels(&self, color: Color) -> usize {
        self.image.pixels().filter(|p| p.0 == color.0).count()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), DemoError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Downsample to a `columns` x `rows` character grid. A cell is drawn as
    /// `#` if any pixel inside it differs from `background`.
    pub fn to_ascii(&self, columns: u32, rows: u32, background: Color) -> String {
        let columns = columns.clamp(1, self.width().max(1));
        let rows = rows.clamp(1, self.height().max(1));
        let mut out = String::with_capacity(((columns + 1) * rows) as usize);

        for row in 0..rows {
            let y0 = row * self.height() / rows;
            let y1 = ((row + 1) * self.height() / rows).max(y0 + 1);
            for column in 0..columns {
                let x0 = column * self.width() / columns;
                let x1 = ((column + 1) * self.width() / columns).max(x0 + 1);
                let lit = (y0..y1).any(|y| {
                    (x0..x1).any(|x| {
                        self.pixel(x, y).map_or(false, |c| c != background)
                    })
                });
                out.push(if lit { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
