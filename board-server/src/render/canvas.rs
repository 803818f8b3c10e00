//! Fixed-size 1-bit canvas and drawing primitives.
//!
//! Pixel value 0 is ink (black), 1 is background (white). Primitives only
//! ever write 0 or 1; there is no blending. The canvas also implements
//! `embedded_graphics::DrawTarget` so the built-in fallback fonts can draw
//! onto it directly.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

pub const INK: u8 = 0;
pub const BACKGROUND: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A white canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            pixels: vec![BACKGROUND; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Set one pixel; out-of-bounds writes are ignored, values are clamped
    /// to ink/background.
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let value = if value == INK { INK } else { BACKGROUND };
        self.pixels[(y * self.width + x) as usize] = value;
    }

    /// Fill the rectangle with inclusive corners (x0, y0) and (x1, y1).
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u8) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, value);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, value: u8) {
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.set(cx + dx, cy + dy, value);
                }
            }
        }
    }

    /// Fill the circular sector between `start_deg` and `end_deg`.
    ///
    /// Angles are measured clockwise from the positive x axis, matching
    /// screen coordinates (y grows downward), in [0, 360). A start greater
    /// than the end wraps through 0.
    pub fn fill_pie(&mut self, cx: i32, cy: i32, r: i32, start_deg: f64, end_deg: f64, value: u8) {
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let angle = (dy as f64).atan2(dx as f64).to_degrees().rem_euclid(360.0);
                let inside = if start_deg <= end_deg {
                    angle >= start_deg && angle <= end_deg
                } else {
                    angle >= start_deg || angle <= end_deg
                };
                if inside {
                    self.set(cx + dx, cy + dy, value);
                }
            }
        }
    }

    pub fn fill_triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        value: u8,
    ) {
        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);

        let edge = |p: (i32, i32), q: (i32, i32), x: i32, y: i32| -> i64 {
            (q.0 - p.0) as i64 * (y - p.1) as i64 - (q.1 - p.1) as i64 * (x - p.0) as i64
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let e0 = edge(a, b, x, y);
                let e1 = edge(b, c, x, y);
                let e2 = edge(c, a, x, y);
                let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
                if inside {
                    self.set(x, y, value);
                }
            }
        }
    }

    /// 1px rounded-rectangle outline with inclusive corners.
    pub fn rounded_rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, r: i32, value: u8) {
        self.fill_rect(x0 + r, y0, x1 - r, y0, value);
        self.fill_rect(x0 + r, y1, x1 - r, y1, value);
        self.fill_rect(x0, y0 + r, x0, y1 - r, value);
        self.fill_rect(x1, y0 + r, x1, y1 - r, value);

        // Corner arc centers with the quadrant sign each one draws.
        let corners = [
            (x1 - r, y1 - r, 1, 1),   // bottom-right
            (x0 + r, y1 - r, -1, 1),  // bottom-left
            (x0 + r, y0 + r, -1, -1), // top-left
            (x1 - r, y0 + r, 1, -1),  // top-right
        ];

        // Midpoint circle, one octant mirrored into each corner quadrant.
        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;
        while x >= y {
            for &(cx, cy, sx, sy) in &corners {
                self.set(cx + sx * x, cy + sy * y, value);
                self.set(cx + sx * y, cy + sy * x, value);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Encode as a grayscale PNG with 1-bit depth.
    ///
    /// Output is byte-identical for identical canvas contents: fixed
    /// dimensions, fixed encoder settings, no ancillary chunks.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut out = Vec::new();
        let width = self.width as u32;
        let height = self.height as u32;

        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        let mut writer = encoder.write_header()?;

        // Pack 8 pixels per byte, most significant bit first; rows are
        // padded to whole bytes. Bit 1 is white, matching PNG grayscale.
        let row_bytes = (self.width as usize).div_ceil(8);
        let mut data = vec![0u8; row_bytes * self.height as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[(y * self.width + x) as usize] == BACKGROUND {
                    data[y as usize * row_bytes + (x / 8) as usize] |= 0x80 >> (x % 8);
                }
            }
        }
        writer.write_image_data(&data)?;
        writer.finish()?;

        Ok(out)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let value = if color.is_on() { INK } else { BACKGROUND };
            self.set(point.x, point.y, value);
        }
        Ok(())
    }
}
