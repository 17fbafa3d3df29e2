//! Raster drawing surface over an RGBA8 pixel buffer.
//!
//! Lines use Bresenham's algorithm and include both endpoints. Arcs are
//! outlines only: the arc is sampled densely along its sweep and consecutive
//! samples are joined with line segments, so the same call always paints the
//! same pixels. Erasing a mark by repeating its draw calls in the background
//! color relies on that.

use bevy::prelude::*;
use std::f64::consts::PI;

use super::{ColorKey, DrawSurface, Palette, Rgba8, SurfaceError};
use crate::types::{ARC_UNITS_PER_DEGREE, FULL_CIRCLE};

const BYTES_PER_PIXEL: usize = 4;

/// In-memory raster surface.
#[derive(Resource, Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
    palette: Palette,
    current: Rgba8,
    /// Incremented on every flush.
    generation: u64,
}

impl Canvas {
    /// Create a canvas filled with the palette's background color.
    pub fn new(width: u32, height: u32, palette: Palette) -> Result<Self, SurfaceError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .filter(|&n| n > 0)
            .ok_or(SurfaceError::InvalidSize { width, height })?;

        let current = palette.foreground;
        let mut canvas = Self {
            width,
            height,
            data: vec![0; len],
            palette,
            current,
            generation: 0,
        };
        canvas.clear();
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of flushes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw RGBA8 bytes, row-major from the top-left corner.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Fill the whole canvas with the background color.
    pub fn clear(&mut self) {
        let bg = self.palette.background;
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bg);
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        let mut px = [0; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.data[i..i + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// How many pixels currently hold `color`.
    pub fn count_pixels(&self, color: Rgba8) -> usize {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px == color.as_slice())
            .count()
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&self.current);
        }
    }

    fn plot_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.plot(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl DrawSurface for Canvas {
    fn set_color(&mut self, color: ColorKey) {
        self.current = self.palette.resolve(color);
    }

    fn draw_arc(&mut self, x: i32, y: i32, width: u32, height: u32, start_angle: i32, sweep_angle: i32) {
        let rx = width as f64 / 2.0;
        let ry = height as f64 / 2.0;
        let cx = x as f64 + rx;
        let cy = y as f64 + ry;

        let sweep = sweep_angle.clamp(-FULL_CIRCLE, FULL_CIRCLE);
        let to_rad = PI / (180.0 * ARC_UNITS_PER_DEGREE as f64);
        let start = start_angle as f64 * to_rad;
        let sweep = sweep as f64 * to_rad;

        // Enough samples that neighbours are at most about a pixel apart.
        let arc_len = (rx + ry) * sweep.abs();
        let steps = (arc_len.ceil() as usize * 2).max(8);

        let point_at = |i: usize| {
            let a = start + sweep * i as f64 / steps as f64;
            // Screen Y grows downward, so counter-clockwise means -sin.
            let px = (cx + rx * a.cos()).round() as i32;
            let py = (cy - ry * a.sin()).round() as i32;
            (px, py)
        };

        let mut prev = point_at(0);
        self.plot(prev.0, prev.1);
        for i in 1..=steps {
            let next = point_at(i);
            if next != prev {
                self.plot_line(prev.0, prev.1, next.0, next.1);
            }
            prev = next;
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.plot_line(x1, y1, x2, y2);
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.plot(x, y);
    }

    fn flush(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BLACK, EARTH_BLUE, LINE_GREY, WHITE};

    fn canvas(side: u32) -> Canvas {
        Canvas::new(side, side, Palette::color()).unwrap()
    }

    #[test]
    fn test_new_is_background() {
        let c = canvas(8);
        assert_eq!(c.count_pixels(BLACK), 64);
        assert_eq!(c.as_bytes().len(), 8 * 8 * 4);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = Canvas::new(0, 10, Palette::color()).unwrap_err();
        assert_eq!(err, SurfaceError::InvalidSize { width: 0, height: 10 });
    }

    #[test]
    fn test_point_uses_current_color() {
        let mut c = canvas(4);
        c.set_color(ColorKey::Earth);
        c.draw_point(1, 2);
        assert_eq!(c.pixel(1, 2), Some(EARTH_BLUE));
        assert_eq!(c.count_pixels(EARTH_BLUE), 1);
    }

    #[test]
    fn test_line_includes_endpoints() {
        let mut c = canvas(16);
        c.set_color(ColorKey::Line);
        c.draw_line(2, 3, 12, 9);
        assert_eq!(c.pixel(2, 3), Some(LINE_GREY));
        assert_eq!(c.pixel(12, 9), Some(LINE_GREY));
        // Bresenham paints one pixel per step along the major axis.
        assert_eq!(c.count_pixels(LINE_GREY), 11);
    }

    #[test]
    fn test_degenerate_line_is_point() {
        let mut c = canvas(4);
        c.set_color(ColorKey::Foreground);
        c.draw_line(2, 2, 2, 2);
        assert_eq!(c.count_pixels(WHITE), 1);
    }

    #[test]
    fn test_clipping_does_not_panic() {
        let mut c = canvas(10);
        c.set_color(ColorKey::Foreground);
        c.draw_line(-20, 5, 30, 5);
        c.draw_point(-1, -1);
        c.draw_point(10, 10);
        c.draw_arc(-3, -3, 8, 8, 0, FULL_CIRCLE);
        assert_eq!(c.pixel(-1, 5), None);
        assert_eq!(c.pixel(0, 5), Some(WHITE));
        assert_eq!(c.pixel(9, 5), Some(WHITE));
    }

    #[test]
    fn test_full_arc_hits_cardinal_points() {
        let mut c = canvas(16);
        c.set_color(ColorKey::Foreground);
        // Bounding box (4, 4, 4, 4): center (6, 6), radius 2.
        c.draw_arc(4, 4, 4, 4, 0, FULL_CIRCLE);
        for (x, y) in [(8, 6), (6, 4), (4, 6), (6, 8)] {
            assert_eq!(c.pixel(x, y), Some(WHITE), "missing ({x}, {y})");
        }
        // Outline only.
        assert_eq!(c.pixel(6, 6), Some(BLACK));
    }

    #[test]
    fn test_quarter_arc_counter_clockwise() {
        let mut c = canvas(32);
        c.set_color(ColorKey::Foreground);
        // Center (16, 16), radius 10, from 3 o'clock to 12 o'clock.
        c.draw_arc(6, 6, 20, 20, 0, 90 * ARC_UNITS_PER_DEGREE);
        assert_eq!(c.pixel(26, 16), Some(WHITE));
        assert_eq!(c.pixel(16, 6), Some(WHITE));
        // Bottom of the circle is untouched.
        assert_eq!(c.pixel(16, 26), Some(BLACK));
        assert_eq!(c.pixel(6, 16), Some(BLACK));
    }

    #[test]
    fn test_redraw_in_background_erases() {
        let mut c = canvas(16);
        c.set_color(ColorKey::Mars);
        c.draw_arc(5, 4, 4, 4, 0, FULL_CIRCLE);
        c.draw_arc(5, 5, 2, 2, 0, FULL_CIRCLE);
        assert!(c.count_pixels(BLACK) < 256);

        c.set_color(ColorKey::Background);
        c.draw_arc(5, 4, 4, 4, 0, FULL_CIRCLE);
        c.draw_arc(5, 5, 2, 2, 0, FULL_CIRCLE);
        assert_eq!(c.count_pixels(BLACK), 256);
    }

    #[test]
    fn test_flush_bumps_generation() {
        let mut c = canvas(2);
        assert_eq!(c.generation(), 0);
        c.flush();
        c.flush();
        assert_eq!(c.generation(), 2);
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut c = canvas(4);
        c.set_color(ColorKey::Sun);
        c.draw_line(0, 0, 3, 3);
        c.clear();
        assert_eq!(c.count_pixels(BLACK), 16);
    }
}
