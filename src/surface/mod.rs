//! Drawing surface capability consumed by the animator.
//!
//! The animator never touches a window directly; it issues colored point, arc
//! and line primitives against a [`DrawSurface`]. Colors are symbolic
//! ([`ColorKey`]) and resolved to RGB by a [`Palette`] chosen by whoever owns
//! the surface.

pub mod canvas;

pub use canvas::Canvas;

use bevy::prelude::*;

/// Symbolic colors used by the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Background,
    Foreground,
    Sun,
    Earth,
    Mars,
    Line,
}

impl ColorKey {
    pub const ALL: &'static [ColorKey] = &[
        ColorKey::Background,
        ColorKey::Foreground,
        ColorKey::Sun,
        ColorKey::Earth,
        ColorKey::Mars,
        ColorKey::Line,
    ];
}

/// A surface that accepts colored drawing primitives.
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// Arc angles are in 1/64 of a degree, counter-clockwise from three o'clock,
/// and `(x, y, width, height)` is the arc's bounding box.
pub trait DrawSurface {
    fn set_color(&mut self, color: ColorKey);

    fn draw_arc(&mut self, x: i32, y: i32, width: u32, height: u32, start_angle: i32, sweep_angle: i32);

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    fn draw_point(&mut self, x: i32, y: i32);

    /// Make everything drawn so far visible.
    fn flush(&mut self);
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("cannot open display: {0}")]
    NoDisplay(String),

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// RGBA pixel, 8 bits per channel.
pub type Rgba8 = [u8; 4];

/// Opaque pixel from a packed `0xRRGGBB` value.
pub const fn rgb_hex(rgb: u32) -> Rgba8 {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xff]
}

pub const BLACK: Rgba8 = rgb_hex(0x000000);
pub const WHITE: Rgba8 = rgb_hex(0xffffff);
pub const EARTH_BLUE: Rgba8 = rgb_hex(0x87ceeb);
pub const MARS_RED: Rgba8 = rgb_hex(0x9c2e35);
pub const LINE_GREY: Rgba8 = rgb_hex(0x404040);
pub const SUN_YELLOW: Rgba8 = rgb_hex(0xfce570);

/// Concrete pixel values for each [`ColorKey`].
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba8,
    pub foreground: Rgba8,
    pub sun: Rgba8,
    pub earth: Rgba8,
    pub mars: Rgba8,
    pub line: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self::color()
    }
}

impl Palette {
    /// Full-color scheme.
    pub fn color() -> Self {
        Self {
            background: BLACK,
            foreground: WHITE,
            sun: SUN_YELLOW,
            earth: EARTH_BLUE,
            mars: MARS_RED,
            line: LINE_GREY,
        }
    }

    /// Two-color scheme: black background, everything else white.
    pub fn monochrome() -> Self {
        Self {
            background: BLACK,
            foreground: WHITE,
            sun: WHITE,
            earth: WHITE,
            mars: WHITE,
            line: WHITE,
        }
    }

    /// Pick a scheme for a display with `bits` of color depth.
    pub fn for_depth(bits: u32) -> Self {
        if bits > 1 { Self::color() } else { Self::monochrome() }
    }

    pub fn resolve(&self, key: ColorKey) -> Rgba8 {
        match key {
            ColorKey::Background => self.background,
            ColorKey::Foreground => self.foreground,
            ColorKey::Sun => self.sun,
            ColorKey::Earth => self.earth,
            ColorKey::Mars => self.mars,
            ColorKey::Line => self.line,
        }
    }

    /// Bevy color for `key`, e.g. for the window clear color.
    pub fn bevy_color(&self, key: ColorKey) -> Color {
        let [r, g, b, _] = self.resolve(key);
        Color::srgb_u8(r, g, b)
    }
}
