//! Test utilities for the animator and controller tests.
//!
//! Provides a draw surface that records every call instead of rasterizing,
//! and a pacer that records delays instead of sleeping.

use std::time::Duration;

use crate::animator::Pacer;
use crate::surface::{ColorKey, DrawSurface};

/// One recorded draw surface call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    SetColor(ColorKey),
    Arc(i32, i32, u32, u32, i32, i32),
    Line(i32, i32, i32, i32),
    Point(i32, i32),
    Flush,
}

/// Draw surface that records calls.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn flushes(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Flush).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_color(&mut self, color: ColorKey) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn draw_arc(&mut self, x: i32, y: i32, width: u32, height: u32, start_angle: i32, sweep_angle: i32) {
        self.calls
            .push(DrawCall::Arc(x, y, width, height, start_angle, sweep_angle));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.calls.push(DrawCall::Line(x1, y1, x2, y2));
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::Point(x, y));
    }

    fn flush(&mut self) {
        self.calls.push(DrawCall::Flush);
    }
}

/// Pacer that records requested delays without blocking.
#[derive(Default, Debug)]
pub struct RecordingPacer {
    pub delays: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pace(&mut self, delay: Duration) {
        self.delays.push(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_counts_flushes() {
        let mut s = RecordingSurface::default();
        s.set_color(ColorKey::Line);
        s.flush();
        s.draw_point(1, 1);
        s.flush();
        assert_eq!(s.flushes(), 2);
        assert_eq!(s.take_calls().len(), 4);
        assert!(s.calls().is_empty());
    }
}
