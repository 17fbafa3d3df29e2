//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use synodic::animator::{Animator, Pacer};
use synodic::config::AnimationConfig;
use synodic::surface::{ColorKey, DrawSurface};
use synodic::types::Sample;

/// Surface that counts calls and remembers colors, without rasterizing.
#[derive(Default, Debug)]
pub struct CountingSurface {
    pub colors: Vec<ColorKey>,
    pub arcs: usize,
    pub lines: usize,
    pub points: usize,
    pub flushes: usize,
}

impl DrawSurface for CountingSurface {
    fn set_color(&mut self, color: ColorKey) {
        self.colors.push(color);
    }

    fn draw_arc(&mut self, _x: i32, _y: i32, _w: u32, _h: u32, _start: i32, _sweep: i32) {
        self.arcs += 1;
    }

    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {
        self.lines += 1;
    }

    fn draw_point(&mut self, _x: i32, _y: i32) {
        self.points += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Pacer that never blocks.
#[derive(Default, Debug)]
pub struct NoWaitPacer {
    pub total: Duration,
    pub calls: usize,
}

impl Pacer for NoWaitPacer {
    fn pace(&mut self, delay: Duration) {
        self.total += delay;
        self.calls += 1;
    }
}

/// Config with the given resolution and trail mode, default size and budget.
pub fn config(samples: u32, orbits: u32, erase: bool) -> AnimationConfig {
    AnimationConfig::default()
        .with_resolution(samples, orbits)
        .expect("valid resolution")
        .with_erase_trails(erase)
}

/// Tick a fresh animator to completion, collecting every sample drawn.
pub fn collect_samples<S: DrawSurface>(config: AnimationConfig, surface: &mut S) -> Vec<Sample> {
    let mut animator = Animator::new(config);
    let mut samples = Vec::new();
    while let Some(sample) = animator.tick(surface) {
        samples.push(sample);
    }
    samples
}
