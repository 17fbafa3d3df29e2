//! Synodic - Earth and Mars orbital diagram
//!
//! A library crate providing the orbit sampler, the draw/erase animator and
//! the Bevy front-end that puts them in a window.

pub mod animator;
pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod orbit;
pub mod render;
pub mod surface;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
