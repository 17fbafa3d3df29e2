//! Bevy integration for the orbit diagram.
//!
//! [`DiagramPlugin`] owns the animation state and runs headless.
//! [`CanvasDisplayPlugin`] puts the canvas on screen and feeds window input
//! back in; it needs `DefaultPlugins`.

mod canvas_sprite;

use bevy::prelude::*;

pub use self::canvas_sprite::{CANVAS_DEPTH_BITS, CanvasDisplayPlugin, CanvasTexture};

use crate::animator::Animator;
use crate::config::AnimationConfig;
use crate::controller::Controller;
use crate::input::DisplayEventPlugin;
use crate::surface::{Canvas, Palette, SurfaceError};
use crate::time::{AnimationClockPlugin, FrameClock};
use crate::types::DiagramSystemSet;

/// Plugin holding the controller, canvas and frame clock.
pub struct DiagramPlugin {
    config: AnimationConfig,
    canvas: Canvas,
}

impl DiagramPlugin {
    /// Allocate the canvas for `config`, painted with `palette`.
    pub fn new(config: AnimationConfig, palette: Palette) -> Result<Self, SurfaceError> {
        let side = config.canvas_side();
        let canvas = Canvas::new(side, side, palette)?;
        Ok(Self { config, canvas })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

impl Plugin for DiagramPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Diagram: {}x{} canvas, {} samples/orbit x {} orbits, erase trails: {}",
            self.canvas.width(),
            self.canvas.height(),
            self.config.samples_per_orbit(),
            self.config.orbit_count(),
            self.config.erase_trails()
        );

        app.insert_resource(self.config.clone())
            .insert_resource(self.canvas.palette().clone())
            .insert_resource(self.canvas.clone())
            .insert_resource(FrameClock::new(self.config.frame_delay()))
            .insert_resource(Controller::new(Animator::new(self.config.clone())))
            .configure_sets(
                Update,
                (
                    DiagramSystemSet::Input,
                    DiagramSystemSet::Dispatch,
                    DiagramSystemSet::Tick,
                    DiagramSystemSet::Upload,
                )
                    .chain(),
            )
            .add_plugins((DisplayEventPlugin, AnimationClockPlugin));
    }
}
