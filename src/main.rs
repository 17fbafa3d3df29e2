//! Synodic - Earth and Mars orbital diagram
//!
//! Opens a window and animates Earth and Mars around the Sun. Pass any
//! argument to leave orbit traces on screen.

use bevy::prelude::*;
use bevy::window::{WindowPosition, WindowResolution};
use clap::Parser;

use synodic::cli::Args;
use synodic::display;
use synodic::render::{CANVAS_DEPTH_BITS, CanvasDisplayPlugin, DiagramPlugin};
use synodic::surface::Palette;

fn main() -> AppExit {
    let args = Args::parse();
    let config = args.animation_config();

    if let Err(err) = display::probe() {
        eprintln!("error: {err}");
        return AppExit::error();
    }

    let side = config.canvas_side();
    let diagram = match DiagramPlugin::new(config, Palette::for_depth(CANVAS_DEPTH_BITS)) {
        Ok(plugin) => plugin,
        Err(err) => {
            eprintln!("error: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "synodic".into(),
                resolution: WindowResolution::new(side, side),
                position: WindowPosition::At(IVec2::new(10, 10)),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((diagram, CanvasDisplayPlugin))
        .run()
}
