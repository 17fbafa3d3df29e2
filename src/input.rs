//! Window and input events mapped onto display events.
//!
//! Any key or mouse-button press terminates; the window (re)appearing exposes.
//! The controller sees only [`DisplayEvent`]s, never Bevy input types.

use bevy::prelude::*;
use bevy::window::WindowOccluded;

use crate::controller::{Controller, ControllerAction, DisplayEvent};
use crate::surface::{Canvas, DrawSurface};
use crate::time::FrameClock;
use crate::types::DiagramSystemSet;

/// Plugin routing display events into the controller.
pub struct DisplayEventPlugin;

impl Plugin for DisplayEventPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DisplayEvent>()
            .add_systems(Update, dispatch_display_events.in_set(DiagramSystemSet::Dispatch));
    }
}

/// The window has just been shown for the first time.
pub fn expose_on_startup(mut events: MessageWriter<DisplayEvent>) {
    events.write(DisplayEvent::Expose);
}

/// The window became visible again after being occluded.
pub fn expose_on_visibility(
    mut occluded: MessageReader<WindowOccluded>,
    mut events: MessageWriter<DisplayEvent>,
) {
    for event in occluded.read() {
        if !event.occluded {
            events.write(DisplayEvent::Expose);
        }
    }
}

/// Any key or mouse-button press ends the program.
pub fn terminate_on_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut events: MessageWriter<DisplayEvent>,
) {
    if keys.get_just_pressed().next().is_some() || buttons.get_just_pressed().next().is_some() {
        events.write(DisplayEvent::Terminate);
    }
}

/// Hand pending display events to the controller and act on its answer.
pub fn dispatch_display_events(
    mut events: MessageReader<DisplayEvent>,
    mut controller: ResMut<Controller>,
    mut canvas: ResMut<Canvas>,
    mut clock: ResMut<FrameClock>,
    mut exit: MessageWriter<AppExit>,
) {
    for &event in events.read() {
        match controller.handle(event) {
            ControllerAction::StartRun => {
                // An exposed window starts out blank.
                canvas.clear();
                canvas.flush();
                clock.restart();
            }
            ControllerAction::Exit => {
                exit.write(AppExit::Success);
                return;
            }
        }
    }
}
