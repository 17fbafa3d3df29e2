//! Display availability check, done before the windowing stack starts.

use std::ffi::OsString;

use crate::surface::SurfaceError;

/// Environment variables naming a display server connection.
pub const DISPLAY_VARS: &[&str] = &["DISPLAY", "WAYLAND_DISPLAY"];

/// Fail fast when no display server can be reached.
pub fn probe() -> Result<(), SurfaceError> {
    probe_with(|name| std::env::var_os(name))
}

/// [`probe`] against an arbitrary environment lookup.
///
/// Only desktop Unix relies on environment variables to find the display;
/// everywhere else this always succeeds.
pub fn probe_with<F>(lookup: F) -> Result<(), SurfaceError>
where
    F: Fn(&str) -> Option<OsString>,
{
    if !needs_display_env() {
        return Ok(());
    }
    let found = DISPLAY_VARS
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.is_empty()));
    if found {
        Ok(())
    } else {
        Err(SurfaceError::NoDisplay(format!(
            "none of {} is set",
            DISPLAY_VARS.join(", ")
        )))
    }
}

fn needs_display_env() -> bool {
    cfg!(all(
        unix,
        not(target_os = "macos"),
        not(target_os = "ios"),
        not(target_os = "android")
    ))
}
