//! Command-line arguments.

use clap::Parser;

use crate::config::AnimationConfig;

/// Animated Earth-Mars orbital diagram.
///
/// Press any key or mouse button in the window to quit.
#[derive(Parser, Debug)]
#[command(name = "synodic", version)]
pub struct Args {
    /// Any argument keeps orbit traces instead of erasing each frame
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub keep_trails: Vec<String>,
}

impl Args {
    pub fn erase_trails(&self) -> bool {
        self.keep_trails.is_empty()
    }

    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig::default().with_erase_trails(self.erase_trails())
    }
}
