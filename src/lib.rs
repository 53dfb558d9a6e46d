//! Character sprites - procedural sprite sheets for 2D game characters
//!
//! Draws six-frame (idle, walk1-4, jump) strips in three styles and writes
//! them as PNG files.

pub mod canvas;
pub mod constants;
pub mod frames;
pub mod generate;
pub mod settings;
pub mod sheet;

pub use constants::*;
pub use frames::{FrameName, Pose};
pub use generate::{SpriteError, Style, generate, generate_all, generate_styles, render, run};
pub use settings::GeneratorSettings;
pub use sheet::{FrameRegion, SheetLayout, SpriteSheet};

/// Printed once every sheet has been written
pub const SUCCESS_MESSAGE: &str = "Character sprites created successfully!";
