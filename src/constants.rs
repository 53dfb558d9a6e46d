//! Fixed dimensions and colors shared by every sprite style
//!
//! Appearance is hand-authored, so none of these are configurable.

use image::Rgba;

// =============================================================================
// SHEET GEOMETRY
// =============================================================================

pub const FRAME_WIDTH: u32 = 32;
pub const FRAME_HEIGHT: u32 = 48;
pub const FRAME_COUNT: u32 = 6; // idle, walk1-4, jump
pub const SHEET_WIDTH: u32 = FRAME_WIDTH * FRAME_COUNT;
pub const SHEET_HEIGHT: u32 = FRAME_HEIGHT;

/// Default output directory, relative to the working directory
pub const OUTPUT_DIR: &str = "sprites";

// =============================================================================
// PALETTE
// =============================================================================

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const SKIN: Rgba<u8> = Rgba([255, 220, 177, 255]);
pub const HAIR: Rgba<u8> = Rgba([139, 69, 19, 255]); // Also used for boots
pub const SHIRT: Rgba<u8> = Rgba([0, 100, 200, 255]);
pub const PANTS: Rgba<u8> = Rgba([50, 50, 50, 255]);
pub const SILHOUETTE: Rgba<u8> = Rgba([0, 50, 100, 255]);

/// Stroke width for stick-figure limbs
pub const LIMB_WIDTH: u32 = 2;
