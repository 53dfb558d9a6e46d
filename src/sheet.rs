//! Sprite sheet composition and layout
//!
//! A sheet is a single horizontal strip: one `FRAME_WIDTH`×`FRAME_HEIGHT`
//! tile per frame, in `FrameName::ALL` order, on a transparent background.

use crate::canvas::blank_frame;
use crate::constants::{FRAME_HEIGHT, FRAME_WIDTH, SHEET_HEIGHT, SHEET_WIDTH, TRANSPARENT};
use crate::frames::FrameName;
use image::{RgbaImage, imageops};
use serde::Serialize;

/// A composed six-frame character strip
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Draw every frame with `paint` and paste it into its column.
    ///
    /// Each frame starts on a fresh transparent raster; pasting replaces the
    /// column rather than blending into it.
    pub fn compose<F>(mut paint: F) -> Self
    where
        F: FnMut(&mut RgbaImage, FrameName),
    {
        let mut image = RgbaImage::from_pixel(SHEET_WIDTH, SHEET_HEIGHT, TRANSPARENT);

        for frame_name in FrameName::ALL {
            let mut frame = blank_frame();
            paint(&mut frame, frame_name);
            let x = frame_name.index() as u32 * FRAME_WIDTH;
            imageops::replace(&mut image, &frame, x as i64, 0);
        }

        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Copy one frame back out of the strip
    pub fn tile(&self, frame: FrameName) -> RgbaImage {
        let x = frame.index() as u32 * FRAME_WIDTH;
        imageops::crop_imm(&self.image, x, 0, FRAME_WIDTH, FRAME_HEIGHT).to_image()
    }
}

/// Where a single frame lives inside a sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRegion {
    pub name: FrameName,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Layout description for downstream slicing, identical for every style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLayout {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: Vec<FrameRegion>,
}

impl SheetLayout {
    pub fn standard() -> Self {
        let frames = FrameName::ALL
            .iter()
            .map(|&name| FrameRegion {
                name,
                x: name.index() as u32 * FRAME_WIDTH,
                y: 0,
                width: FRAME_WIDTH,
                height: FRAME_HEIGHT,
            })
            .collect();

        Self {
            sheet_width: SHEET_WIDTH,
            sheet_height: SHEET_HEIGHT,
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            frames,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn region(&self, name: FrameName) -> Option<&FrameRegion> {
        self.frames.iter().find(|r| r.name == name)
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::standard()
    }
}
