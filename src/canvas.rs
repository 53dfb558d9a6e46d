//! Drawing primitives for frame rasters
//!
//! Thin wrappers over `imageproc` that take the inclusive pixel boxes the
//! sprite geometry is authored in.

use crate::constants::{FRAME_HEIGHT, FRAME_WIDTH, TRANSPARENT};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Inclusive pixel box `[x0, y0, x1, y1]`
pub type PixelBox = [i32; 4];

/// Allocate a blank, fully transparent frame
pub fn blank_frame() -> RgbaImage {
    RgbaImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, TRANSPARENT)
}

/// Straight line `width` pixels thick.
///
/// Extra strokes are stacked along the minor axis so that near-vertical
/// lines grow sideways and near-horizontal lines grow downwards.
pub fn line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba<u8>) {
    let steep = (to.1 - from.1).abs() > (to.0 - from.0).abs();
    for offset in 0..width.max(1) as i32 {
        let (dx, dy) = if steep { (offset, 0) } else { (0, offset) };
        draw_line_segment_mut(
            img,
            ((from.0 + dx) as f32, (from.1 + dy) as f32),
            ((to.0 + dx) as f32, (to.1 + dy) as f32),
            color,
        );
    }
}

/// Filled rectangle covering the inclusive box
pub fn rect(img: &mut RgbaImage, [x0, y0, x1, y1]: PixelBox, color: Rgba<u8>) {
    let width = (x1 - x0 + 1).max(1) as u32;
    let height = (y1 - y0 + 1).max(1) as u32;
    draw_filled_rect_mut(img, Rect::at(x0, y0).of_size(width, height), color);
}

/// Ellipse inscribed in the inclusive box, filled then outlined
pub fn ellipse(
    img: &mut RgbaImage,
    [x0, y0, x1, y1]: PixelBox,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    let rx = (x1 - x0) / 2;
    let ry = (y1 - y0) / 2;
    draw_filled_ellipse_mut(img, center, rx, ry, fill);
    draw_hollow_ellipse_mut(img, center, rx, ry, outline);
}

/// Single pixel; silently clipped outside the image
pub fn point(img: &mut RgbaImage, (x, y): (i32, i32), color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Filled polygon. The outline is implicitly closed, so `vertices` must not
/// repeat the first vertex at the end.
pub fn polygon(img: &mut RgbaImage, vertices: &[(i32, i32)], color: Rgba<u8>) {
    if vertices.len() < 3 {
        return;
    }
    let points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(img, &points, color);
}

/// Count pixels with non-zero alpha
pub fn opaque_pixels(img: &RgbaImage) -> usize {
    img.pixels().filter(|p| p[3] > 0).count()
}
