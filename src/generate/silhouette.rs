//! Silhouette: one solid polygon per frame
//!
//! All four walk frames share the same outline, so the walk cycle is static
//! in this style.

use crate::canvas;
use crate::constants::SILHOUETTE;
use crate::frames::{FrameName, Pose};
use image::RgbaImage;

const STANDING: [(i32, i32); 16] = [
    (16, 6), (18, 8), (18, 12), (20, 14), (20, 26), (18, 28),
    (18, 38), (20, 44), (16, 44), (12, 44), (14, 38), (14, 28),
    (12, 26), (12, 14), (14, 12), (14, 8),
];

const WALKING: [(i32, i32); 16] = [
    (16, 6), (18, 8), (18, 12), (20, 14), (20, 26), (18, 28),
    (19, 38), (21, 44), (15, 44), (11, 44), (13, 38), (14, 28),
    (12, 26), (12, 14), (14, 12), (14, 8),
];

// Arms raised, knees bent
const JUMPING: [(i32, i32); 20] = [
    (16, 6), (18, 8), (18, 12), (22, 10), (22, 16), (18, 18),
    (18, 26), (20, 28), (20, 34), (18, 36), (16, 40), (14, 36),
    (12, 34), (12, 28), (14, 26), (14, 18), (10, 16), (10, 10),
    (14, 12), (14, 8),
];

pub fn outline(name: FrameName) -> &'static [(i32, i32)] {
    match name.pose() {
        Pose::Idle => &STANDING,
        Pose::Jump => &JUMPING,
        Pose::StrideA | Pose::StrideB => &WALKING,
    }
}

pub fn draw_frame(frame: &mut RgbaImage, name: FrameName) {
    canvas::polygon(frame, outline(name), SILHOUETTE);
}
