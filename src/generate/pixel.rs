//! Pixel-art character built from filled blocks

use crate::canvas::{self, PixelBox};
use crate::constants::{HAIR, OUTLINE, PANTS, SHIRT, SKIN};
use crate::frames::{FrameName, Pose};
use image::RgbaImage;

const HEAD: PixelBox = [13, 6, 19, 14];
const HAIRLINE: PixelBox = [14, 4, 18, 8];
const EYES: [(i32, i32); 2] = [(15, 10), (17, 10)];
const TORSO: PixelBox = [14, 14, 18, 26];
const LEGS: [PixelBox; 2] = [[14, 26, 16, 38], [16, 26, 18, 38]];

/// Arm and boot blocks that move with the pose
struct Extremities {
    arms: &'static [PixelBox],
    boots: &'static [PixelBox],
}

fn extremities(pose: Pose) -> Extremities {
    match pose {
        Pose::Idle => Extremities {
            arms: &[[12, 16, 14, 24], [18, 16, 20, 24]],
            boots: &[[13, 38, 17, 44]],
        },
        // Left arm back, right arm and right foot forward
        Pose::StrideA => Extremities {
            arms: &[[11, 18, 13, 26], [19, 14, 21, 22]],
            boots: &[[12, 38, 16, 44], [16, 36, 20, 42]],
        },
        Pose::StrideB => Extremities {
            arms: &[[19, 18, 21, 26], [11, 14, 13, 22]],
            boots: &[[16, 38, 20, 44], [12, 36, 16, 42]],
        },
        // Arms up, feet tucked together
        Pose::Jump => Extremities {
            arms: &[[10, 12, 12, 20], [20, 12, 22, 20]],
            boots: &[[13, 32, 17, 40]],
        },
    }
}

pub fn draw_frame(frame: &mut RgbaImage, name: FrameName) {
    canvas::rect(frame, HEAD, SKIN);
    canvas::rect(frame, HAIRLINE, HAIR);
    for eye in EYES {
        canvas::point(frame, eye, OUTLINE);
    }
    canvas::rect(frame, TORSO, SHIRT);
    for leg in LEGS {
        canvas::rect(frame, leg, PANTS);
    }

    let Extremities { arms, boots } = extremities(name.pose());
    for &arm in arms {
        canvas::rect(frame, arm, SKIN);
    }
    for &boot in boots {
        canvas::rect(frame, boot, HAIR);
    }
}
