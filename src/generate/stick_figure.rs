//! Stick figure: outlined round head, 2px line body and limbs

use crate::canvas;
use crate::constants::{LIMB_WIDTH, OUTLINE, SKIN};
use crate::frames::{FrameName, Pose};
use image::RgbaImage;

const HEAD: canvas::PixelBox = [12, 4, 20, 12];
const NECK: (i32, i32) = (16, 12);
const SHOULDER: (i32, i32) = (16, 18);
const HIP: (i32, i32) = (16, 30);

/// Hand and foot endpoints for one pose
struct Limbs {
    hands: [(i32, i32); 2],
    feet: [(i32, i32); 2],
}

fn limbs(pose: Pose) -> Limbs {
    match pose {
        // Arms down, legs straight
        Pose::Idle => Limbs {
            hands: [(10, 25), (22, 25)],
            feet: [(12, 44), (20, 44)],
        },
        Pose::StrideA => Limbs {
            hands: [(8, 26), (24, 24)],
            feet: [(10, 44), (22, 42)],
        },
        Pose::StrideB => Limbs {
            hands: [(24, 26), (8, 24)],
            feet: [(22, 44), (10, 42)],
        },
        // Arms up; feet are the knees, shins are added separately
        Pose::Jump => Limbs {
            hands: [(10, 14), (22, 14)],
            feet: [(10, 38), (22, 38)],
        },
    }
}

pub fn draw_frame(frame: &mut RgbaImage, name: FrameName) {
    canvas::ellipse(frame, HEAD, SKIN, OUTLINE);
    canvas::line(frame, NECK, HIP, LIMB_WIDTH, OUTLINE);

    let pose = name.pose();
    let Limbs { hands, feet } = limbs(pose);
    for hand in hands {
        canvas::line(frame, SHOULDER, hand, LIMB_WIDTH, OUTLINE);
    }
    for foot in feet {
        canvas::line(frame, HIP, foot, LIMB_WIDTH, OUTLINE);
    }

    if pose == Pose::Jump {
        // Bent legs
        canvas::line(frame, (10, 38), (8, 42), LIMB_WIDTH, OUTLINE);
        canvas::line(frame, (22, 38), (24, 42), LIMB_WIDTH, OUTLINE);
    }
}
