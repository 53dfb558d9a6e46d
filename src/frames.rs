//! Animation frame names and the poses they map to

use serde::Serialize;
use std::fmt;

/// One of the six frames in a character sheet, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameName {
    Idle,
    Walk1,
    Walk2,
    Walk3,
    Walk4,
    Jump,
}

impl FrameName {
    /// Left-to-right order of frames in every sheet
    pub const ALL: [FrameName; 6] = [
        FrameName::Idle,
        FrameName::Walk1,
        FrameName::Walk2,
        FrameName::Walk3,
        FrameName::Walk4,
        FrameName::Jump,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrameName::Idle => "idle",
            FrameName::Walk1 => "walk1",
            FrameName::Walk2 => "walk2",
            FrameName::Walk3 => "walk3",
            FrameName::Walk4 => "walk4",
            FrameName::Jump => "jump",
        }
    }

    /// Column of this frame in the sheet
    pub fn index(self) -> usize {
        match self {
            FrameName::Idle => 0,
            FrameName::Walk1 => 1,
            FrameName::Walk2 => 2,
            FrameName::Walk3 => 3,
            FrameName::Walk4 => 4,
            FrameName::Jump => 5,
        }
    }

    pub fn pose(self) -> Pose {
        match self {
            FrameName::Idle => Pose::Idle,
            FrameName::Walk1 | FrameName::Walk3 => Pose::StrideA,
            FrameName::Walk2 | FrameName::Walk4 => Pose::StrideB,
            FrameName::Jump => Pose::Jump,
        }
    }

    pub fn is_walk(self) -> bool {
        matches!(self.pose(), Pose::StrideA | Pose::StrideB)
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry group shared by one or more frames.
///
/// The walk cycle alternates two stride poses: walk1/walk3 swing the left
/// arm back, walk2/walk4 mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    StrideA,
    StrideB,
    Jump,
}
