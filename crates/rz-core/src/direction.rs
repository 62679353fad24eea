//! Compass directions for the eight resize handles.
//!
//! A single table (`Direction::axis_effect`) describes how each handle maps
//! pointer movement onto width and height. Both the size reducer and the
//! aspect-ratio constraint read from it, so the two can never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which edge or corner handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// Sign of a handle's contribution to each axis: `-1`, `0`, or `+1`.
///
/// `width: +1` means moving the pointer right grows the width; `-1` means
/// moving it left grows the width; `0` means the handle leaves width alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisEffect {
    pub width: i8,
    pub height: i8,
}

/// The dimension that drives the other when aspect ratio is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Direction {
    /// All handles, clockwise from the top edge.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Per-axis contribution of this handle.
    pub const fn axis_effect(self) -> AxisEffect {
        let (width, height) = match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        };
        AxisEffect { width, height }
    }

    /// Dimension that stays authoritative under an aspect lock.
    ///
    /// Edge handles that only touch height (top, bottom) drive height;
    /// everything that touches width, corners included, drives width.
    pub const fn aspect_authority(self) -> Axis {
        if self.axis_effect().width == 0 {
            Axis::Height
        } else {
            Axis::Width
        }
    }

    /// Whether this handle sits on a corner (moves both axes).
    pub const fn is_corner(self) -> bool {
        let effect = self.axis_effect();
        effect.width != 0 && effect.height != 0
    }

    /// Stable camelCase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::TopRight => "topRight",
            Direction::Right => "right",
            Direction::BottomRight => "bottomRight",
            Direction::Bottom => "bottom",
            Direction::BottomLeft => "bottomLeft",
            Direction::Left => "left",
            Direction::TopLeft => "topLeft",
        }
    }

    /// Position of this handle in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("unknown resize direction: {s:?}"))
    }
}
