//! Catalog of named axonometric view presets.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::frame::OrientationFrame;

/// Named camera orientation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewPreset {
    /// Looking down -Z.
    Top,
    /// Looking up +Z.
    Bottom,
    /// Looking along +Y.
    Front,
    /// Looking along -Y.
    Rear,
    /// Looking along -X.
    Left,
    /// Looking along +X.
    Right,
    /// Two equally foreshortened axes.
    Dimetric,
    /// Three differently foreshortened axes.
    Trimetric,
    /// Isometric from the north-west corner.
    NwIsometric,
    /// Isometric from the south-west corner.
    SwIsometric,
    /// Isometric from the north-east corner.
    NeIsometric,
    /// Isometric from the south-east corner.
    SeIsometric,
}

/// Raw `(view, right, up)` triple of a preset. Not normalized and, for the
/// axonometric presets, not exactly orthogonal; [`OrientationFrame`]
/// orthonormalizes on adoption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetBasis {
    /// View direction.
    pub view: Vec3,
    /// Right vector.
    pub right: Vec3,
    /// Up vector.
    pub up: Vec3,
}

const fn basis(view: [f32; 3], right: [f32; 3], up: [f32; 3]) -> PresetBasis {
    PresetBasis {
        view: Vec3::from_array(view),
        right: Vec3::from_array(right),
        up: Vec3::from_array(up),
    }
}

impl ViewPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Rear,
        Self::Left,
        Self::Right,
        Self::Dimetric,
        Self::Trimetric,
        Self::NwIsometric,
        Self::SwIsometric,
        Self::NeIsometric,
        Self::SeIsometric,
    ];

    /// Basis triple for this preset.
    #[must_use]
    pub const fn basis(self) -> PresetBasis {
        match self {
            Self::Top => basis([0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Self::Bottom => {
                basis([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0])
            }
            Self::Front => basis([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            Self::Rear => {
                basis([0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0])
            }
            Self::Left => {
                basis([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
            }
            Self::Right => {
                basis([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0])
            }
            Self::Dimetric => {
                basis([-2.0, 2.0, -1.0], [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0])
            }
            Self::Trimetric => basis(
                [-0.486, 0.732, -0.477],
                [1.181, 0.778, 0.010],
                [-0.363, 0.568, 1.243],
            ),
            Self::NwIsometric => {
                basis([1.0, -1.0, -1.0], [-1.0, -1.0, 0.0], [1.0, -1.0, 1.0])
            }
            Self::SwIsometric => {
                basis([1.0, 1.0, -1.0], [1.0, -1.0, 0.0], [1.0, 1.0, 0.0])
            }
            Self::NeIsometric => {
                basis([-1.0, -1.0, -1.0], [-1.0, 1.0, 0.0], [-1.0, -1.0, 1.0])
            }
            Self::SeIsometric => {
                basis([-1.0, 1.0, -1.0], [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0])
            }
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Front => "Front",
            Self::Rear => "Rear",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Dimetric => "Dimetric",
            Self::Trimetric => "Trimetric",
            Self::NwIsometric => "NW Isometric",
            Self::SwIsometric => "SW Isometric",
            Self::NeIsometric => "NE Isometric",
            Self::SeIsometric => "SE Isometric",
        }
    }

    /// Orthonormal frame for this preset placed at `position`.
    #[must_use]
    pub fn frame_at(self, position: Vec3) -> OrientationFrame {
        let b = self.basis();
        // Catalog triples are all non-degenerate (see tests).
        OrientationFrame::from_basis(position, b.view, b.up, b.right)
            .unwrap_or_default()
    }

    /// View rotation of this preset.
    #[must_use]
    pub fn rotation(self) -> Quat {
        self.frame_at(Vec3::ZERO).rotation()
    }
}
