//! Axis-aligned section planes.
//!
//! Each world axis carries one section plane. An enabled plane keeps the
//! half-space on its positive side; flipping it keeps the other side.

use glam::{Vec3, Vec4};

use crate::camera::frustum::Plane;

/// World axis of a section plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Plane `x = offset`.
    X,
    /// Plane `y = offset`.
    Y,
    /// Plane `z = offset`.
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// One section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionPlane {
    /// Whether the plane clips.
    pub enabled: bool,
    /// Keep the negative side instead of the positive one.
    pub flipped: bool,
    /// Position of the plane along its axis.
    pub offset: f32,
}

/// The X, Y and Z section planes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipPlanes {
    planes: [SectionPlane; 3],
}

impl ClipPlanes {
    /// Settings of the plane on `axis`.
    #[must_use]
    pub fn plane(&self, axis: Axis) -> SectionPlane {
        self.planes[axis.index()]
    }

    /// Replace the plane on `axis`.
    pub fn set_plane(&mut self, axis: Axis, plane: SectionPlane) {
        self.planes[axis.index()] = plane;
    }

    /// Enable or disable the plane on `axis`.
    pub fn set_enabled(&mut self, axis: Axis, enabled: bool) {
        self.planes[axis.index()].enabled = enabled;
    }

    /// Flip which side of the plane on `axis` is kept.
    pub fn set_flipped(&mut self, axis: Axis, flipped: bool) {
        self.planes[axis.index()].flipped = flipped;
    }

    /// Move the plane on `axis`.
    pub fn set_offset(&mut self, axis: Axis, offset: f32) {
        self.planes[axis.index()].offset = offset;
    }

    /// Disable every plane and zero the offsets.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any plane clips.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.planes.iter().any(|p| p.enabled)
    }

    /// World-space equation of the plane on `axis`; its positive side is
    /// the kept side.
    #[must_use]
    pub fn equation(&self, axis: Axis) -> Plane {
        let plane = self.plane(axis);
        let sign = if plane.flipped { -1.0 } else { 1.0 };
        Plane::new(axis.unit() * sign, -plane.offset * sign)
    }

    /// Equations of all three planes, X, Y, Z. Disabled planes encode as
    /// zero so a shader test `dot(p, eq) >= 0` always keeps.
    #[must_use]
    pub fn equations(&self) -> [Vec4; 3] {
        Axis::ALL.map(|axis| {
            if self.plane(axis).enabled {
                self.equation(axis).to_vec4()
            } else {
                Vec4::ZERO
            }
        })
    }

    /// Whether `point` is cut away by any enabled plane.
    #[must_use]
    pub fn clips(&self, point: Vec3) -> bool {
        Axis::ALL.into_iter().any(|axis| {
            self.plane(axis).enabled
                && self.equation(axis).distance_to_point(point) < 0.0
        })
    }
}
