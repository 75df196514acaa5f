//! Viewport regions, the single/quad layout, and region-scoped
//! project/unproject.
//!
//! Regions are in window pixels with a top-left origin, matching pointer
//! coordinates. Projection goes through normalized device coordinates with
//! the wgpu [0, 1] depth range.

use glam::{Mat4, Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::preset::ViewPreset;

/// Axis-aligned pixel rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRegion {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ViewportRegion {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width` x `height` window.
    #[must_use]
    pub const fn full(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Normalized rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether `point` lies inside, edges inclusive.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Project a world point into this region.
    ///
    /// Returns `(pixel x, pixel y, depth)`; depth is NDC z in [0, 1] for
    /// points between the near and far planes.
    #[must_use]
    pub fn project(&self, world: Vec3, view_proj: Mat4) -> Vec3 {
        let ndc = view_proj.project_point3(world);
        Vec3::new(
            self.x + (ndc.x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - ndc.y) * 0.5 * self.height,
            ndc.z,
        )
    }

    /// Map a pixel position plus NDC depth back to world space.
    ///
    /// `inv_view_proj` is the inverse of the matrix used for
    /// [`Self::project`]. Zero-size regions are treated as one pixel.
    #[must_use]
    pub fn unproject(&self, screen: Vec3, inv_view_proj: Mat4) -> Vec3 {
        let w = if self.width > 0.0 { self.width } else { 1.0 };
        let h = if self.height > 0.0 { self.height } else { 1.0 };
        let ndc = Vec3::new(
            (screen.x - self.x) / w * 2.0 - 1.0,
            1.0 - (screen.y - self.y) / h * 2.0,
            screen.z,
        );
        inv_view_proj.project_point3(ndc)
    }
}

/// Window layout: one shared view or four fixed-preset quadrants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewLayout {
    /// A single viewport showing the navigated camera.
    #[default]
    Single,
    /// Front, Left, Top and SE isometric quadrants.
    Quad,
}

/// One viewport of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportView {
    /// Fixed orientation of the viewport, `None` for the navigated camera.
    pub preset: Option<ViewPreset>,
    /// Pixel rectangle.
    pub region: ViewportRegion,
}

impl ViewLayout {
    /// Viewports of this layout for a `width` x `height` window.
    ///
    /// Quad order is top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn regions(self, width: f32, height: f32) -> Vec<ViewportView> {
        match self {
            Self::Single => vec![ViewportView {
                preset: None,
                region: ViewportRegion::full(width, height),
            }],
            Self::Quad => {
                let (hw, hh) = (width * 0.5, height * 0.5);
                [
                    (ViewPreset::Front, 0.0, 0.0),
                    (ViewPreset::Left, hw, 0.0),
                    (ViewPreset::Top, 0.0, hh),
                    (ViewPreset::SeIsometric, hw, hh),
                ]
                .into_iter()
                .map(|(preset, x, y)| ViewportView {
                    preset: Some(preset),
                    region: ViewportRegion::new(x, y, hw, hh),
                })
                .collect()
            }
        }
    }

    /// Viewport under `point`. Points on a shared edge belong to the
    /// earlier quadrant; points outside the window clamp to the nearest
    /// one.
    #[must_use]
    pub fn region_at(self, width: f32, height: f32, point: Vec2) -> ViewportView {
        let views = self.regions(width, height);
        let index = match self {
            Self::Single => 0,
            Self::Quad => {
                let right = usize::from(point.x > width * 0.5);
                let bottom = usize::from(point.y > height * 0.5);
                bottom * 2 + right
            }
        };
        views[index]
    }
}
