use glam::Mat4;

use crate::camera::controller::{CameraController, ViewportCamera};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices, metadata and section
/// planes of one viewport.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix, for view-space lighting.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Diameter of the visible world region.
    pub view_range: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Field of view in degrees.
    pub field_of_view: f32,
    /// Section plane equations (X, Y, Z); zero when disabled.
    pub clip_planes: [[f32; 4]; 3],
    /// 1 when any section plane is enabled.
    pub section_active: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 3],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            view_range: 1.0,
            forward: [0.0, 0.0, -1.0],
            field_of_view: 60.0,
            clip_planes: [[0.0; 4]; 3],
            section_active: 0,
            _pad: [0; 3],
        }
    }

    /// Update from the navigated camera.
    pub fn update(&mut self, camera: &CameraController) {
        let view = camera.view_matrix();
        self.fill(camera, view, camera.projection_matrix());
    }

    /// Update from one viewport of the active layout.
    pub fn update_viewport(
        &mut self,
        camera: &CameraController,
        viewport: &ViewportCamera,
    ) {
        self.fill(camera, viewport.view, viewport.projection);
    }

    fn fill(&mut self, camera: &CameraController, view: Mat4, projection: Mat4) {
        self.view_proj = (projection * view).to_cols_array_2d();
        self.view = view.to_cols_array_2d();
        self.position = camera.position().to_array();
        self.view_range = camera.view_range();
        // Third row of the view rotation is -forward.
        self.forward = (-view.row(2).truncate()).normalize_or_zero().to_array();
        self.field_of_view = camera.projection().field_of_view;
        self.clip_planes = camera
            .clip_planes()
            .equations()
            .map(|plane| plane.to_array());
        self.section_active = u32::from(camera.clip_planes().any_enabled());
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::clipping::Axis;
    use crate::camera::preset::ViewPreset;
    use crate::camera::viewport::ViewLayout;
    use crate::options::Options;

    #[test]
    fn layout_is_gpu_aligned() {
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
        let uniform = CameraUniform::new();
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), size_of::<CameraUniform>());
    }

    #[test]
    fn update_reflects_camera() {
        let mut camera = CameraController::new(&Options::default(), 800.0, 600.0);
        camera.clip_planes_mut().set_enabled(Axis::Y, true);
        camera.clip_planes_mut().set_offset(Axis::Y, 3.0);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera);

        let forward = Vec3::from_array(uniform.forward);
        assert!(forward.abs_diff_eq(camera.frame().view_direction(), 1e-4));
        assert_eq!(uniform.view_range, 200.0);
        assert_eq!(uniform.section_active, 1);
        assert_eq!(uniform.clip_planes[1], [0.0, 1.0, 0.0, -3.0]);
        assert_eq!(uniform.clip_planes[0], [0.0; 4]);
    }

    #[test]
    fn viewport_update_uses_quadrant_view() {
        let mut camera = CameraController::new(&Options::default(), 800.0, 600.0);
        camera.set_layout(ViewLayout::Quad);
        let top = camera
            .viewports()
            .into_iter()
            .find(|v| v.preset == Some(ViewPreset::Top))
            .unwrap();

        let mut uniform = CameraUniform::new();
        uniform.update_viewport(&camera, &top);
        assert!(Vec3::from_array(uniform.forward).abs_diff_eq(Vec3::NEG_Z, 1e-4));
        assert_eq!(uniform.section_active, 0);
    }
}
