//! Camera state consumed by the renderer collaborator

use nalgebra::{Matrix4, Perspective3, Vector3};
use serde::{Deserialize, Serialize};

use skinview_core::Point3f;

/// A perspective camera pose with its clipping planes
///
/// Invariant: `near > 0` and `far > near`; the solver produces both scaled
/// to the framed volume's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Point3f,
    /// Look-at target; after framing this is exactly the volume center
    pub target: Point3f,
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraState {
    /// Get the view matrix (y-up, right-handed)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }

    /// Get the projection matrix for the given viewport aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        let perspective =
            Perspective3::new(aspect, self.fov_y_deg.to_radians(), self.near, self.far);
        perspective.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_view_matrix_is_well_formed() {
        let camera = CameraState {
            position: Point3::new(0.0, 10.0, 20.0),
            target: Point3::origin(),
            fov_y_deg: 50.0,
            near: 0.1,
            far: 1000.0,
        };
        let view = camera.view_matrix();
        assert!(view.norm() > 0.0);
        // The target must land on the negative view-space z axis.
        let target_in_view = view.transform_point(&camera.target);
        assert!(target_in_view.z < 0.0);
        assert!(target_in_view.x.abs() < 1e-4);
        assert!(target_in_view.y.abs() < 1e-4);
    }

    #[test]
    fn test_projection_matrix_is_well_formed() {
        let camera = CameraState {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            fov_y_deg: 50.0,
            near: 0.2,
            far: 2000.0,
        };
        let projection = camera.projection_matrix(16.0 / 9.0);
        assert!(projection.norm() > 0.0);
    }
}
