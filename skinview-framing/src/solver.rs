//! Bounding-frame camera solver
//!
//! Given a bounding volume, computes a camera position, orientation and
//! near/far clip planes that fit the volume in view. The solver preserves
//! the horizontal orbit angle of the current camera but normalizes distance
//! and clip planes to the volume's scale, so re-framing behaves the same
//! for a matchbox and a building.

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use skinview_core::{Aabb, Point3f, Vector3f};

use crate::camera::CameraState;

/// Clamp for degenerate volumes so clip planes stay positive
const MIN_VOLUME_SIZE: f32 = 1e-6;

/// Tunable parameters of the framing heuristic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingParams {
    /// Nominal camera distance from the volume center, independent of
    /// volume size
    pub distance: f32,
    /// Divisor applied to the vertical component of the current viewing
    /// direction before normalization. Values well above 1 pull the camera
    /// toward an eye-level vantage even if it was previously far above or
    /// below the asset.
    pub vertical_damping: f32,
}

impl Default for FramingParams {
    fn default() -> Self {
        Self {
            distance: 10.0,
            vertical_damping: 20.0,
        }
    }
}

/// Compute a camera pose framing the given bounding volume
///
/// The direction from the volume center to `current_position` (with its
/// vertical component damped) determines the vantage; the camera is placed
/// at a fixed nominal distance along it and pointed at the center. Clip
/// planes scale with the volume: `near = size / 100`, `far = size * 100`,
/// so the full volume always lies within `[near, far]` along the optical
/// axis.
///
/// A camera sitting exactly at the volume center would yield a degenerate
/// direction; the solver falls back to a fixed default direction instead of
/// producing NaN output.
pub fn frame_bounds(
    current_position: Point3f,
    bounds: &Aabb,
    fov_y_deg: f32,
    params: &FramingParams,
) -> CameraState {
    let center = bounds.center();
    let size = bounds.size().max(MIN_VOLUME_SIZE);

    let mut offset: Vector3f = current_position - center;
    offset.y /= params.vertical_damping;
    let direction = offset
        .try_normalize(MIN_VOLUME_SIZE)
        .unwrap_or_else(Vector3::z);

    let camera = CameraState {
        position: center + direction * params.distance,
        target: center,
        fov_y_deg,
        near: size / 100.0,
        far: size * 100.0,
    };
    debug!(
        "framed volume of size {} at {:?}: camera at {:?}",
        size, center, camera.position
    );
    camera
}
