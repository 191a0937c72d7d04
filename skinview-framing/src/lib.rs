//! Camera framing for skinview
//!
//! This crate computes a camera pose and clipping planes that keep an
//! arbitrary bounding volume in view regardless of asset scale:
//! - Camera state with view/projection helpers for the renderer
//! - The bounding-frame solver with tunable framing parameters

pub mod camera;
pub mod solver;

pub use camera::*;
pub use solver::*;
