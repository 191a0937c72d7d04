//! Core data structures and traits for skinview
//!
//! This crate provides the fundamental types for the product-viewer core:
//! the arena-based scene graph, material variants and their catalog, and
//! axis-aligned bounding volumes.

pub mod bounds;
pub mod error;
pub mod graph;
pub mod material;

pub use bounds::*;
pub use error::*;
pub use graph::*;
pub use material::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Common result type for skinview operations
pub type Result<T> = std::result::Result<T, Error>;
