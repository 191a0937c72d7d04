//! Mesh tagging and material binding for skinview
//!
//! This crate establishes durable semantic identities ("the book cover
//! surface") for scene nodes matched by naming pattern, then lets materials
//! be rebound through those identities no matter how often the nodes are
//! renamed afterwards.

pub mod registry;

pub use registry::*;
