//! Viewer session for skinview
//!
//! This crate owns the application-facing state of the product viewer:
//! - An explicit loaded-or-not scene graph state, replacing any shared
//!   mutable root reference
//! - Application of the configured initial material map on load completion
//! - Camera framing on load and on explicit re-frame requests
//! - Skin selection routed through the tag registry

pub mod config;
pub mod session;

pub use config::*;
pub use session::*;
