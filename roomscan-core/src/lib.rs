//! Core data structures for roomscan
//!
//! This crate provides the engine-agnostic geometry records the exporter
//! consumes: mesh chunks as produced by an AR scene-reconstruction
//! subsystem, and the affine transforms that place them in the world.

pub mod chunk;
pub mod point;
pub mod transform;

pub use chunk::*;
pub use point::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};
