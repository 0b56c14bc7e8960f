//! Editor data structures.
//!
//! - `shape` is an outline drawn on the ground, the input of extrusion
//! - `transform` holds per-mesh position, rotation and scale

pub mod shape;
pub mod transform;
