//! GPU resources for scene meshes.
//!
//! - `mesh` holds the uploaded vertex record, its layout and the buffer pair
//!   created per mesh

pub mod mesh;
