//! Editor components driven by the [`crate::controller::Controller`].
//!
//! - `mode` holds the exclusive interaction mode and the button affordances
//! - `drawing` accumulates clicked points into closed shapes
//! - `extrude` turns closed shapes into solids
//! - `mover` drags whole solids across the ground
//! - `vertex_edit` reshapes solids by dragging a corner handle
//!
//! Components own their state but never the scene: every operation borrows the
//! [`crate::scene::SceneBackend`] for the duration of the call.

pub mod drawing;
pub mod extrude;
pub mod mode;
pub mod mover;
pub mod vertex_edit;
