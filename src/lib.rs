//! flow-extrude
//!
//! Interaction core of a small 3D modelling viewport: draw a polygon on the
//! ground with mouse clicks, close it, extrude it into a solid, then move whole
//! solids around or drag single vertices to reshape them. The crate holds the
//! state machine and the geometry; rendering stays with the host and is
//! reached through the [`scene::SceneBackend`] trait. Like the engine it grew
//! out of, it targets native and WASM alike.
//!
//! High-level modules
//! - `controller`: the single owner of editor state, pointer event dispatch
//! - `editor`: mode handling, drawing, extrusion, mesh moving, vertex editing
//! - `scene`: the backend trait plus an in-memory reference backend
//! - `pick`: picking adapter on top of the backend
//! - `geometry`: rays, triangulation and extrusion
//! - `data_structures`: shapes and mesh transforms
//! - `gpu` / `resources`: mirroring scene meshes into wgpu buffers
//! - `input`: winit pointer event translation
//! - `config` / `logging`: tunables and logger setup
//!

pub mod config;
pub mod controller;
pub mod data_structures;
pub mod editor;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod logging;
pub mod pick;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Point3, Vector3};
pub use config::EditorConfig;
pub use controller::{Controller, PointerButton, PointerEvent};
pub use editor::mode::{Mode, ModeKind, Toggle};
pub use scene::{MeshId, SceneBackend};
