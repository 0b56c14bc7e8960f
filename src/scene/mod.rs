//! The rendering collaborator.
//!
//! The editor never talks to a renderer directly. Everything it needs from the
//! scene (picking under the pointer, creating cue meshes, extruding polygons,
//! reading and writing vertex buffers, materials and camera input) goes
//! through [`SceneBackend`]. A host implements it on top of its engine; the
//! crate ships [`memory::MemoryScene`], a CPU implementation used for headless
//! hosts and tests, and [`crate::gpu::GpuMirror`], a decorator that keeps wgpu
//! buffers in sync with any backend.
//!
//! # Key types
//!
//! - [`MeshId`] is an opaque handle to a mesh owned by the backend
//! - [`PickFilter`] restricts which meshes a pick considers
//! - [`MeshPick`] is the raw result of a mesh pick
//! - [`Material`] are the highlight materials the editor applies
//!

pub mod memory;

use cgmath::{Matrix4, Point3, Vector3};

use crate::{data_structures::shape::Shape, geometry::triangulate::Triangulator};

/// Handle to a mesh living in the scene backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u64);

/// Which meshes a pick is tested against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickFilter {
    /// Only the ground plane.
    Ground,
    /// Every pickable mesh except the ground plane.
    ExcludeGround,
    /// Every pickable mesh.
    Any,
}

/// Raw result of a mesh pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPick {
    pub mesh: MeshId,
    /// Index of the hit triangle in the mesh's index buffer (`3 * face` is its first index).
    pub face: usize,
    /// World space hit position.
    pub point: Point3<f32>,
}

/// The marker meshes the editor asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A placed polygon point while drawing.
    Point,
    /// The draggable handle of the vertex editor.
    Handle,
}

/// Highlight materials. `None` in [`SceneBackend::set_material`] restores the mesh default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// A solid being dragged by the mover.
    Moving,
    /// The vertex handle while it waits for a drag.
    Handle,
    /// The vertex handle during a drag.
    HandleDragging,
}

impl Material {
    pub fn diffuse(self) -> wgpu::Color {
        match self {
            Material::Moving => wgpu::Color::RED,
            Material::Handle => wgpu::Color {
                r: 0.47,
                g: 1.0,
                b: 0.07,
                a: 1.0,
            },
            Material::HandleDragging => wgpu::Color {
                r: 1.0,
                g: 1.0,
                b: 0.0,
                a: 1.0,
            },
        }
    }
}

/// Everything the interaction core consumes from the scene.
///
/// All calls happen on the event loop thread, one at a time. Meshes that were
/// disposed (or never existed) are ignored by the mutating calls and yield
/// `None` from the reading ones.
pub trait SceneBackend {
    /// World position under the pointer, restricted by `filter`.
    fn pick_point(&self, filter: PickFilter) -> Option<Point3<f32>>;

    /// Mesh and triangle under the pointer, restricted by `filter`.
    fn pick_mesh(&self, filter: PickFilter) -> Option<MeshPick>;

    fn create_marker(&mut self, position: Point3<f32>, kind: MarkerKind) -> MeshId;

    /// A closed polyline through `points` in order.
    fn create_line_loop(&mut self, points: &[Point3<f32>]) -> MeshId;

    /// Build a solid from `shape`, `depth` high, filled by `triangulator`.
    ///
    /// Returns `None` when the shape is degenerate.
    fn extrude_polygon(
        &mut self,
        shape: &Shape,
        depth: f32,
        triangulator: &dyn Triangulator,
    ) -> Option<MeshId>;

    fn dispose(&mut self, mesh: MeshId);

    /// Local positions, interleaved `x, y, z`.
    fn vertex_buffer(&self, mesh: MeshId) -> Option<Vec<f32>>;

    /// Replace the local positions and refresh the geometry.
    fn set_vertex_buffer(&mut self, mesh: MeshId, positions: &[f32]);

    fn index_buffer(&self, mesh: MeshId) -> Option<Vec<u32>>;

    fn world_matrix(&self, mesh: MeshId) -> Option<Matrix4<f32>>;

    fn translate(&mut self, mesh: MeshId, delta: Vector3<f32>);

    fn set_material(&mut self, mesh: MeshId, material: Option<Material>);

    fn attach_camera_input(&mut self);

    fn detach_camera_input(&mut self);
}
