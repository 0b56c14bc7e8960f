//! Picking adapter.
//!
//! Thin layer over the picking primitives of a [`SceneBackend`]. Editor
//! components never call the backend's pick functions directly, they go
//! through this module, which
//!
//! 1. clamps point picks to the ground (`y >= 0`) so nothing is ever placed
//!    below the ground plane,
//! 2. bundles a mesh pick with everything needed to reason about the hit
//!    triangle: vertex buffer, index buffer and world matrix.
//!
//! Misses are `None`. Callers treat them as "do nothing".

use cgmath::{Matrix4, Point3, Transform};

use crate::scene::{MeshId, PickFilter, SceneBackend};

/// A mesh hit with the mesh's buffers captured at pick time.
#[derive(Clone, Debug)]
pub struct MeshHit {
    pub mesh: MeshId,
    pub face: usize,
    /// World space hit position (not clamped).
    pub point: Point3<f32>,
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
    pub world: Matrix4<f32>,
}

impl MeshHit {
    /// Vertex buffer index of the `corner`th corner (0..3) of the hit face.
    pub fn corner_index(&self, corner: usize) -> Option<usize> {
        self.indices
            .get(3 * self.face + corner)
            .map(|&index| index as usize)
    }

    /// Local position of vertex `index`.
    pub fn local_vertex(&self, index: usize) -> Option<Point3<f32>> {
        let slots = self.positions.get(3 * index..3 * index + 3)?;
        Some(Point3::new(slots[0], slots[1], slots[2]))
    }

    pub fn world_vertex(&self, index: usize) -> Option<Point3<f32>> {
        self.local_vertex(index)
            .map(|local| self.world.transform_point(local))
    }
}

/// World position under the pointer with `y` clamped to the ground.
pub fn pick_point<S: SceneBackend + ?Sized>(scene: &S, filter: PickFilter) -> Option<Point3<f32>> {
    let mut point = scene.pick_point(filter)?;
    if point.y < 0.0 {
        point.y = 0.0;
    }
    Some(point)
}

/// Ground-only [`pick_point`].
pub fn pick_ground<S: SceneBackend + ?Sized>(scene: &S) -> Option<Point3<f32>> {
    pick_point(scene, PickFilter::Ground)
}

/// Mesh under the pointer, without its buffers.
pub fn pick_target<S: SceneBackend + ?Sized>(scene: &S, filter: PickFilter) -> Option<MeshId> {
    scene.pick_mesh(filter).map(|pick| pick.mesh)
}

/// Mesh under the pointer together with its buffers.
///
/// A hit on a mesh whose buffers cannot be read counts as a miss.
pub fn pick_mesh<S: SceneBackend + ?Sized>(scene: &S, filter: PickFilter) -> Option<MeshHit> {
    let pick = scene.pick_mesh(filter)?;
    let (Some(positions), Some(indices), Some(world)) = (
        scene.vertex_buffer(pick.mesh),
        scene.index_buffer(pick.mesh),
        scene.world_matrix(pick.mesh),
    ) else {
        log::warn!(
            "Picked mesh {:?} has no readable buffers, ignoring the hit",
            pick.mesh
        );
        return None;
    };
    Some(MeshHit {
        mesh: pick.mesh,
        face: pick.face,
        point: pick.point,
        positions,
        indices,
        world,
    })
}
