//! Reshaping solids by dragging a vertex.
//!
//! A secondary click on a solid selects the corner of the hit triangle that is
//! closest to the hit point and drops a handle on it. Dragging the handle then
//! rewrites the solid's vertex buffer: every slot holding the corner's original
//! X takes the pointer's X, every slot holding its original Z takes the
//! pointer's Z. Because extruded solids are axis-aligned sweeps, this moves
//! the whole wall edge through the corner and keeps the silhouette straight.
//!
//! State machine: Idle -> HandleActive (secondary down) -> Dragging (primary
//! down) -> Idle (up disposes the handle).

use cgmath::{InnerSpace, Point3};

use crate::{
    pick::{self, MeshHit},
    scene::{MarkerKind, Material, MeshId, PickFilter, SceneBackend},
};

/// Vertex buffer slots coupled to one selected corner.
///
/// Only valid for the mesh it was collected from.
#[derive(Clone, Debug, PartialEq)]
pub struct CoupledVertexSet {
    pub mesh: MeshId,
    /// Slots whose value equals the corner's original local X.
    pub x_indexes: Vec<usize>,
    /// Slots whose value equals the corner's original local Z.
    pub z_indexes: Vec<usize>,
}

impl CoupledVertexSet {
    /// Scan every slot of `positions` for `x` and `z`.
    pub fn collect(mesh: MeshId, positions: &[f32], x: f32, z: f32) -> Self {
        let mut x_indexes = Vec::new();
        let mut z_indexes = Vec::new();
        for (slot, &value) in positions.iter().enumerate() {
            if value == x {
                x_indexes.push(slot);
            }
            if value == z {
                z_indexes.push(slot);
            }
        }
        Self {
            mesh,
            x_indexes,
            z_indexes,
        }
    }

    /// Write `target.x` into the X slots, then `target.z` into the Z slots.
    pub fn apply(&self, positions: &mut [f32], target: Point3<f32>) {
        for &slot in &self.x_indexes {
            if let Some(value) = positions.get_mut(slot) {
                *value = target.x;
            }
        }
        for &slot in &self.z_indexes {
            if let Some(value) = positions.get_mut(slot) {
                *value = target.z;
            }
        }
    }
}

/// The hit triangle's corner closest to the hit point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub index: usize,
    pub local: Point3<f32>,
    pub world: Point3<f32>,
}

/// Closest corner of the hit face; the first corner wins ties.
pub fn nearest_corner(hit: &MeshHit) -> Option<Corner> {
    let mut best: Option<(f32, Corner)> = None;
    for corner in 0..3 {
        let index = hit.corner_index(corner)?;
        let local = hit.local_vertex(index)?;
        let world = hit.world_vertex(index)?;
        let distance = (world - hit.point).magnitude();
        if best.is_none_or(|(min, _)| distance < min) {
            best = Some((distance, Corner { index, local, world }));
        }
    }
    best.map(|(_, corner)| corner)
}

#[derive(Debug, Default)]
pub struct VertexEditor {
    handle: Option<MeshId>,
    selection: Option<CoupledVertexSet>,
    reference: Option<Point3<f32>>,
}

impl VertexEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Option<MeshId> {
        self.handle
    }

    pub fn selection(&self) -> Option<&CoupledVertexSet> {
        self.selection.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.reference.is_some()
    }

    /// Select the corner under the pointer and put a handle on it.
    ///
    /// Any previous handle and selection are dropped first, also when the
    /// pick misses.
    pub fn spawn_handle<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        self.dispose_handle(scene);
        let Some(hit) = pick::pick_mesh(scene, PickFilter::ExcludeGround) else {
            log::trace!("No mesh under the pointer, no handle");
            return false;
        };
        let Some(corner) = nearest_corner(&hit) else {
            log::warn!(
                "Face {} of {:?} does not resolve to three vertices",
                hit.face,
                hit.mesh
            );
            return false;
        };
        let selection =
            CoupledVertexSet::collect(hit.mesh, &hit.positions, corner.local.x, corner.local.z);
        log::debug!(
            "Selected vertex {} of {:?}: {} x-coupled and {} z-coupled slots",
            corner.index,
            hit.mesh,
            selection.x_indexes.len(),
            selection.z_indexes.len()
        );
        let handle = scene.create_marker(corner.world, MarkerKind::Handle);
        scene.set_material(handle, Some(Material::Handle));
        self.handle = Some(handle);
        self.selection = Some(selection);
        true
    }

    /// Start dragging the handle. Returns `true` when a drag started; the
    /// caller then detaches camera input once the current event is handled.
    pub fn begin_drag<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        let Some(handle) = self.handle else {
            return false;
        };
        scene.set_material(handle, Some(Material::HandleDragging));
        self.reference = pick::pick_point(scene, PickFilter::ExcludeGround);
        self.reference.is_some()
    }

    /// Follow the pointer by one tick.
    pub fn drag<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) {
        let (Some(handle), Some(reference), Some(selection)) =
            (self.handle, self.reference, self.selection.as_ref())
        else {
            return;
        };
        let Some(current) = pick::pick_point(scene, PickFilter::ExcludeGround) else {
            return;
        };
        let Some(mut positions) = scene.vertex_buffer(selection.mesh) else {
            log::warn!("Mesh {:?} vanished during a vertex drag", selection.mesh);
            return;
        };
        scene.translate(handle, current - reference);
        selection.apply(&mut positions, current);
        scene.set_vertex_buffer(selection.mesh, &positions);
        self.reference = Some(current);
    }

    /// Release the drag and drop the handle. Returns `true` if a drag was active.
    pub fn end_drag<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        if self.reference.take().is_none() {
            return false;
        }
        scene.attach_camera_input();
        if let Some(handle) = self.handle {
            scene.set_material(handle, Some(Material::Handle));
        }
        self.dispose_handle(scene);
        true
    }

    /// Dispose the handle and forget the selection.
    pub fn dispose_handle<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) {
        if let Some(handle) = self.handle.take() {
            scene.dispose(handle);
        }
        self.selection = None;
    }
}
