//! Keeping wgpu buffers in sync with a scene backend.
//!
//! [`GpuMirror`] wraps any [`SceneBackend`] and forwards every call to it.
//! Calls that create meshes or rewrite their vertices mark the mesh dirty;
//! disposal forgets it. [`GpuMirror::flush`] then uploads exactly the dirty
//! meshes: new ones get fresh buffers, edited ones are rewritten in place.
//!
//! The mirror holds no GPU handles until the first flush, so the bookkeeping
//! works (and is tested) without a device.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context as _;
use cgmath::{Matrix4, Point3, Vector3};

use crate::{
    data_structures::shape::Shape,
    geometry::triangulate::Triangulator,
    resources::mesh::MeshBuffers,
    scene::{MarkerKind, Material, MeshId, MeshPick, PickFilter, SceneBackend},
};

#[derive(Debug)]
pub struct GpuMirror<S: SceneBackend> {
    inner: S,
    buffers: BTreeMap<MeshId, MeshBuffers>,
    dirty: BTreeSet<MeshId>,
}

impl<S: SceneBackend> GpuMirror<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buffers: BTreeMap::new(),
            dirty: BTreeSet::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Meshes waiting for upload.
    pub fn dirty(&self) -> impl Iterator<Item = MeshId> + '_ {
        self.dirty.iter().copied()
    }

    pub fn is_dirty(&self, mesh: MeshId) -> bool {
        self.dirty.contains(&mesh)
    }

    pub fn buffers(&self, mesh: MeshId) -> Option<&MeshBuffers> {
        self.buffers.get(&mesh)
    }

    /// Mark a mesh the inner backend created on its own (e.g. the ground).
    pub fn track(&mut self, mesh: MeshId) {
        self.dirty.insert(mesh);
    }

    /// Upload every dirty mesh.
    ///
    /// Meshes without triangles (line loops) are skipped. On error the
    /// failing mesh stays dirty and the remaining ones are left for the next
    /// flush.
    pub fn flush(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> anyhow::Result<()> {
        while let Some(mesh) = self.dirty.first().copied() {
            let (Some(positions), Some(indices)) =
                (self.inner.vertex_buffer(mesh), self.inner.index_buffer(mesh))
            else {
                log::warn!("Mesh {:?} is gone from the scene, skipping upload", mesh);
                self.dirty.remove(&mesh);
                continue;
            };
            if indices.is_empty() {
                self.dirty.remove(&mesh);
                continue;
            }

            let refreshed = match self.buffers.get(&mesh) {
                Some(buffers) => buffers.refresh(queue, &positions, &indices).is_ok(),
                None => false,
            };
            if !refreshed {
                let buffers = MeshBuffers::new(device, &format!("{:?}", mesh), &positions, &indices)
                    .with_context(|| format!("Uploading mesh {:?} failed", mesh))?;
                self.buffers.insert(mesh, buffers);
            }
            self.dirty.remove(&mesh);
        }
        Ok(())
    }
}

impl<S: SceneBackend> SceneBackend for GpuMirror<S> {
    fn pick_point(&self, filter: PickFilter) -> Option<Point3<f32>> {
        self.inner.pick_point(filter)
    }

    fn pick_mesh(&self, filter: PickFilter) -> Option<MeshPick> {
        self.inner.pick_mesh(filter)
    }

    fn create_marker(&mut self, position: Point3<f32>, kind: MarkerKind) -> MeshId {
        let mesh = self.inner.create_marker(position, kind);
        self.dirty.insert(mesh);
        mesh
    }

    fn create_line_loop(&mut self, points: &[Point3<f32>]) -> MeshId {
        let mesh = self.inner.create_line_loop(points);
        self.dirty.insert(mesh);
        mesh
    }

    fn extrude_polygon(
        &mut self,
        shape: &Shape,
        depth: f32,
        triangulator: &dyn Triangulator,
    ) -> Option<MeshId> {
        let mesh = self.inner.extrude_polygon(shape, depth, triangulator)?;
        self.dirty.insert(mesh);
        Some(mesh)
    }

    fn dispose(&mut self, mesh: MeshId) {
        self.inner.dispose(mesh);
        self.dirty.remove(&mesh);
        if let Some(buffers) = self.buffers.remove(&mesh) {
            buffers.vertex_buffer.destroy();
            buffers.index_buffer.destroy();
        }
    }

    fn vertex_buffer(&self, mesh: MeshId) -> Option<Vec<f32>> {
        self.inner.vertex_buffer(mesh)
    }

    fn set_vertex_buffer(&mut self, mesh: MeshId, positions: &[f32]) {
        self.inner.set_vertex_buffer(mesh, positions);
        self.dirty.insert(mesh);
    }

    fn index_buffer(&self, mesh: MeshId) -> Option<Vec<u32>> {
        self.inner.index_buffer(mesh)
    }

    fn world_matrix(&self, mesh: MeshId) -> Option<Matrix4<f32>> {
        self.inner.world_matrix(mesh)
    }

    fn translate(&mut self, mesh: MeshId, delta: Vector3<f32>) {
        // transforms live in the instance data, the vertex buffer is unaffected
        self.inner.translate(mesh, delta);
    }

    fn set_material(&mut self, mesh: MeshId, material: Option<Material>) {
        self.inner.set_material(mesh, material);
    }

    fn attach_camera_input(&mut self) {
        self.inner.attach_camera_input();
    }

    fn detach_camera_input(&mut self) {
        self.inner.detach_camera_input();
    }
}
