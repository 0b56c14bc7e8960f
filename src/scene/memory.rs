//! CPU reference implementation of [`SceneBackend`].
//!
//! `MemoryScene` keeps every mesh as plain position/index vectors with a
//! [`Transform`] and answers picks by casting the current pointer ray against
//! the triangles in world space. The ground is a finite quad at `y = 0` whose
//! hits are computed against the plane directly, which keeps ground picks
//! exact.
//!
//! The pointer ray is set by the host (or a test) through [`MemoryScene::aim`]
//! or [`MemoryScene::aim_at`].

use std::collections::BTreeMap;

use cgmath::{Matrix4, Point3, Vector3};

use crate::{
    data_structures::{shape::Shape, transform::Transform},
    geometry::{Ray, extrude::extrude_polygon, triangulate::Triangulator},
    scene::{MarkerKind, Material, MeshId, MeshPick, PickFilter, SceneBackend},
};

/// Default ground extent, in world units.
pub const GROUND_SIZE: f32 = 80.0;
/// Edge length of a point marker.
pub const POINT_MARKER_SIZE: f32 = 0.2;
/// Edge length of the vertex handle.
pub const HANDLE_SIZE: f32 = 0.15;
/// Height `aim_at` casts its rays from.
const AIM_HEIGHT: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Ground,
    Marker(MarkerKind),
    LineLoop,
    Solid,
}

impl MeshKind {
    fn pickable(self, filter: PickFilter) -> bool {
        match (self, filter) {
            (MeshKind::LineLoop, _) => false,
            (MeshKind::Ground, PickFilter::ExcludeGround) => false,
            (MeshKind::Ground, _) => true,
            (_, PickFilter::Ground) => false,
            _ => true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneMesh {
    pub kind: MeshKind,
    pub transform: Transform,
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
    pub material: Option<Material>,
}

impl SceneMesh {
    fn corner(&self, index: u32) -> Option<Point3<f32>> {
        let i = index as usize * 3;
        let local = Point3::new(
            *self.positions.get(i)?,
            *self.positions.get(i + 1)?,
            *self.positions.get(i + 2)?,
        );
        Some(self.transform.apply(local))
    }

    fn cast(&self, ray: &Ray) -> Option<(f32, usize)> {
        if self.kind == MeshKind::Ground {
            return self.cast_ground(ray);
        }
        let mut closest: Option<(f32, usize)> = None;
        for (face, triangle) in self.indices.chunks_exact(3).enumerate() {
            let (Some(a), Some(b), Some(c)) = (
                self.corner(triangle[0]),
                self.corner(triangle[1]),
                self.corner(triangle[2]),
            ) else {
                continue;
            };
            if let Some(t) = ray.intersect_triangle(a, b, c) {
                if closest.is_none_or(|(best, _)| t < best) {
                    closest = Some((t, face));
                }
            }
        }
        closest
    }

    fn cast_ground(&self, ray: &Ray) -> Option<(f32, usize)> {
        let origin = self.transform.origin();
        let t = ray.intersect_horizontal_plane(origin.y)?;
        let hit = ray.at(t);
        let half_x = GROUND_SIZE / 2.0 * self.transform.scale.x;
        let half_z = GROUND_SIZE / 2.0 * self.transform.scale.z;
        let (dx, dz) = (hit.x - origin.x, hit.z - origin.z);
        if dx.abs() > half_x || dz.abs() > half_z {
            return None;
        }
        // quad split along its diagonal, see `ground_buffers`
        let face = if dx >= dz { 0 } else { 1 };
        Some((t, face))
    }
}

/// In-memory scene with a ground quad and a pointer ray.
#[derive(Debug)]
pub struct MemoryScene {
    meshes: BTreeMap<MeshId, SceneMesh>,
    next_id: u64,
    ground: MeshId,
    ray: Option<Ray>,
    camera_attached: bool,
    disposed: Vec<MeshId>,
}

impl MemoryScene {
    pub fn new() -> Self {
        let mut scene = Self {
            meshes: BTreeMap::new(),
            next_id: 0,
            ground: MeshId(0),
            ray: None,
            camera_attached: true,
            disposed: Vec::new(),
        };
        let (positions, indices) = ground_buffers();
        scene.ground = scene.insert(MeshKind::Ground, positions, indices, Transform::new());
        scene
    }

    /// Add a mesh with arbitrary buffers.
    pub fn insert(
        &mut self,
        kind: MeshKind,
        positions: Vec<f32>,
        indices: Vec<u32>,
        transform: Transform,
    ) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.meshes.insert(
            id,
            SceneMesh {
                kind,
                transform,
                positions,
                indices,
                material: None,
            },
        );
        id
    }

    /// Point the pointer ray.
    pub fn aim(&mut self, origin: Point3<f32>, direction: Vector3<f32>) {
        self.ray = Some(Ray::new(origin, direction));
    }

    /// Point the pointer ray straight down onto `(x, z)`.
    pub fn aim_at(&mut self, x: f32, z: f32) {
        self.ray = Some(Ray::vertical(x, z, AIM_HEIGHT));
    }

    /// Pointer outside the viewport: every pick misses.
    pub fn clear_aim(&mut self) {
        self.ray = None;
    }

    pub fn ground(&self) -> MeshId {
        self.ground
    }

    pub fn mesh(&self, id: MeshId) -> Option<&SceneMesh> {
        self.meshes.get(&id)
    }

    pub fn contains(&self, id: MeshId) -> bool {
        self.meshes.contains_key(&id)
    }

    /// Live meshes of `kind`.
    pub fn meshes_of(&self, kind: MeshKind) -> Vec<MeshId> {
        self.meshes
            .iter()
            .filter(|(_, mesh)| mesh.kind == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Every mesh disposed so far, in disposal order.
    pub fn disposed(&self) -> &[MeshId] {
        &self.disposed
    }

    pub fn camera_attached(&self) -> bool {
        self.camera_attached
    }

    fn cast(&self, filter: PickFilter) -> Option<(MeshId, f32, usize)> {
        let ray = self.ray.as_ref()?;
        self.meshes
            .iter()
            .filter(|(_, mesh)| mesh.kind.pickable(filter))
            .filter_map(|(id, mesh)| mesh.cast(ray).map(|(t, face)| (*id, t, face)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBackend for MemoryScene {
    fn pick_point(&self, filter: PickFilter) -> Option<Point3<f32>> {
        self.pick_mesh(filter).map(|pick| pick.point)
    }

    fn pick_mesh(&self, filter: PickFilter) -> Option<MeshPick> {
        let ray = self.ray?;
        let (mesh, t, face) = self.cast(filter)?;
        Some(MeshPick {
            mesh,
            face,
            point: ray.at(t),
        })
    }

    fn create_marker(&mut self, position: Point3<f32>, kind: MarkerKind) -> MeshId {
        let size = match kind {
            MarkerKind::Point => POINT_MARKER_SIZE,
            MarkerKind::Handle => HANDLE_SIZE,
        };
        let (positions, indices) = cube_buffers(size);
        let transform = Transform::from(Vector3::new(position.x, position.y, position.z));
        self.insert(MeshKind::Marker(kind), positions, indices, transform)
    }

    fn create_line_loop(&mut self, points: &[Point3<f32>]) -> MeshId {
        let positions = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        self.insert(MeshKind::LineLoop, positions, Vec::new(), Transform::new())
    }

    fn extrude_polygon(
        &mut self,
        shape: &Shape,
        depth: f32,
        triangulator: &dyn Triangulator,
    ) -> Option<MeshId> {
        let solid = extrude_polygon(shape, depth, triangulator)?;
        Some(self.insert(
            MeshKind::Solid,
            solid.positions,
            solid.indices,
            Transform::new(),
        ))
    }

    fn dispose(&mut self, mesh: MeshId) {
        if mesh == self.ground {
            log::warn!("Refusing to dispose the ground mesh");
            return;
        }
        if self.meshes.remove(&mesh).is_some() {
            self.disposed.push(mesh);
        }
    }

    fn vertex_buffer(&self, mesh: MeshId) -> Option<Vec<f32>> {
        self.meshes.get(&mesh).map(|m| m.positions.clone())
    }

    fn set_vertex_buffer(&mut self, mesh: MeshId, positions: &[f32]) {
        match self.meshes.get_mut(&mesh) {
            Some(m) => {
                m.positions.clear();
                m.positions.extend_from_slice(positions);
            }
            None => log::warn!("Vertex write to unknown mesh {:?}", mesh),
        }
    }

    fn index_buffer(&self, mesh: MeshId) -> Option<Vec<u32>> {
        self.meshes.get(&mesh).map(|m| m.indices.clone())
    }

    fn world_matrix(&self, mesh: MeshId) -> Option<Matrix4<f32>> {
        self.meshes.get(&mesh).map(|m| m.transform.to_matrix())
    }

    fn translate(&mut self, mesh: MeshId, delta: Vector3<f32>) {
        if let Some(m) = self.meshes.get_mut(&mesh) {
            m.transform.translate(delta);
        }
    }

    fn set_material(&mut self, mesh: MeshId, material: Option<Material>) {
        if let Some(m) = self.meshes.get_mut(&mesh) {
            m.material = material;
        }
    }

    fn attach_camera_input(&mut self) {
        self.camera_attached = true;
    }

    fn detach_camera_input(&mut self) {
        self.camera_attached = false;
    }
}

/// Ground quad centred on the origin. Face 0 covers `x >= z`, face 1 the rest.
fn ground_buffers() -> (Vec<f32>, Vec<u32>) {
    let h = GROUND_SIZE / 2.0;
    let positions = vec![
        -h, 0.0, -h, //
        h, 0.0, -h, //
        h, 0.0, h, //
        -h, 0.0, h,
    ];
    (positions, vec![0, 1, 2, 0, 2, 3])
}

/// Axis aligned cube of edge `size` centred on the origin.
fn cube_buffers(size: f32) -> (Vec<f32>, Vec<u32>) {
    let h = size / 2.0;
    let mut positions = Vec::with_capacity(8 * 3);
    for i in 0..8 {
        let sign = |bit: u32| if i & bit == 0 { -h } else { h };
        positions.extend_from_slice(&[sign(1), sign(2), sign(4)]);
    }
    let indices = vec![
        0, 2, 1, 1, 2, 3, // -z
        4, 5, 6, 5, 7, 6, // +z
        0, 1, 4, 1, 5, 4, // -y
        2, 6, 3, 3, 6, 7, // +y
        0, 4, 2, 2, 4, 6, // -x
        1, 3, 5, 3, 7, 5, // +x
    ];
    (positions, indices)
}
