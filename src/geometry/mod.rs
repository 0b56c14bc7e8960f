//! Pure geometry used by the editor and by the reference scene.
//!
//! - `triangulate` turns a ground-plane outline into triangles (ear clipping)
//! - `extrude` sweeps a triangulated outline into a flat shaded solid
//!
//! This module also carries the ray type used for picking and the flat normal
//! computation shared by the GPU mirror.

pub mod extrude;
pub mod triangulate;

use cgmath::{InnerSpace, Point3, Vector3};

const EPSILON: f32 = 0.000_000_1;

/// A pick ray in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    /// A ray pointing straight down onto `(x, z)` from `height`.
    pub fn vertical(x: f32, z: f32, height: f32) -> Self {
        Self {
            origin: Point3::new(x, height, z),
            direction: Vector3::new(0.0, -1.0, 0.0),
        }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }

    /// Möller-Trumbore intersection. Returns the ray parameter of the hit.
    pub fn intersect_triangle(
        &self,
        v0: Point3<f32>,
        v1: Point3<f32>,
        v2: Point3<f32>,
    ) -> Option<f32> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);

        // parallel
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = self.origin - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > EPSILON).then_some(t)
    }

    /// Intersection with the horizontal plane at `height`.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<f32> {
        if self.direction.y.abs() < EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t > EPSILON).then_some(t)
    }
}

/// Per-vertex normals of a flat shaded triangle list.
///
/// Every corner receives the normal of the (last) triangle referencing it,
/// which is exact for meshes that share no vertices between faces.
pub fn flat_normals(positions: &[f32], indices: &[u32]) -> Vec<[f32; 3]> {
    let vertex = |i: u32| -> Option<Point3<f32>> {
        let i = i as usize * 3;
        Some(Point3::new(
            *positions.get(i)?,
            *positions.get(i + 1)?,
            *positions.get(i + 2)?,
        ))
    };
    let mut normals = vec![[0.0; 3]; positions.len() / 3];
    for triangle in indices.chunks_exact(3) {
        let (Some(a), Some(b), Some(c)) = (
            vertex(triangle[0]),
            vertex(triangle[1]),
            vertex(triangle[2]),
        ) else {
            log::warn!("Triangle {:?} references a vertex outside the buffer", triangle);
            continue;
        };
        let normal = (b - a).cross(c - a);
        let normal = if normal.magnitude2() > 0.0 {
            normal.normalize()
        } else {
            normal
        };
        for &corner in triangle {
            normals[corner as usize] = normal.into();
        }
    }
    normals
}
