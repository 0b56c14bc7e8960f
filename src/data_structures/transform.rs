//! Mesh placement in world space.
//!
//! Every mesh handed out by a scene backend carries a local vertex buffer plus a
//! `Transform`. Picking works in world space, vertex buffers stay local, so the
//! transform is what converts between the two.

use cgmath::{EuclideanSpace, One, Transform as _};

/// Position, rotation (as quaternion) and scale of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Transform {
    /// Create a new transform with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn translate(&mut self, delta: cgmath::Vector3<f32>) {
        self.position += delta;
    }

    /// Map a point of the local vertex buffer into world space.
    pub fn apply(&self, local: cgmath::Point3<f32>) -> cgmath::Point3<f32> {
        self.to_matrix().transform_point(local)
    }

    pub fn origin(&self) -> cgmath::Point3<f32> {
        cgmath::Point3::from_vec(self.position)
    }
}

impl From<cgmath::Vector3<f32>> for Transform {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, Point3, Rotation3, Vector3};

    use super::*;

    #[test]
    fn translation_moves_points() {
        let mut transform = Transform::from(Vector3::new(1.0, 0.5, -2.0));
        transform.translate(Vector3::new(1.0, 0.0, 1.0));
        let world = transform.apply(Point3::new(1.0, 1.0, 1.0));
        assert_eq!(world, Point3::new(3.0, 1.5, 0.0));
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let transform = Transform {
            position: Vector3::new(0.0, 1.0, 0.0),
            rotation: cgmath::Quaternion::from_angle_y(Deg(90.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        };
        let world = transform.apply(Point3::new(1.0, 0.0, 0.0));
        assert!((world.x - 0.0).abs() < 1e-5);
        assert!((world.y - 1.0).abs() < 1e-5);
        assert!((world.z + 1.0).abs() < 1e-5);
    }
}
