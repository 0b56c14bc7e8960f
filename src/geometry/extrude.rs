//! Sweeping a ground-plane outline into a solid.
//!
//! The solid spans local `y = 0` (base) to `y = depth` (top). Both caps come
//! from the triangulator, the side walls are one quad per outline edge. The
//! result is flat shaded: no vertex is shared between two triangles, so every
//! face keeps its own normal and edges render hard. Every triangle is emitted
//! with both windings, which makes the solid visible from inside and outside.

use crate::{
    data_structures::shape::Shape,
    geometry::triangulate::{Triangle2, Triangulator},
};

/// CPU-side buffers of an extruded solid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolidGeometry {
    /// Interleaved `x, y, z` per vertex.
    pub positions: Vec<f32>,
    /// Triangle list.
    pub indices: Vec<u32>,
}

impl SolidGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_double_sided(&mut self, a: [f32; 3], b: [f32; 3], c: [f32; 3]) {
        for corners in [[a, b, c], [a, c, b]] {
            let base = self.vertex_count() as u32;
            for corner in corners {
                self.positions.extend_from_slice(&corner);
            }
            self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
    }
}

/// Extrude `shape` by `depth`.
///
/// Returns `None` for degenerate outlines (fewer than three distinct points,
/// or nothing the triangulator could fill).
pub fn extrude_polygon(
    shape: &Shape,
    depth: f32,
    triangulator: &dyn Triangulator,
) -> Option<SolidGeometry> {
    let outline = shape.outline();
    if outline.len() < 3 {
        return None;
    }
    let caps: Vec<Triangle2> = triangulator.triangulate(&outline);
    if caps.is_empty() {
        return None;
    }

    let mut solid = SolidGeometry::default();
    let lift = |[x, z]: [f32; 2], y: f32| [x, y, z];

    for [a, b, c] in &caps {
        solid.push_double_sided(lift(*a, 0.0), lift(*b, 0.0), lift(*c, 0.0));
        solid.push_double_sided(lift(*a, depth), lift(*b, depth), lift(*c, depth));
    }

    for (i, &from) in outline.iter().enumerate() {
        let to = outline[(i + 1) % outline.len()];
        let (b0, b1) = (lift(from, 0.0), lift(to, 0.0));
        let (t0, t1) = (lift(from, depth), lift(to, depth));
        solid.push_double_sided(b0, b1, t1);
        solid.push_double_sided(b0, t1, t0);
    }

    Some(solid)
}
