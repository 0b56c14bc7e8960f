//! Ground-plane polygon triangulation.
//!
//! Extrusion needs the cap of a drawn outline as triangles. Outlines come
//! straight from user clicks, so they are frequently concave and sometimes
//! self-intersecting. Ear clipping (`geo`'s earcut binding) copes with both.

use geo::{Coord, LineString, Polygon, TriangulateEarcut};

/// A 2D triangle in outline coordinates (`[x, z]`).
pub type Triangle2 = [[f32; 2]; 3];

/// Turns a simple outline (not closed, no duplicates) into triangles.
pub trait Triangulator {
    fn triangulate(&self, outline: &[[f32; 2]]) -> Vec<Triangle2>;
}

/// Ear clipping triangulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Earcut;

impl Triangulator for Earcut {
    fn triangulate(&self, outline: &[[f32; 2]]) -> Vec<Triangle2> {
        if outline.len() < 3 {
            return Vec::new();
        }
        let coords: Vec<Coord<f64>> = outline
            .iter()
            .map(|&[x, z]| Coord {
                x: f64::from(x),
                y: f64::from(z),
            })
            .collect();
        let polygon = Polygon::new(LineString::new(coords), vec![]);

        let triangulation = polygon.earcut_triangles_raw();
        let vertices = triangulation.vertices;
        let corner = |i: usize| [vertices[2 * i] as f32, vertices[2 * i + 1] as f32];
        triangulation
            .triangle_indices
            .chunks_exact(3)
            .map(|tri| [corner(tri[0]), corner(tri[1]), corner(tri[2])])
            .collect()
    }
}
