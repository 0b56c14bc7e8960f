//! Extrusion of closed shapes into solids.
//!
//! Shapes are moved into [`ExtrusionEngine::extrude`] by value and consumed
//! there, each exactly once. Solids belong to the scene; the engine only
//! remembers their ids so highlight materials can be cleared later.

use cgmath::Vector3;

use crate::{
    config::EditorConfig,
    data_structures::shape::Shape,
    geometry::triangulate::{Earcut, Triangulator},
    scene::{MeshId, SceneBackend},
};

pub struct ExtrusionEngine {
    triangulator: Box<dyn Triangulator>,
    solids: Vec<MeshId>,
}

impl std::fmt::Debug for ExtrusionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtrusionEngine")
            .field("solids", &self.solids)
            .finish_non_exhaustive()
    }
}

impl Default for ExtrusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtrusionEngine {
    pub fn new() -> Self {
        Self::with_triangulator(Box::new(Earcut))
    }

    pub fn with_triangulator(triangulator: Box<dyn Triangulator>) -> Self {
        Self {
            triangulator,
            solids: Vec::new(),
        }
    }

    /// Every solid produced so far, in creation order.
    pub fn solids(&self) -> &[MeshId] {
        &self.solids
    }

    /// Extrude `shapes` in order and return the new solids.
    ///
    /// Degenerate shapes are skipped.
    pub fn extrude<S: SceneBackend + ?Sized>(
        &mut self,
        scene: &mut S,
        shapes: Vec<Shape>,
        config: &EditorConfig,
    ) -> Vec<MeshId> {
        let mut created = Vec::with_capacity(shapes.len());
        for (idx, shape) in shapes.into_iter().enumerate() {
            let Some(solid) =
                scene.extrude_polygon(&shape, config.extrude_depth, self.triangulator.as_ref())
            else {
                log::warn!(
                    "Shape #{} with {} points is degenerate and was not extruded",
                    idx,
                    shape.len()
                );
                continue;
            };
            scene.translate(solid, Vector3::new(0.0, config.base_offset, 0.0));
            created.push(solid);
        }
        if !created.is_empty() {
            log::info!("Extruded {} solid(s)", created.len());
        }
        self.solids.extend_from_slice(&created);
        created
    }

    /// Drop any highlight material from every known solid.
    pub fn clear_highlights<S: SceneBackend + ?Sized>(&self, scene: &mut S) {
        for &solid in &self.solids {
            scene.set_material(solid, None);
        }
    }
}
