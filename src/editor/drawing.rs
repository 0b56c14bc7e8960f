//! Polygon drawing.
//!
//! Primary clicks on the ground append points to the open outline, a secondary
//! click closes it into a [`Shape`] and queues it for extrusion. Every placed
//! point gets a marker cue and every closed shape an outline cue.
//!
//! Open points and queued shapes outlive the drawing mode. Their cues do not:
//! [`DrawingEngine::dispose_cues`] releases them when drawing ends and
//! [`DrawingEngine::restore_cues`] rebuilds them when drawing resumes.

use cgmath::Point3;

use crate::{
    config::EditorConfig,
    data_structures::shape::Shape,
    pick,
    scene::{MarkerKind, MeshId, SceneBackend},
};

#[derive(Debug, Default)]
pub struct DrawingEngine {
    open: Vec<Point3<f32>>,
    pending: Vec<Shape>,
    markers: Vec<MeshId>,
    outlines: Vec<MeshId>,
}

impl DrawingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points of the outline currently being drawn.
    pub fn open_points(&self) -> &[Point3<f32>] {
        &self.open
    }

    /// Closed shapes waiting for extrusion, oldest first.
    pub fn pending(&self) -> &[Shape] {
        &self.pending
    }

    pub fn markers(&self) -> &[MeshId] {
        &self.markers
    }

    pub fn outlines(&self) -> &[MeshId] {
        &self.outlines
    }

    pub fn cue_count(&self) -> usize {
        self.markers.len() + self.outlines.len()
    }

    /// Append the ground point under the pointer. Returns whether a point was added.
    pub fn add_point<S: SceneBackend + ?Sized>(
        &mut self,
        scene: &mut S,
        config: &EditorConfig,
    ) -> bool {
        let Some(point) = pick::pick_ground(scene) else {
            log::trace!("Drawing click missed the ground");
            return false;
        };
        self.markers.push(place_marker(scene, point, config));
        self.open.push(point);
        log::debug!("Placed point #{} at {:?}", self.open.len(), point);
        true
    }

    /// Close the open outline and queue it. Returns whether a shape was queued.
    pub fn close_shape<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        let Some(&first) = self.open.first() else {
            log::trace!("Nothing to close");
            return false;
        };
        let mut points = std::mem::take(&mut self.open);
        points.push(first);
        self.outlines.push(scene.create_line_loop(&points));
        log::debug!("Closed shape with {} points", points.len());
        self.pending.push(Shape::new(points));
        true
    }

    /// Hand every queued shape over, leaving the queue empty.
    pub fn take_pending(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.pending)
    }

    /// Release every marker and outline.
    pub fn dispose_cues<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) {
        for cue in self.outlines.drain(..).chain(self.markers.drain(..)) {
            scene.dispose(cue);
        }
    }

    /// Rebuild cues for the open points and queued shapes.
    ///
    /// Existing cues are released first, so calling this twice never
    /// duplicates them.
    pub fn restore_cues<S: SceneBackend + ?Sized>(&mut self, scene: &mut S, config: &EditorConfig) {
        self.dispose_cues(scene);
        for shape in &self.pending {
            self.outlines.push(scene.create_line_loop(shape.points()));
        }
        for &point in &self.open {
            self.markers.push(place_marker(scene, point, config));
        }
    }
}

fn place_marker<S: SceneBackend + ?Sized>(
    scene: &mut S,
    point: Point3<f32>,
    config: &EditorConfig,
) -> MeshId {
    scene.create_marker(
        Point3::new(point.x, config.marker_height, point.z),
        MarkerKind::Point,
    )
}
