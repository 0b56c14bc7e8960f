//! Dragging whole solids across the ground.
//!
//! The mover never positions a mesh absolutely. Each tick translates the target
//! by the ground distance travelled since the previous tick, so a tick whose
//! pick misses simply contributes nothing.

use cgmath::Point3;

use crate::{
    pick,
    scene::{Material, MeshId, PickFilter, SceneBackend},
};

#[derive(Debug, Default)]
pub struct MeshMover {
    target: Option<MeshId>,
    reference: Option<Point3<f32>>,
}

impl MeshMover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<MeshId> {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.reference.is_some()
    }

    /// Start dragging the non-ground mesh under the pointer.
    ///
    /// Returns `true` when a drag started; the caller then detaches camera
    /// input once the current event is fully handled.
    pub fn begin<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        let Some(target) = pick::pick_target(scene, PickFilter::ExcludeGround) else {
            log::trace!("Nothing to move under the pointer");
            return false;
        };
        let Some(reference) = pick::pick_ground(scene) else {
            log::trace!("Mesh {:?} picked but the ground was missed", target);
            return false;
        };
        scene.set_material(target, Some(Material::Moving));
        self.target = Some(target);
        self.reference = Some(reference);
        log::debug!("Moving {:?} from {:?}", target, reference);
        true
    }

    /// Follow the pointer by one tick.
    pub fn drag<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) {
        let (Some(target), Some(reference)) = (self.target, self.reference) else {
            return;
        };
        let Some(current) = pick::pick_ground(scene) else {
            return;
        };
        let delta = current - reference;
        scene.translate(target, delta);
        self.reference = Some(current);
        log::trace!("Moved {:?} by {:?}", target, delta);
    }

    /// Release the drag. Returns `true` if one was active (camera input
    /// has been reattached).
    pub fn end<S: SceneBackend + ?Sized>(&mut self, scene: &mut S) -> bool {
        if self.reference.take().is_none() {
            return false;
        }
        scene.attach_camera_input();
        if let Some(target) = self.target.take() {
            scene.set_material(target, None);
        }
        true
    }
}
