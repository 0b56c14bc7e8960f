#[cfg(feature = "integration-tests")]
use flow_extrude::{
    Controller, ModeKind, PointerButton, SceneBackend,
    gpu::GpuMirror,
    resources::mesh::MeshBuffers,
    scene::memory::MemoryScene,
};

#[cfg(feature = "integration-tests")]
use crate::common::test_utils::{
    TRIANGLE, draw_shape, headless_device, hover, move_to, triangle_solid,
};
#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
fn mirrored() -> Controller<GpuMirror<MemoryScene>> {
    Controller::new(GpuMirror::new(MemoryScene::new()))
}

#[test]
#[cfg(feature = "integration-tests")]
fn vertex_edits_are_written_into_the_existing_buffer() {
    let (device, queue) = headless_device();
    let mut ctrl = mirrored();
    let solid = triangle_solid(&mut ctrl);

    ctrl.scene_mut().flush(&device, &queue).unwrap();
    assert_eq!(ctrl.scene().dirty().count(), 0);
    let uploaded = ctrl.scene().buffers(solid).unwrap();
    let positions = ctrl.scene().vertex_buffer(solid).unwrap();
    let indices = ctrl.scene().index_buffer(solid).unwrap();
    assert_eq!(uploaded.num_vertices, positions.len() / 3);
    assert_eq!(uploaded.num_elements as usize, indices.len());
    let vertex_buffer = uploaded.vertex_buffer.clone();
    let index_buffer = uploaded.index_buffer.clone();

    ctrl.toggle(ModeKind::VertexEdit);
    hover(&mut ctrl, 2.9, 1.1);
    ctrl.on_pointer_down(PointerButton::Secondary);
    ctrl.on_pointer_down(PointerButton::Primary);
    move_to(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_up(PointerButton::Primary);
    assert!(ctrl.scene().is_dirty(solid));

    ctrl.scene_mut().flush(&device, &queue).unwrap();

    assert!(!ctrl.scene().is_dirty(solid));
    let refreshed = ctrl.scene().buffers(solid).unwrap();
    assert_eq!(refreshed.vertex_buffer, vertex_buffer);
    assert_eq!(refreshed.index_buffer, index_buffer);
    assert_eq!(refreshed.num_vertices, positions.len() / 3);
}

#[test]
#[cfg(feature = "integration-tests")]
fn changed_vertex_count_recreates_the_buffers() {
    let (device, queue) = headless_device();
    let mut ctrl = mirrored();
    let solid = triangle_solid(&mut ctrl);
    let mirror = ctrl.scene_mut();
    mirror.flush(&device, &queue).unwrap();
    let old_buffer = mirror.buffers(solid).unwrap().vertex_buffer.clone();

    // drop the last triangle's vertices
    let mut positions = mirror.vertex_buffer(solid).unwrap();
    positions.truncate(positions.len() - 9);
    let indices = mirror.index_buffer(solid).unwrap();
    assert!(
        mirror
            .buffers(solid)
            .unwrap()
            .refresh(&queue, &positions, &indices)
            .is_err()
    );
    mirror.set_vertex_buffer(solid, &positions);

    mirror.flush(&device, &queue).unwrap();

    let recreated = mirror.buffers(solid).unwrap();
    assert_ne!(recreated.vertex_buffer, old_buffer);
    assert_eq!(recreated.num_vertices, positions.len() / 3);
    assert!(!mirror.is_dirty(solid));
}

#[test]
#[cfg(feature = "integration-tests")]
fn line_loops_get_no_buffers_and_disposal_frees_them() {
    let (device, queue) = headless_device();
    let mut ctrl = mirrored();
    ctrl.toggle(ModeKind::Draw);
    draw_shape(&mut ctrl, &TRIANGLE);
    let marker = ctrl.drawing().markers()[0];
    let outline = ctrl.drawing().outlines()[0];

    ctrl.scene_mut().flush(&device, &queue).unwrap();

    assert!(ctrl.scene().buffers(marker).is_some());
    assert!(ctrl.scene().buffers(outline).is_none());
    assert_eq!(ctrl.scene().dirty().count(), 0);

    ctrl.toggle(ModeKind::Draw);
    assert!(ctrl.scene().buffers(marker).is_none());
}

#[test]
#[cfg(feature = "integration-tests")]
fn buffers_can_be_created_directly() {
    let (device, _) = headless_device();
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    let buffers = MeshBuffers::new(&device, "triangle", &positions, &[0, 2, 1]).unwrap();
    assert_eq!(buffers.num_vertices, 3);
    assert_eq!(buffers.num_elements, 3);
}
