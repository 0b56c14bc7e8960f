use flow_extrude::{
    Controller, ModeKind, Point3, PointerButton, SceneBackend, Vector3,
    data_structures::shape::Shape,
    geometry::triangulate::Earcut,
    gpu::GpuMirror,
    scene::{
        Material,
        memory::{MemoryScene, MeshKind},
    },
};

use crate::common::test_utils::{TRIANGLE, click, draw_shape, hover, move_to, triangle_solid};
mod common;

fn mirrored() -> Controller<GpuMirror<MemoryScene>> {
    Controller::new(GpuMirror::new(MemoryScene::new()))
}

#[test]
fn new_cues_are_queued_for_upload() {
    let mut ctrl = mirrored();
    ctrl.toggle(ModeKind::Draw);
    click(&mut ctrl, PointerButton::Primary, 1.0, 1.0);

    let marker = ctrl.drawing().markers()[0];
    assert!(ctrl.scene().is_dirty(marker));
    assert!(ctrl.scene().buffers(marker).is_none());
}

#[test]
fn disposed_meshes_leave_the_upload_queue() {
    let mut ctrl = mirrored();
    ctrl.toggle(ModeKind::Draw);
    draw_shape(&mut ctrl, &TRIANGLE);
    let cues: Vec<_> = ctrl
        .drawing()
        .markers()
        .iter()
        .chain(ctrl.drawing().outlines())
        .copied()
        .collect();
    assert!(cues.iter().all(|&cue| ctrl.scene().is_dirty(cue)));

    let solids = ctrl.extrude();

    assert_eq!(ctrl.scene().dirty().collect::<Vec<_>>(), solids);
}

#[test]
fn moving_does_not_touch_vertex_data() {
    let mut mirror = GpuMirror::new(MemoryScene::new());
    let shape = Shape::new(
        TRIANGLE
            .iter()
            .chain(&TRIANGLE[..1])
            .map(|&(x, z)| Point3::new(x, 0.0, z))
            .collect(),
    );
    // created behind the mirror's back, as if already uploaded
    let solid = mirror
        .inner_mut()
        .extrude_polygon(&shape, 2.0, &Earcut)
        .unwrap();
    assert!(!mirror.is_dirty(solid));

    mirror.translate(solid, Vector3::new(1.0, 0.0, 0.0));
    mirror.set_material(solid, Some(Material::Moving));
    assert!(!mirror.is_dirty(solid));

    let positions = mirror.vertex_buffer(solid).unwrap();
    mirror.set_vertex_buffer(solid, &positions);
    assert!(mirror.is_dirty(solid));

    mirror.dispose(solid);
    assert!(!mirror.is_dirty(solid));
}

#[test]
fn vertex_edits_mark_the_solid_dirty() {
    let mut ctrl = mirrored();
    let solid = triangle_solid(&mut ctrl);
    let ground = ctrl.scene().inner().ground();
    ctrl.scene_mut().track(ground);
    assert!(ctrl.scene().is_dirty(ground));

    ctrl.toggle(ModeKind::VertexEdit);
    hover(&mut ctrl, 2.9, 1.1);
    ctrl.on_pointer_down(PointerButton::Secondary);
    ctrl.on_pointer_down(PointerButton::Primary);
    move_to(&mut ctrl, 2.5, 1.5);

    assert!(ctrl.scene().is_dirty(solid));
    assert_eq!(
        ctrl.scene().inner().meshes_of(MeshKind::Solid),
        vec![solid]
    );
}
