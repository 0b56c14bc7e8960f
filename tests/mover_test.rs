use flow_extrude::{
    ModeKind, Point3, PointerButton, PointerEvent,
    controller::Deferred,
    scene::Material,
};

use crate::common::test_utils::{assert_near, editor, hover, mesh, move_to, triangle_solid};
mod common;

#[test]
fn drag_translates_by_the_ground_distance_travelled() {
    let mut ctrl = editor();
    let solid = triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_down(PointerButton::Primary);
    assert_eq!(ctrl.mover().target(), Some(solid));

    move_to(&mut ctrl, 4.0, 3.0);
    // off the ground: this tick contributes nothing
    move_to(&mut ctrl, 300.0, 300.0);
    ctrl.scene_mut().clear_aim();
    ctrl.on_pointer_move();
    move_to(&mut ctrl, 5.0, 2.0);
    ctrl.on_pointer_up(PointerButton::Primary);

    // net pointer travel (2.5, 1.5) -> (5.0, 2.0)
    assert_near(
        mesh(&ctrl, solid).transform.origin(),
        Point3::new(2.5, 0.01, 0.5),
    );
}

#[test]
fn dragged_solid_is_highlighted_until_release() {
    let mut ctrl = editor();
    let solid = triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_down(PointerButton::Primary);
    assert_eq!(mesh(&ctrl, solid).material, Some(Material::Moving));
    assert!(ctrl.mover().is_dragging());

    ctrl.on_pointer_up(PointerButton::Primary);
    assert_eq!(mesh(&ctrl, solid).material, None);
    assert!(!ctrl.mover().is_dragging());
}

#[test]
fn camera_detaches_only_after_the_event_was_handled() {
    let mut ctrl = editor();
    triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.dispatch(PointerEvent::Down(PointerButton::Primary));
    assert!(ctrl.scene().camera_attached());
    assert_eq!(
        ctrl.deferred().copied().collect::<Vec<_>>(),
        vec![Deferred::DetachCameraInput]
    );

    assert_eq!(ctrl.run_deferred(), 1);
    assert!(!ctrl.scene().camera_attached());

    ctrl.dispatch(PointerEvent::Up(PointerButton::Primary));
    assert!(ctrl.scene().camera_attached());
}

#[test]
fn quick_release_cancels_the_pending_detach() {
    let mut ctrl = editor();
    triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_down(PointerButton::Primary);
    ctrl.on_pointer_up(PointerButton::Primary);

    assert_eq!(ctrl.run_deferred(), 0);
    assert!(ctrl.scene().camera_attached());
}

#[test]
fn pressing_on_bare_ground_starts_nothing() {
    let mut ctrl = editor();
    let solid = triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, -10.0, -10.0);
    ctrl.on_pointer_down(PointerButton::Primary);
    move_to(&mut ctrl, -5.0, -5.0);

    assert!(!ctrl.mover().is_dragging());
    assert_eq!(ctrl.deferred().count(), 0);
    assert_near(
        mesh(&ctrl, solid).transform.origin(),
        Point3::new(0.0, 0.01, 0.0),
    );
}

#[test]
fn leaving_move_mode_releases_an_active_drag() {
    let mut ctrl = editor();
    let solid = triangle_solid(&mut ctrl);
    ctrl.toggle(ModeKind::Move);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_down(PointerButton::Primary);
    ctrl.run_deferred();
    ctrl.toggle(ModeKind::Move);

    assert!(ctrl.scene().camera_attached());
    assert_eq!(mesh(&ctrl, solid).material, None);
    assert!(!ctrl.mover().is_dragging());
}

#[test]
fn moves_outside_move_mode_are_ignored() {
    let mut ctrl = editor();
    let solid = triangle_solid(&mut ctrl);

    hover(&mut ctrl, 2.5, 1.5);
    ctrl.on_pointer_down(PointerButton::Primary);
    move_to(&mut ctrl, 6.0, 6.0);

    assert_eq!(ctrl.mover().target(), None);
    assert_near(
        mesh(&ctrl, solid).transform.origin(),
        Point3::new(0.0, 0.01, 0.0),
    );
}
