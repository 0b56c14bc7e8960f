use flow_extrude::{
    Controller, ModeKind, Point3, PointerButton, PointerEvent,
    gpu::GpuMirror,
    scene::{
        MeshId,
        memory::{MemoryScene, SceneMesh},
    },
};

/// Backends whose pointer ray a test can steer.
pub(crate) trait Aim {
    fn aim_at(&mut self, x: f32, z: f32);
    fn memory(&self) -> &MemoryScene;
}

impl Aim for MemoryScene {
    fn aim_at(&mut self, x: f32, z: f32) {
        MemoryScene::aim_at(self, x, z);
    }

    fn memory(&self) -> &MemoryScene {
        self
    }
}

impl Aim for GpuMirror<MemoryScene> {
    fn aim_at(&mut self, x: f32, z: f32) {
        self.inner_mut().aim_at(x, z);
    }

    fn memory(&self) -> &MemoryScene {
        self.inner()
    }
}

pub(crate) type Editor = Controller<MemoryScene>;

pub(crate) fn editor() -> Editor {
    flow_extrude::logging::init();
    Controller::new(MemoryScene::new())
}

/// Move the pointer over `(x, z)` without dispatching anything.
pub(crate) fn hover<S: Aim + flow_extrude::SceneBackend>(ctrl: &mut Controller<S>, x: f32, z: f32) {
    ctrl.scene_mut().aim_at(x, z);
}

/// Move the pointer over `(x, z)` and dispatch the move.
pub(crate) fn move_to<S: Aim + flow_extrude::SceneBackend>(
    ctrl: &mut Controller<S>,
    x: f32,
    z: f32,
) {
    hover(ctrl, x, z);
    ctrl.dispatch(PointerEvent::Move);
}

/// Press and release `button` over `(x, z)`.
pub(crate) fn click<S: Aim + flow_extrude::SceneBackend>(
    ctrl: &mut Controller<S>,
    button: PointerButton,
    x: f32,
    z: f32,
) {
    hover(ctrl, x, z);
    ctrl.dispatch(PointerEvent::Down(button));
    ctrl.dispatch(PointerEvent::Up(button));
}

/// Place one point per entry and close the outline. Expects drawing mode.
pub(crate) fn draw_shape<S: Aim + flow_extrude::SceneBackend>(
    ctrl: &mut Controller<S>,
    points: &[(f32, f32)],
) {
    for &(x, z) in points {
        click(ctrl, PointerButton::Primary, x, z);
    }
    click(ctrl, PointerButton::Secondary, 0.0, 0.0);
}

/// Right triangle with its right angle at (3, 1).
pub(crate) const TRIANGLE: [(f32, f32); 3] = [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0)];

/// Draw [`TRIANGLE`], leave drawing mode and extrude it.
pub(crate) fn triangle_solid<S: Aim + flow_extrude::SceneBackend>(
    ctrl: &mut Controller<S>,
) -> MeshId {
    ctrl.toggle(ModeKind::Draw);
    draw_shape(ctrl, &TRIANGLE);
    ctrl.toggle(ModeKind::Draw);
    let solids = ctrl.extrude();
    assert_eq!(solids.len(), 1, "the triangle should give exactly one solid");
    solids[0]
}

pub(crate) fn mesh<S: Aim + flow_extrude::SceneBackend>(
    ctrl: &Controller<S>,
    id: MeshId,
) -> &SceneMesh {
    ctrl.scene()
        .memory()
        .mesh(id)
        .unwrap_or_else(|| panic!("{:?} is not in the scene", id))
}

pub(crate) fn assert_near(actual: Point3<f32>, expected: Point3<f32>) {
    let close = (actual.x - expected.x).abs() < 1e-4
        && (actual.y - expected.y).abs() < 1e-4
        && (actual.z - expected.z).abs() < 1e-4;
    assert!(close, "expected {:?}, got {:?}", expected, actual);
}

/// A device on whatever adapter the machine offers, no surface attached.
#[cfg(feature = "integration-tests")]
pub(crate) fn headless_device() -> (wgpu::Device, wgpu::Queue) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let instance =
            wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .expect("no adapter available for the GPU tests");
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("flow-extrude test device"),
                ..Default::default()
            })
            .await
            .expect("could not open a device")
    })
}
