//! Interaction controller and pointer dispatch.
//!
//! The [`Controller`] is the single owner of all editor state and of the scene
//! backend. A host feeds it three kinds of input:
//!
//! - [`Controller::toggle`] and [`Controller::extrude`] from its buttons
//! - [`Controller::dispatch`] with a [`PointerEvent`] for every pointer event
//!   over the viewport
//! - [`Controller::run_deferred`] once per event loop turn, after the event has
//!   also been handed to the camera
//!
//! # Event routing
//!
//! | Mode | Down | Move | Up |
//! |---|---|---|---|
//! | Drawing | - | - | primary: add point, secondary: close shape |
//! | Moving | primary: grab solid | drag solid | release |
//! | VertexEditing | secondary: spawn handle, primary: grab handle | drag handle | release |
//!
//! # Deferred work
//!
//! Starting a drag must not detach the camera while the same click is still
//! being processed, otherwise the camera never sees the matching release. The
//! detach is therefore queued as a [`Deferred`] task and applied by
//! `run_deferred`. A release that arrives before the queue ran cancels the
//! pending detach.

use std::collections::VecDeque;

use crate::{
    config::EditorConfig,
    editor::{
        drawing::DrawingEngine,
        extrude::ExtrusionEngine,
        mode::{Affordance, Mode, ModeController, ModeKind, Toggle},
        mover::MeshMover,
        vertex_edit::VertexEditor,
    },
    scene::{MeshId, SceneBackend},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down(PointerButton),
    Up(PointerButton),
    Move,
}

/// Work applied after the current event has been handled everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    DetachCameraInput,
}

#[derive(Debug)]
pub struct Controller<S: SceneBackend> {
    scene: S,
    config: EditorConfig,
    modes: ModeController,
    drawing: DrawingEngine,
    extrusion: ExtrusionEngine,
    mover: MeshMover,
    vertex_editor: VertexEditor,
    deferred: VecDeque<Deferred>,
}

impl<S: SceneBackend> Controller<S> {
    pub fn new(scene: S) -> Self {
        Self::with_config(scene, EditorConfig::default())
    }

    pub fn with_config(scene: S, config: EditorConfig) -> Self {
        Self {
            scene,
            config,
            modes: ModeController::new(),
            drawing: DrawingEngine::new(),
            extrusion: ExtrusionEngine::new(),
            mover: MeshMover::new(),
            vertex_editor: VertexEditor::new(),
            deferred: VecDeque::new(),
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access for the host, e.g. to update the pointer ray.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn is_drawing(&self) -> bool {
        self.modes.is_drawing()
    }

    pub fn is_moving(&self) -> bool {
        self.modes.is_moving()
    }

    pub fn is_vertex_editing(&self) -> bool {
        self.modes.is_vertex_editing()
    }

    pub fn affordance(&self, kind: ModeKind) -> Affordance {
        self.modes.affordance(kind)
    }

    pub fn drawing(&self) -> &DrawingEngine {
        &self.drawing
    }

    pub fn mover(&self) -> &MeshMover {
        &self.mover
    }

    pub fn vertex_editor(&self) -> &VertexEditor {
        &self.vertex_editor
    }

    /// Every solid extruded so far.
    pub fn solids(&self) -> &[MeshId] {
        self.extrusion.solids()
    }

    pub fn deferred(&self) -> impl Iterator<Item = &Deferred> {
        self.deferred.iter()
    }

    /// Press a mode button.
    pub fn toggle(&mut self, kind: ModeKind) -> Toggle {
        let toggle = self.modes.toggle(kind);
        match toggle {
            Toggle::Entered(Mode::Drawing) => {
                self.drawing.restore_cues(&mut self.scene, &self.config);
            }
            Toggle::Exited(Mode::Drawing) => {
                self.drawing.dispose_cues(&mut self.scene);
            }
            Toggle::Exited(Mode::Moving) => {
                self.cancel_detach();
                self.mover.end(&mut self.scene);
            }
            Toggle::Exited(Mode::VertexEditing) => {
                if self.vertex_editor.is_dragging() {
                    self.cancel_detach();
                    self.vertex_editor.end_drag(&mut self.scene);
                }
                self.vertex_editor.dispose_handle(&mut self.scene);
                self.extrusion.clear_highlights(&mut self.scene);
            }
            _ => (),
        }
        toggle
    }

    /// Extrude every closed shape and release the drawing cues.
    ///
    /// Refused while moving. Returns the new solids.
    pub fn extrude(&mut self) -> Vec<MeshId> {
        if self.modes.is_moving() {
            log::debug!("Extrusion ignored while moving");
            return Vec::new();
        }
        let shapes = self.drawing.take_pending();
        if shapes.is_empty() {
            return Vec::new();
        }
        let solids = self.extrusion.extrude(&mut self.scene, shapes, &self.config);
        self.drawing.dispose_cues(&mut self.scene);
        if self.modes.is_drawing() {
            // the open outline is still being drawn and keeps its markers
            self.drawing.restore_cues(&mut self.scene, &self.config);
        }
        solids
    }

    /// Route one pointer event to the active mode.
    pub fn dispatch(&mut self, event: PointerEvent) {
        use PointerButton::{Primary, Secondary};
        use PointerEvent::{Down, Move, Up};

        match (self.modes.current(), event) {
            (Mode::Drawing, Up(Primary)) => {
                self.drawing.add_point(&mut self.scene, &self.config);
            }
            (Mode::Drawing, Up(Secondary)) => {
                self.drawing.close_shape(&mut self.scene);
            }
            (Mode::Moving, Down(Primary)) => {
                if self.mover.begin(&mut self.scene) {
                    self.defer(Deferred::DetachCameraInput);
                }
            }
            (Mode::Moving, Move) => self.mover.drag(&mut self.scene),
            (Mode::Moving, Up(_)) => {
                self.cancel_detach();
                self.mover.end(&mut self.scene);
            }
            (Mode::VertexEditing, Down(Secondary)) => {
                self.vertex_editor.spawn_handle(&mut self.scene);
            }
            (Mode::VertexEditing, Down(Primary)) => {
                if self.vertex_editor.begin_drag(&mut self.scene) {
                    self.defer(Deferred::DetachCameraInput);
                }
            }
            (Mode::VertexEditing, Move) => self.vertex_editor.drag(&mut self.scene),
            (Mode::VertexEditing, Up(_)) => {
                self.cancel_detach();
                self.vertex_editor.end_drag(&mut self.scene);
            }
            (mode, event) => log::trace!("{:?} has no effect in {:?}", event, mode),
        }
    }

    pub fn on_pointer_down(&mut self, button: PointerButton) {
        self.dispatch(PointerEvent::Down(button));
    }

    pub fn on_pointer_up(&mut self, button: PointerButton) {
        self.dispatch(PointerEvent::Up(button));
    }

    pub fn on_pointer_move(&mut self) {
        self.dispatch(PointerEvent::Move);
    }

    /// Apply queued work. Returns the number of tasks run.
    pub fn run_deferred(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.deferred.pop_front() {
            match task {
                Deferred::DetachCameraInput => self.scene.detach_camera_input(),
            }
            ran += 1;
        }
        ran
    }

    fn defer(&mut self, task: Deferred) {
        self.deferred.push_back(task);
    }

    fn cancel_detach(&mut self) {
        self.deferred.retain(|task| *task != Deferred::DetachCameraInput);
    }
}
