//! Exclusive interaction modes.
//!
//! The editor is in exactly one [`Mode`] at a time. Each of the three mode
//! buttons (draw, move, vertex edit) toggles its own mode, and is ignored while
//! another mode is active. Side effects of leaving a mode (disposing cues,
//! cancelling drags) are carried out by the controller based on the returned
//! [`Toggle`].

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
    Moving,
    VertexEditing,
}

/// The mode buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Draw,
    Move,
    VertexEdit,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [ModeKind::Draw, ModeKind::Move, ModeKind::VertexEdit];

    pub fn mode(self) -> Mode {
        match self {
            ModeKind::Draw => Mode::Drawing,
            ModeKind::Move => Mode::Moving,
            ModeKind::VertexEdit => Mode::VertexEditing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Draw => "Draw",
            ModeKind::Move => "Move",
            ModeKind::VertexEdit => "Vertex Edit",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Entered(Mode),
    Exited(Mode),
    /// Another mode is active, nothing changed.
    Ignored,
}

/// What a mode button currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordance {
    pub label: &'static str,
    /// Highlighted while the button's mode is active.
    pub active: bool,
}

pub const EXIT_LABEL: &str = "EXIT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Drawing
    }

    pub fn is_moving(&self) -> bool {
        self.mode == Mode::Moving
    }

    pub fn is_vertex_editing(&self) -> bool {
        self.mode == Mode::VertexEditing
    }

    pub fn toggle(&mut self, kind: ModeKind) -> Toggle {
        let requested = kind.mode();
        match self.mode {
            Mode::Idle => {
                self.mode = requested;
                log::debug!("Entered {:?}", requested);
                Toggle::Entered(requested)
            }
            current if current == requested => {
                self.mode = Mode::Idle;
                log::debug!("Exited {:?}", requested);
                Toggle::Exited(requested)
            }
            current => {
                log::debug!("{} ignored while in {:?}", kind, current);
                Toggle::Ignored
            }
        }
    }

    pub fn affordance(&self, kind: ModeKind) -> Affordance {
        if self.mode == kind.mode() {
            Affordance {
                label: EXIT_LABEL,
                active: true,
            }
        } else {
            Affordance {
                label: kind.label(),
                active: false,
            }
        }
    }
}
