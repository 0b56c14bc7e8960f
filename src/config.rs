/// Tunables of the editor.
///
/// Defaults reproduce the classic behaviour: solids are 2 units high and hover
/// just above the ground so their base does not z-fight with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Height of every extruded solid.
    pub extrude_depth: f32,
    /// Lift applied to a solid right after extrusion.
    pub base_offset: f32,
    /// `y` of the point markers placed while drawing.
    pub marker_height: f32,
}

impl EditorConfig {
    pub const DEFAULT_DEPTH: f32 = 2.0;
    pub const DEFAULT_BASE_OFFSET: f32 = 0.01;

    pub fn new() -> Self {
        Self {
            extrude_depth: Self::DEFAULT_DEPTH,
            base_offset: Self::DEFAULT_BASE_OFFSET,
            marker_height: 0.0,
        }
    }

    pub fn with_extrude_depth(mut self, depth: f32) -> Self {
        self.extrude_depth = depth;
        self
    }

    pub fn with_base_offset(mut self, offset: f32) -> Self {
        self.base_offset = offset;
        self
    }

    pub fn with_marker_height(mut self, height: f32) -> Self {
        self.marker_height = height;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
