use crate::core::data::Vec2;

/// An in-progress left-button pan.
///
/// Exists from a press outside the GUI until the matching release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    last_cursor: Vec2,
}

impl DragSession {
    #[must_use]
    pub fn start(cursor: Vec2) -> Self {
        Self {
            last_cursor: cursor,
        }
    }

    #[must_use]
    pub fn last_cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Returns the cursor movement since the previous call and remembers `cursor`.
    pub fn advance(&mut self, cursor: Vec2) -> Vec2 {
        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;
        delta
    }
}
