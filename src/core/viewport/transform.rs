use crate::core::data::Vec2;

/// Cursor position as normalized device coordinates in `[0, 1]²`, y pointing up.
///
/// A degenerate viewport (zero or non-finite size) maps every cursor to the centre.
#[must_use]
pub fn cursor_to_ndc(cursor: Vec2, viewport_size: Vec2) -> Vec2 {
    if !is_drawable(viewport_size) {
        return Vec2::new(0.5, 0.5);
    }

    Vec2 {
        x: cursor.x / viewport_size.x,
        y: 1.0 - cursor.y / viewport_size.y,
    }
}

/// Re-centres [`cursor_to_ndc`] onto the `[-1, 1]²` square zoom happens around.
#[must_use]
pub fn cursor_to_zoom_origin(cursor: Vec2, viewport_size: Vec2) -> Vec2 {
    let ndc = cursor_to_ndc(cursor, viewport_size);

    Vec2 {
        x: (ndc.x - 0.5) * 2.0,
        y: (ndc.y - 0.5) * 2.0,
    }
}

fn is_drawable(viewport_size: Vec2) -> bool {
    viewport_size.x.is_finite()
        && viewport_size.y.is_finite()
        && viewport_size.x > 0.0
        && viewport_size.y > 0.0
}
