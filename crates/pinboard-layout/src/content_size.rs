//! Scrollable extent of the board.

use pinboard_ui_graphics::{EdgeInsets, Size};

/// Width available to columns: the container width minus horizontal insets.
#[inline]
pub fn content_width(container_width: f32, insets: EdgeInsets) -> f32 {
    container_width - insets.horizontal_sum()
}

/// Full scrollable size given the container and the tallest placed edge.
pub fn content_size(container_width: f32, insets: EdgeInsets, content_height: f32) -> Size {
    Size::new(content_width(container_width, insets), content_height)
}
