//! Placement record handed to renderers.

use pinboard_ui_graphics::Rect;

/// Where one item sits on the board.
///
/// `frame` is the padded rectangle the item occupies. `content_height` is the
/// height of the primary block as returned by the measurement provider, so a
/// renderer can split the frame between content and annotation without
/// measuring again.
///
/// Equality compares `frame` and `content_height` only; `item_index` is
/// identity, not value.
#[derive(Clone, Copy, Debug)]
pub struct PlacementAttributes {
    pub item_index: usize,
    pub frame: Rect,
    pub content_height: f32,
}

impl PlacementAttributes {
    pub fn new(item_index: usize, frame: Rect, content_height: f32) -> Self {
        Self {
            item_index,
            frame,
            content_height,
        }
    }

    /// Height left for the annotation block below the content.
    #[inline]
    pub fn annotation_height(&self) -> f32 {
        self.frame.height - self.content_height
    }
}

impl PartialEq for PlacementAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame && self.content_height == other.content_height
    }
}
