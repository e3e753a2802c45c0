//! Pure geometry for Pinboard
//!
//! Sizes, rectangles and edge insets shared by the layout engine and its
//! hosts.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Rect, Size};
}
