//! Masonry placement for Pinboard
//!
//! Places the items of a single section into a fixed number of equal-width
//! columns, each item stacked under the previous one in its column, and
//! answers content-size and viewport queries from a cache built once per
//! generation.
//!
//! ```
//! use pinboard_layout::prelude::*;
//!
//! let provider = FnMeasurementProvider::new(|_, _| 100.0, |_, _| 20.0);
//! let mut layout = PinboardLayout::new(provider);
//! let container = ContainerMetrics::new(320.0, 3);
//!
//! let size = layout.collection_view_content_size(&container).unwrap();
//! assert_eq!(size, Size::new(320.0, 264.0));
//!
//! let visible = layout
//!     .layout_attributes_for_elements(&container, Rect::new(0.0, 0.0, 320.0, 100.0))
//!     .unwrap();
//! assert_eq!(visible.len(), 2);
//! ```

mod attributes;
mod cache;
mod column_tracker;
mod config;
mod content_size;
mod error;
mod layout;
mod measurement;
mod placement;
mod viewport;

#[cfg(test)]
#[path = "tests/layout_properties.rs"]
mod layout_properties;

pub use attributes::*;
pub use cache::*;
pub use column_tracker::*;
pub use config::*;
pub use content_size::*;
pub use error::*;
pub use layout::*;
pub use measurement::{FnMeasurementProvider, MeasurementProvider};
pub use placement::{compute, Placement, PlacementInput};
pub use viewport::{query, ColumnIndex, ViewportQueryStrategy};

pub use pinboard_ui_graphics::{EdgeInsets, Rect, Size};

pub mod prelude {
    pub use crate::attributes::PlacementAttributes;
    pub use crate::column_tracker::ColumnPolicy;
    pub use crate::config::{ContainerMetrics, PinboardLayoutConfig};
    pub use crate::error::LayoutError;
    pub use crate::layout::PinboardLayout;
    pub use crate::measurement::{FnMeasurementProvider, MeasurementProvider};
    pub use crate::viewport::ViewportQueryStrategy;
    pub use pinboard_ui_graphics::prelude::*;
}
