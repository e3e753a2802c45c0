//! Board configuration and per-call container metrics.

use pinboard_ui_graphics::EdgeInsets;

use crate::column_tracker::ColumnPolicy;
use crate::error::LayoutError;
use crate::viewport::ViewportQueryStrategy;

pub const DEFAULT_NUMBER_OF_COLUMNS: usize = 2;
pub const DEFAULT_CELL_PADDING: f32 = 6.0;
/// Upper bound on `number_of_columns`. Column offsets are allocated up front,
/// so an unbounded count would be an unbounded allocation.
pub const MAX_NUMBER_OF_COLUMNS: usize = 1024;

/// Geometry and policies of a board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinboardLayoutConfig {
    /// Number of equal-width columns, 1 to [`MAX_NUMBER_OF_COLUMNS`].
    pub number_of_columns: usize,
    /// Inset applied to every side of each item's slot. Must be finite and
    /// non-negative.
    pub cell_padding: f32,
    pub column_policy: ColumnPolicy,
    pub query_strategy: ViewportQueryStrategy,
}

impl Default for PinboardLayoutConfig {
    fn default() -> Self {
        Self {
            number_of_columns: DEFAULT_NUMBER_OF_COLUMNS,
            cell_padding: DEFAULT_CELL_PADDING,
            column_policy: ColumnPolicy::RoundRobin,
            query_strategy: ViewportQueryStrategy::LinearScan,
        }
    }
}

impl PinboardLayoutConfig {
    pub fn with_number_of_columns(mut self, number_of_columns: usize) -> Self {
        self.number_of_columns = number_of_columns;
        self
    }

    pub fn with_cell_padding(mut self, cell_padding: f32) -> Self {
        self.cell_padding = cell_padding;
        self
    }

    pub fn with_column_policy(mut self, column_policy: ColumnPolicy) -> Self {
        self.column_policy = column_policy;
        self
    }

    pub fn with_query_strategy(mut self, query_strategy: ViewportQueryStrategy) -> Self {
        self.query_strategy = query_strategy;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(1..=MAX_NUMBER_OF_COLUMNS).contains(&self.number_of_columns) {
            return Err(LayoutError::InvalidColumnCount {
                count: self.number_of_columns,
            });
        }
        if !self.cell_padding.is_finite() || self.cell_padding < 0.0 {
            return Err(LayoutError::InvalidPadding {
                padding: self.cell_padding,
            });
        }
        Ok(())
    }
}

/// What the host's scroll container looks like at the time of a call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerMetrics {
    /// Width of the container's bounds.
    pub bounds_width: f32,
    pub content_inset: EdgeInsets,
    /// Items in the board's single section.
    pub item_count: usize,
}

impl ContainerMetrics {
    pub fn new(bounds_width: f32, item_count: usize) -> Self {
        Self {
            bounds_width,
            content_inset: EdgeInsets::default(),
            item_count,
        }
    }

    pub fn with_content_inset(mut self, content_inset: EdgeInsets) -> Self {
        self.content_inset = content_inset;
        self
    }
}
