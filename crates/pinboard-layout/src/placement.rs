//! Masonry placement pass.
//!
//! Walks the items in index order, asks the provider for each item's heights,
//! drops the item into the column picked by the [`ColumnTracker`] and records
//! its padded frame.

use pinboard_ui_graphics::Rect;
use web_time::{Duration, Instant};

use crate::attributes::PlacementAttributes;
use crate::column_tracker::ColumnTracker;
use crate::config::MAX_NUMBER_OF_COLUMNS;
use crate::error::LayoutError;
use crate::measurement::{ItemHeights, MeasurementProvider};

/// Builds slower than this are reported with a warning. The build still
/// completes; there is no partial layout.
const BUILD_TIME_BUDGET: Duration = Duration::from_millis(50);

/// Inputs of one placement pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInput {
    pub item_count: usize,
    pub column_count: usize,
    pub column_width: f32,
    /// Inset applied on every side of each item's slot.
    pub padding: f32,
}

impl PlacementInput {
    /// Width offered to the measurement provider: the column minus padding on
    /// both sides.
    #[inline]
    pub fn inner_width(&self) -> f32 {
        self.column_width - 2.0 * self.padding
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !(1..=MAX_NUMBER_OF_COLUMNS).contains(&self.column_count) {
            return Err(LayoutError::InvalidColumnCount {
                count: self.column_count,
            });
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LayoutError::InvalidPadding {
                padding: self.padding,
            });
        }
        Ok(())
    }
}

/// Result of a placement pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// One entry per item, `attributes[i].item_index == i`.
    pub attributes: Vec<PlacementAttributes>,
    /// Column each item was placed in, parallel to `attributes`.
    pub columns: Vec<usize>,
    /// Largest unpadded bottom edge, zero when there are no items.
    pub content_height: f32,
}

/// Places `input.item_count` items.
///
/// `tracker` is reset to `input.column_count` columns before the first item.
/// Any provider contract violation aborts the pass; nothing is returned for
/// the items placed before it.
pub fn compute<P>(
    input: PlacementInput,
    tracker: &mut ColumnTracker,
    provider: &P,
) -> Result<Placement, LayoutError>
where
    P: MeasurementProvider + ?Sized,
{
    input.validate()?;
    let start_time = Instant::now();

    tracker.reset(input.column_count);
    let padding = input.padding;
    let inner_width = input.inner_width();

    let mut placement = Placement {
        attributes: Vec::with_capacity(input.item_count),
        columns: Vec::with_capacity(input.item_count),
        content_height: 0.0,
    };

    for index in 0..input.item_count {
        let column = tracker.select_column();
        let heights = ItemHeights::measure(provider, index, inner_width)?;
        let total_height = padding + heights.content + heights.annotation + padding;
        let top = tracker.current_offset(column);
        let bottom = top + total_height;
        if !bottom.is_finite() {
            return Err(LayoutError::HeightOverflow {
                index,
                height: bottom,
            });
        }

        let slot = Rect::new(
            column as f32 * input.column_width,
            top,
            input.column_width,
            total_height,
        );

        placement.attributes.push(PlacementAttributes::new(
            index,
            slot.inset(padding, padding),
            heights.content,
        ));
        placement.columns.push(column);

        tracker.advance(column, total_height);
    }
    placement.content_height = tracker.max_offset();

    let elapsed = start_time.elapsed();
    if elapsed > BUILD_TIME_BUDGET {
        log::warn!(
            "Pinboard placement of {} items took {:?}, over the {:?} budget",
            input.item_count,
            elapsed,
            BUILD_TIME_BUDGET
        );
    }

    Ok(placement)
}
