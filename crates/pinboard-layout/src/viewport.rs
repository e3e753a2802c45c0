//! Viewport queries over placed items.
//!
//! A query returns every placement whose frame overlaps the given rectangle,
//! in item-index order. Frames that only touch the rectangle's edge are not
//! returned.

use pinboard_ui_graphics::Rect;

use crate::attributes::PlacementAttributes;
use crate::config::MAX_NUMBER_OF_COLUMNS;

/// How a viewport query walks the placed items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportQueryStrategy {
    /// Test every placement. Cheap for boards of a few hundred items.
    #[default]
    LinearScan,
    /// Binary search each column's y-sorted frames using a [`ColumnIndex`].
    ColumnIndex,
}

/// Placements whose frame intersects `rect`, in index order.
pub fn query(attributes: &[PlacementAttributes], rect: Rect) -> Vec<PlacementAttributes> {
    attributes
        .iter()
        .filter(|attrs| attrs.frame.intersects(&rect))
        .copied()
        .collect()
}

/// Item indices grouped by column, each group ordered top to bottom.
///
/// Within a column, frames are stacked without overlap, so both their top and
/// bottom edges grow with the position in the group. That ordering is what
/// lets [`ColumnIndex::query`] binary search for the first candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    columns: Vec<Vec<usize>>,
}

impl ColumnIndex {
    /// Groups items by the column recorded for them during placement.
    ///
    /// `columns[i]` is the column of `attributes[i]`. `column_count` is capped
    /// at [`MAX_NUMBER_OF_COLUMNS`] up front; columns actually present in
    /// `columns` are always kept.
    pub fn build(columns: &[usize], column_count: usize) -> Self {
        let mut grouped = vec![Vec::new(); column_count.min(MAX_NUMBER_OF_COLUMNS)];
        for (index, &column) in columns.iter().enumerate() {
            if column >= grouped.len() {
                grouped.resize_with(column + 1, Vec::new);
            }
            grouped[column].push(index);
        }
        Self { columns: grouped }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Items of `column`, top to bottom.
    pub fn column(&self, column: usize) -> &[usize] {
        self.columns.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Same result as [`query`], visiting only the items near `rect`.
    ///
    /// `attributes` must be the slice the index was built from. Indices past
    /// its end are skipped.
    pub fn query(
        &self,
        attributes: &[PlacementAttributes],
        rect: Rect,
    ) -> Vec<PlacementAttributes> {
        let rect_bottom = rect.max_y();
        let mut hits = Vec::new();

        for items in &self.columns {
            let start = items.partition_point(|&index| {
                attributes
                    .get(index)
                    .is_some_and(|attrs| attrs.frame.max_y() <= rect.y)
            });
            for attrs in items[start..].iter().filter_map(|&index| attributes.get(index)) {
                if attrs.frame.y >= rect_bottom {
                    break;
                }
                if attrs.frame.intersects(&rect) {
                    hits.push(*attrs);
                }
            }
        }

        hits.sort_unstable_by_key(|attrs| attrs.item_index);
        hits
    }
}
