//! Per-column running offsets and column selection.

use smallvec::SmallVec;

/// Inline capacity for column offsets. Boards rarely have more than a handful
/// of columns, so this avoids a heap allocation per build.
pub type ColumnOffsets = SmallVec<[f32; 8]>;

/// Decides which column receives the next item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Cycle through the columns: item `i` lands in column `i mod N`.
    ///
    /// Deterministic and order-stable, but columns drift apart in height when
    /// items differ in size.
    #[default]
    RoundRobin,
    /// Place each item in the column whose bottom edge is currently highest
    /// on screen (smallest offset). Ties go to the lowest column index.
    ShortestColumn,
}

/// Owns the bottom edge of every column during a placement pass.
#[derive(Clone, Debug)]
pub struct ColumnTracker {
    policy: ColumnPolicy,
    offsets: ColumnOffsets,
    /// Column chosen by the last `select_column`, if any.
    previous: Option<usize>,
}

impl ColumnTracker {
    /// Creates a tracker with `column_count` zeroed columns.
    pub fn new(column_count: usize, policy: ColumnPolicy) -> Self {
        let mut tracker = Self {
            policy,
            offsets: ColumnOffsets::new(),
            previous: None,
        };
        tracker.reset(column_count);
        tracker
    }

    /// Zeroes `column_count` offsets and restarts selection at column 0.
    pub fn reset(&mut self, column_count: usize) {
        debug_assert!(column_count >= 1);
        self.offsets.clear();
        self.offsets.resize(column_count, 0.0);
        self.previous = None;
    }

    pub fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    pub fn column_count(&self) -> usize {
        self.offsets.len()
    }

    /// Running bottom edge of `column`.
    pub fn current_offset(&self, column: usize) -> f32 {
        self.offsets[column]
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    /// Grows `column` by `height`. Offsets never decrease.
    pub fn advance(&mut self, column: usize, height: f32) {
        debug_assert!(height >= 0.0, "column offsets must not decrease");
        self.offsets[column] += height;
    }

    /// Returns the column for the next item and remembers it.
    pub fn select_column(&mut self) -> usize {
        let column = match self.policy {
            ColumnPolicy::RoundRobin => match self.previous {
                Some(previous) => (previous + 1) % self.offsets.len(),
                None => 0,
            },
            ColumnPolicy::ShortestColumn => self.shortest_column(),
        };
        self.previous = Some(column);
        column
    }

    fn shortest_column(&self) -> usize {
        let mut best = 0;
        for (column, &offset) in self.offsets.iter().enumerate().skip(1) {
            if offset < self.offsets[best] {
                best = column;
            }
        }
        best
    }

    /// Largest column offset.
    pub fn max_offset(&self) -> f32 {
        self.offsets.iter().copied().fold(0.0, f32::max)
    }
}
