//! Memoized placement results.
//!
//! The cache is filled at most once per generation. It cannot tell when the
//! items, their measurements or the board geometry change; whoever owns those
//! inputs calls [`AttributeCache::invalidate`] and the next
//! [`AttributeCache::ensure_built`] starts a new generation.

use crate::attributes::PlacementAttributes;
use crate::column_tracker::{ColumnPolicy, ColumnTracker};
use crate::error::LayoutError;
use crate::measurement::MeasurementProvider;
use crate::placement::{self, Placement, PlacementInput};

#[derive(Clone, Debug)]
pub struct AttributeCache {
    tracker: ColumnTracker,
    placement: Placement,
    built: bool,
    generation: u64,
}

impl Default for AttributeCache {
    fn default() -> Self {
        Self::new(ColumnPolicy::default())
    }
}

impl AttributeCache {
    pub fn new(policy: ColumnPolicy) -> Self {
        Self {
            tracker: ColumnTracker::new(1, policy),
            placement: Placement::default(),
            built: false,
            generation: 0,
        }
    }

    /// Runs the placement pass unless the cache already holds a generation.
    ///
    /// Returns `true` when a build happened. On error the cache stays empty.
    pub fn ensure_built<P>(
        &mut self,
        input: PlacementInput,
        provider: &P,
    ) -> Result<bool, LayoutError>
    where
        P: MeasurementProvider + ?Sized,
    {
        if self.built {
            log::trace!("attribute cache hit (generation {})", self.generation);
            return Ok(false);
        }

        match placement::compute(input, &mut self.tracker, provider) {
            Ok(placement) => self.placement = placement,
            Err(err) => {
                self.clear_offsets();
                return Err(err);
            }
        }
        self.built = true;
        self.generation += 1;
        Ok(true)
    }

    /// Drops the current generation.
    pub fn invalidate(&mut self) {
        if self.built {
            log::trace!("invalidating attribute cache generation {}", self.generation);
        }
        self.placement = Placement::default();
        self.built = false;
        self.clear_offsets();
    }

    fn clear_offsets(&mut self) {
        let column_count = self.tracker.column_count();
        self.tracker.reset(column_count);
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Number of completed builds since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.placement.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placement.attributes.is_empty()
    }

    /// Attributes of item `index`.
    pub fn get(&self, index: usize) -> Result<&PlacementAttributes, LayoutError> {
        self.placement
            .attributes
            .get(index)
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Column item `index` was placed in.
    pub fn column_of(&self, index: usize) -> Result<usize, LayoutError> {
        self.placement
            .columns
            .get(index)
            .copied()
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// All attributes, ordered by item index.
    pub fn attributes(&self) -> &[PlacementAttributes] {
        &self.placement.attributes
    }

    /// Column of every item, parallel to [`attributes`](Self::attributes).
    pub fn columns(&self) -> &[usize] {
        &self.placement.columns
    }

    /// Number of columns the current generation was built with.
    pub fn column_count(&self) -> usize {
        self.tracker.column_count()
    }

    /// Bottom edge of every column after the last build.
    pub fn column_offsets(&self) -> &[f32] {
        self.tracker.offsets()
    }

    /// Largest unpadded bottom edge of the current generation.
    pub fn content_height(&self) -> f32 {
        self.placement.content_height
    }

    pub fn policy(&self) -> ColumnPolicy {
        self.tracker.policy()
    }

    /// Replaces the column policy. A different policy drops the current
    /// generation; the same one keeps it.
    pub fn set_policy(&mut self, policy: ColumnPolicy) {
        if self.tracker.policy() != policy {
            self.invalidate();
            self.tracker = ColumnTracker::new(1, policy);
        }
    }
}
