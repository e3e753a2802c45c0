//! Host-facing masonry layout.
//!
//! [`PinboardLayout`] is what a scroll container talks to. It owns the
//! measurement provider, the board configuration and the attribute cache, and
//! answers the three questions a container asks during a layout pass:
//! how big is the content, what is visible in this rectangle, and where is
//! this particular item.
//!
//! The first question asked after construction or invalidation builds the
//! cache; everything after that is a read. Changing the configuration through
//! the setters here drops the cache. Changes to the items themselves are not
//! visible to the layout, so the host must call
//! [`invalidate_layout`](PinboardLayout::invalidate_layout) after them.

use pinboard_ui_graphics::{Rect, Size};

use crate::attributes::PlacementAttributes;
use crate::cache::AttributeCache;
use crate::column_tracker::ColumnPolicy;
use crate::config::{ContainerMetrics, PinboardLayoutConfig};
use crate::content_size::{content_size, content_width};
use crate::error::LayoutError;
use crate::measurement::MeasurementProvider;
use crate::placement::PlacementInput;
use crate::viewport::{self, ColumnIndex, ViewportQueryStrategy};

pub struct PinboardLayout<P> {
    provider: P,
    config: PinboardLayoutConfig,
    cache: AttributeCache,
    /// Present only for [`ViewportQueryStrategy::ColumnIndex`] once built.
    column_index: Option<ColumnIndex>,
}

impl<P: MeasurementProvider> PinboardLayout<P> {
    /// Creates a layout with the default two-column configuration.
    pub fn new(provider: P) -> Self {
        let config = PinboardLayoutConfig::default();
        Self {
            provider,
            config,
            cache: AttributeCache::new(config.column_policy),
            column_index: None,
        }
    }

    pub fn with_config(provider: P, config: PinboardLayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            cache: AttributeCache::new(config.column_policy),
            column_index: None,
        })
    }

    pub fn config(&self) -> &PinboardLayoutConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Swaps in a new provider and drops the cache. Returns the old provider.
    pub fn replace_provider(&mut self, provider: P) -> P {
        self.invalidate_layout();
        std::mem::replace(&mut self.provider, provider)
    }

    pub fn set_number_of_columns(&mut self, number_of_columns: usize) -> Result<(), LayoutError> {
        self.set_config(self.config.with_number_of_columns(number_of_columns))
    }

    pub fn set_cell_padding(&mut self, cell_padding: f32) -> Result<(), LayoutError> {
        self.set_config(self.config.with_cell_padding(cell_padding))
    }

    pub fn set_column_policy(&mut self, column_policy: ColumnPolicy) {
        if column_policy != self.config.column_policy {
            self.config.column_policy = column_policy;
            self.cache.set_policy(column_policy);
            self.column_index = None;
        }
    }

    pub fn set_query_strategy(&mut self, query_strategy: ViewportQueryStrategy) {
        self.config.query_strategy = query_strategy;
        match query_strategy {
            ViewportQueryStrategy::ColumnIndex => {
                if self.cache.is_built() && self.column_index.is_none() {
                    self.rebuild_column_index();
                }
            }
            ViewportQueryStrategy::LinearScan => self.column_index = None,
        }
    }

    /// Replaces the whole configuration. An invalid configuration is rejected
    /// and the current one kept.
    ///
    /// Only column count, padding and policy drop the cache; a new query
    /// strategy reuses the current generation.
    pub fn set_config(&mut self, config: PinboardLayoutConfig) -> Result<(), LayoutError> {
        config.validate()?;
        let geometry_changed = config.number_of_columns != self.config.number_of_columns
            || config.cell_padding != self.config.cell_padding;
        if geometry_changed {
            self.invalidate_layout();
        }
        self.config.number_of_columns = config.number_of_columns;
        self.config.cell_padding = config.cell_padding;
        self.set_column_policy(config.column_policy);
        self.set_query_strategy(config.query_strategy);
        Ok(())
    }

    /// Builds the cache for `container` unless a generation is already held.
    pub fn prepare(&mut self, container: &ContainerMetrics) -> Result<(), LayoutError> {
        if self.cache.is_built() {
            log::trace!("prepare: reusing generation {}", self.cache.generation());
            return Ok(());
        }

        let width = content_width(container.bounds_width, container.content_inset);
        if !width.is_finite() || width < 0.0 {
            return Err(LayoutError::InvalidContentWidth { width });
        }

        let column_count = self.config.number_of_columns;
        let input = PlacementInput {
            item_count: container.item_count,
            column_count,
            column_width: width / column_count as f32,
            padding: self.config.cell_padding,
        };
        self.cache.ensure_built(input, &self.provider)?;
        log::debug!(
            "pinboard generation {}: {} items in {} columns ({:?}), content height {:.1}",
            self.cache.generation(),
            self.cache.len(),
            column_count,
            self.config.column_policy,
            self.cache.content_height()
        );

        if self.config.query_strategy == ViewportQueryStrategy::ColumnIndex {
            self.rebuild_column_index();
        }
        Ok(())
    }

    fn rebuild_column_index(&mut self) {
        self.column_index = Some(ColumnIndex::build(
            self.cache.columns(),
            self.cache.column_count(),
        ));
    }

    /// Full scrollable size: content width by tallest column edge.
    pub fn collection_view_content_size(
        &mut self,
        container: &ContainerMetrics,
    ) -> Result<Size, LayoutError> {
        self.prepare(container)?;
        Ok(content_size(
            container.bounds_width,
            container.content_inset,
            self.cache.content_height(),
        ))
    }

    /// Every placement whose frame overlaps `rect`, in item order.
    pub fn layout_attributes_for_elements(
        &mut self,
        container: &ContainerMetrics,
        rect: Rect,
    ) -> Result<Vec<PlacementAttributes>, LayoutError> {
        self.prepare(container)?;
        let attributes = self.cache.attributes();
        let visible = match (&self.column_index, self.config.query_strategy) {
            (Some(index), ViewportQueryStrategy::ColumnIndex) => index.query(attributes, rect),
            _ => viewport::query(attributes, rect),
        };
        Ok(visible)
    }

    /// Placement of a single item from the current generation.
    ///
    /// Does not build; before the first build every index is out of range.
    pub fn layout_attributes_for_item(
        &self,
        index: usize,
    ) -> Result<PlacementAttributes, LayoutError> {
        self.cache.get(index).copied()
    }

    /// Drops the current generation. The next query rebuilds.
    pub fn invalidate_layout(&mut self) {
        self.cache.invalidate();
        self.column_index = None;
    }

    pub fn is_built(&self) -> bool {
        self.cache.is_built()
    }

    /// Number of completed builds.
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Read access to the current generation.
    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::FnMeasurementProvider;
    use pinboard_ui_graphics::EdgeInsets;

    type HeightFn = fn(usize, f32) -> f32;
    type Provider = FnMeasurementProvider<HeightFn, HeightFn>;

    fn heights(content: HeightFn, annotation: HeightFn) -> Provider {
        FnMeasurementProvider::new(content, annotation)
    }

    fn uniform() -> Provider {
        heights(|_, _| 100.0, |_, _| 20.0)
    }

    #[test]
    fn content_size_uses_insets_and_tallest_column() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(340.0, 3)
            .with_content_inset(EdgeInsets::from_components(10.0, 0.0, 10.0, 0.0));

        let size = layout.collection_view_content_size(&container).unwrap();

        assert_eq!(size, Size::new(320.0, 264.0));
        assert_eq!(
            layout.layout_attributes_for_item(1).unwrap().frame,
            Rect::new(166.0, 6.0, 148.0, 120.0)
        );
    }

    #[test]
    fn item_lookup_before_build_is_out_of_range() {
        let layout = PinboardLayout::new(uniform());
        assert_eq!(
            layout.layout_attributes_for_item(0),
            Err(LayoutError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn negative_content_width_is_rejected() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(10.0, 1)
            .with_content_inset(EdgeInsets::horizontal(20.0));

        assert_eq!(
            layout.collection_view_content_size(&container),
            Err(LayoutError::InvalidContentWidth { width: -30.0 })
        );
        assert!(!layout.is_built());
    }

    #[test]
    fn with_config_validates() {
        let config = PinboardLayoutConfig::default().with_number_of_columns(0);
        assert!(matches!(
            PinboardLayout::with_config(uniform(), config),
            Err(LayoutError::InvalidColumnCount { count: 0 })
        ));
    }

    #[test]
    fn config_setters_drop_the_cache() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(320.0, 4);
        layout.prepare(&container).unwrap();

        layout.set_number_of_columns(4).unwrap();
        assert!(!layout.is_built());

        layout.prepare(&container).unwrap();
        assert_eq!(layout.cache().column_count(), 4);
        assert_eq!(layout.cache().content_height(), 132.0);
    }

    #[test]
    fn rejected_setter_keeps_cache() {
        let mut layout = PinboardLayout::new(uniform());
        layout.prepare(&ContainerMetrics::new(320.0, 2)).unwrap();

        assert!(layout.set_cell_padding(-1.0).is_err());
        assert!(layout.is_built());
        assert_eq!(layout.config().cell_padding, 6.0);
    }

    #[test]
    fn unchanged_config_keeps_cache() {
        let mut layout = PinboardLayout::new(uniform());
        layout.prepare(&ContainerMetrics::new(320.0, 2)).unwrap();

        layout.set_cell_padding(6.0).unwrap();

        assert!(layout.is_built());
        assert_eq!(layout.generation(), 1);
    }

    #[test]
    fn unchanged_policy_keeps_cache() {
        let mut layout = PinboardLayout::new(uniform());
        layout.prepare(&ContainerMetrics::new(320.0, 2)).unwrap();

        layout.set_column_policy(ColumnPolicy::RoundRobin);

        assert!(layout.is_built());
        assert_eq!(layout.generation(), 1);
    }

    #[test]
    fn set_config_with_new_strategy_keeps_cache() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(320.0, 6);
        let rect = Rect::new(0.0, 130.0, 320.0, 10.0);
        let linear = layout.layout_attributes_for_elements(&container, rect).unwrap();

        let config = layout
            .config()
            .with_query_strategy(ViewportQueryStrategy::ColumnIndex);
        layout.set_config(config).unwrap();

        assert!(layout.is_built());
        assert_eq!(layout.config().query_strategy, ViewportQueryStrategy::ColumnIndex);
        let indexed = layout.layout_attributes_for_elements(&container, rect).unwrap();
        assert_eq!(layout.generation(), 1);
        assert_eq!(linear, indexed);
    }

    #[test]
    fn set_config_with_new_policy_rebuilds() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(320.0, 3);
        layout.prepare(&container).unwrap();

        let config = layout
            .config()
            .with_column_policy(ColumnPolicy::ShortestColumn);
        layout.set_config(config).unwrap();

        assert!(!layout.is_built());
        layout.prepare(&container).unwrap();
        assert_eq!(layout.cache().policy(), ColumnPolicy::ShortestColumn);
        assert_eq!(layout.generation(), 2);
    }

    #[test]
    fn column_index_strategy_answers_queries() {
        let config =
            PinboardLayoutConfig::default().with_query_strategy(ViewportQueryStrategy::ColumnIndex);
        let mut layout = PinboardLayout::with_config(uniform(), config).unwrap();
        let container = ContainerMetrics::new(320.0, 6);

        let visible = layout
            .layout_attributes_for_elements(&container, Rect::new(0.0, 130.0, 320.0, 10.0))
            .unwrap();

        let indices: Vec<usize> = visible.iter().map(|a| a.item_index).collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn switching_strategy_after_build_keeps_results() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(320.0, 8);
        let rect = Rect::new(0.0, 100.0, 200.0, 300.0);
        let linear = layout.layout_attributes_for_elements(&container, rect).unwrap();

        layout.set_query_strategy(ViewportQueryStrategy::ColumnIndex);
        let indexed = layout.layout_attributes_for_elements(&container, rect).unwrap();

        assert_eq!(layout.generation(), 1);
        assert_eq!(linear, indexed);
    }

    #[test]
    fn replace_provider_rebuilds_with_new_heights() {
        let mut layout = PinboardLayout::new(uniform());
        let container = ContainerMetrics::new(320.0, 1);
        layout.prepare(&container).unwrap();

        layout.replace_provider(heights(|_, _| 50.0, |_, _| 10.0));
        let size = layout.collection_view_content_size(&container).unwrap();

        assert_eq!(size.height, 72.0);
        assert_eq!(layout.generation(), 2);
    }
}

#[cfg(test)]
#[path = "tests/layout_properties.rs"]
mod properties;
