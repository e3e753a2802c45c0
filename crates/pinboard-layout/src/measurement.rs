//! Measurement capability consumed by the placement pass.
//!
//! The host owns the item data; the layout only asks it for two heights per
//! item at a given width. A provider is required to build a [`PinboardLayout`],
//! so there is no "missing delegate" state to check at runtime.
//!
//! [`PinboardLayout`]: crate::PinboardLayout

use crate::error::{LayoutError, MeasurementKind};

/// Supplies the heights of an item's two stacked blocks.
///
/// Implementations must return the same value for the same `(index, width)`
/// pair for as long as one layout generation is in use. Call
/// [`PinboardLayout::invalidate_layout`](crate::PinboardLayout::invalidate_layout)
/// after the underlying data changes.
pub trait MeasurementProvider {
    /// Height of the primary block (the photo) when laid out at `width`.
    fn content_height(&self, index: usize, width: f32) -> f32;

    /// Height of the secondary block (caption, labels) when laid out at `width`.
    fn annotation_height(&self, index: usize, width: f32) -> f32;
}

impl<P: MeasurementProvider + ?Sized> MeasurementProvider for &P {
    fn content_height(&self, index: usize, width: f32) -> f32 {
        (**self).content_height(index, width)
    }

    fn annotation_height(&self, index: usize, width: f32) -> f32 {
        (**self).annotation_height(index, width)
    }
}

impl<P: MeasurementProvider + ?Sized> MeasurementProvider for Box<P> {
    fn content_height(&self, index: usize, width: f32) -> f32 {
        (**self).content_height(index, width)
    }

    fn annotation_height(&self, index: usize, width: f32) -> f32 {
        (**self).annotation_height(index, width)
    }
}

/// Adapts a pair of closures into a [`MeasurementProvider`].
pub struct FnMeasurementProvider<C, A> {
    content: C,
    annotation: A,
}

impl<C, A> FnMeasurementProvider<C, A>
where
    C: Fn(usize, f32) -> f32,
    A: Fn(usize, f32) -> f32,
{
    pub fn new(content: C, annotation: A) -> Self {
        Self {
            content,
            annotation,
        }
    }
}

impl<C, A> MeasurementProvider for FnMeasurementProvider<C, A>
where
    C: Fn(usize, f32) -> f32,
    A: Fn(usize, f32) -> f32,
{
    fn content_height(&self, index: usize, width: f32) -> f32 {
        (self.content)(index, width)
    }

    fn annotation_height(&self, index: usize, width: f32) -> f32 {
        (self.annotation)(index, width)
    }
}

/// Heights of one item, checked against the provider contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ItemHeights {
    pub content: f32,
    pub annotation: f32,
}

impl ItemHeights {
    /// Asks `provider` for both heights of `index`, rejecting negative or
    /// non-finite values before they can reach a column offset.
    pub(crate) fn measure<P>(provider: &P, index: usize, width: f32) -> Result<Self, LayoutError>
    where
        P: MeasurementProvider + ?Sized,
    {
        let content = provider.content_height(index, width);
        let content = checked(index, MeasurementKind::Content, content)?;
        let annotation = provider.annotation_height(index, width);
        let annotation = checked(index, MeasurementKind::Annotation, annotation)?;
        Ok(Self {
            content,
            annotation,
        })
    }
}

fn checked(index: usize, kind: MeasurementKind, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidMeasurement { index, kind, value })
    }
}
