//! Flex items: per-pass snapshots of host items plus the measurement seam.

use core::fmt::Debug;

use anyhow::{Context as _, Result};

use crate::geometry::WidthRange;

/// Width at which an item's intrinsic minimum is probed.
///
/// Small enough that items whose minimum depends on available width report
/// their narrowest layout.
pub const PROBE_WIDTH: f32 = 10.0;

/// Measurement interface a host provides for its items.
///
/// Measurement is read-only. Errors abort the current pass.
pub trait MeasureItem<K> {
    /// Minimum and maximum width of `item` when offered `probe_width`.
    ///
    /// # Errors
    /// Returns an error when the host cannot measure the item.
    fn width_range(&self, item: K, probe_width: f32) -> Result<WidthRange>;

    /// Preferred height of `item` when laid out at `width`.
    ///
    /// # Errors
    /// Returns an error when the host cannot measure the item.
    fn preferred_height(&self, item: K, width: f32) -> Result<f32>;
}

/// Layout metadata a container owner declares for an item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemMetadata {
    /// Display order; lower values come first. Ties keep source order.
    pub order: i32,
    /// Share of leftover row width; 0 never grows.
    pub grow: f32,
}

impl Default for ItemMetadata {
    fn default() -> Self {
        Self {
            order: 0,
            grow: 1.0,
        }
    }
}

/// Snapshot of one item taken at the start of a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem<K> {
    /// Host-owned reference, never dereferenced by the layout.
    pub handle: K,
    /// Minimum width, probed at [`PROBE_WIDTH`].
    pub min_width: f32,
    /// Maximum width, probed at [`PROBE_WIDTH`].
    pub max_width: f32,
    pub order: i32,
    pub grow: f32,
}

impl<K> FlexItem<K> {
    /// Width bounds of this item.
    #[inline]
    pub const fn width_range(&self) -> WidthRange {
        WidthRange::new(self.min_width, self.max_width)
    }
}

/// Build a [`FlexItem`] for `handle` by probing the host and reading its metadata.
///
/// Negative minimum widths and negative grow factors are clamped to zero.
///
/// # Errors
/// Propagates measurement errors from `measurer`.
pub fn adapt_item<K, M>(handle: K, metadata: ItemMetadata, measurer: &M) -> Result<FlexItem<K>>
where
    K: Copy + Debug,
    M: MeasureItem<K> + ?Sized,
{
    let range = measurer
        .width_range(handle, PROBE_WIDTH)
        .with_context(|| format!("measuring width range of item {handle:?}"))?;
    Ok(FlexItem {
        handle,
        min_width: range.min.max(0.0),
        max_width: range.max,
        order: metadata.order,
        grow: metadata.grow.max(0.0),
    })
}

/// Adapt every `(handle, metadata)` pair, preserving input order.
///
/// # Errors
/// Stops at the first item whose measurement fails.
pub fn collect_items<K, M, I>(children: I, measurer: &M) -> Result<Vec<FlexItem<K>>>
where
    K: Copy + Debug,
    M: MeasureItem<K> + ?Sized,
    I: IntoIterator<Item = (K, ItemMetadata)>,
{
    children
        .into_iter()
        .map(|(handle, metadata)| adapt_item(handle, metadata, measurer))
        .collect()
}
