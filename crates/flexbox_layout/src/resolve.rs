//! Width and height resolution for packed rows.
//!
//! Leftover width is handed out item by item in visual order. After each
//! item the per-unit share is recomputed from what is left, so when an item
//! is clamped at its maximum the unused part of its share is dropped rather
//! than redistributed. Heights are measured only once a width is final.

use core::fmt::Debug;

use anyhow::{Context as _, Result};
use log::trace;

use crate::geometry::Frame;
use crate::item::{FlexItem, MeasureItem};
use crate::rows::Row;

/// Per-row inputs for resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowContext {
    /// Content width (container width minus horizontal padding).
    pub available_width: f32,
    /// Gap between adjacent items.
    pub spacing: f32,
    /// x of the first visual item.
    pub origin_x: f32,
    /// y of the row's top edge.
    pub origin_y: f32,
    /// Render the row right to left.
    pub reverse: bool,
}

/// Final geometry for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement<K> {
    pub handle: K,
    pub frame: Frame,
}

/// A row after resolution, placements in visual (left to right) order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRow<K> {
    pub placements: Vec<ItemPlacement<K>>,
    /// Tallest item height in the row.
    pub height: f32,
}

/// Sequential share of leftover width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrowShare {
    remaining: f32,
    grow_sum: f32,
}

impl GrowShare {
    #[inline]
    pub const fn new(remaining: f32, grow_sum: f32) -> Self {
        Self {
            remaining,
            grow_sum,
        }
    }

    /// Width granted per unit of grow factor. Zero once the grow sum is spent.
    #[inline]
    pub fn unit(&self) -> f32 {
        if self.grow_sum > 0.0 {
            let unit = self.remaining / self.grow_sum;
            if unit.is_finite() { unit } else { 0.0 }
        } else {
            0.0
        }
    }

    /// Additional width for an item with `grow`, then deduct it from the pool.
    ///
    /// The full share is deducted even if the caller clamps the item below it.
    pub fn take(&mut self, grow: f32) -> f32 {
        let additional = self.unit() * grow;
        self.remaining -= additional;
        self.grow_sum -= grow;
        additional
    }

    #[inline]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Width left over once minimum widths and spacing are accounted for.
#[inline]
pub fn leftover_width<K>(row: &Row<K>, available_width: f32, spacing: f32) -> f32 {
    available_width - (row.min_width() + row.spacing_total(spacing))
}

/// Item widths for `row`, in the order the items are visited.
pub fn resolve_widths<'row, K>(
    items: impl IntoIterator<Item = &'row FlexItem<K>>,
    mut share: GrowShare,
) -> Vec<f32>
where
    K: 'row,
{
    items
        .into_iter()
        .map(|item| {
            let additional = share.take(item.grow);
            item.width_range().clamp(item.min_width + additional)
        })
        .collect()
}

/// Resolve widths, heights and positions for every item of `row`.
///
/// # Errors
/// Propagates height measurement failures.
pub fn resolve_row<K, M>(row: &Row<K>, ctx: RowContext, measurer: &M) -> Result<ResolvedRow<K>>
where
    K: Copy + Debug,
    M: MeasureItem<K> + ?Sized,
{
    let share = GrowShare::new(
        leftover_width(row, ctx.available_width, ctx.spacing),
        row.grow_sum(),
    );
    let visual: Vec<&FlexItem<K>> = if ctx.reverse {
        row.items().iter().rev().collect()
    } else {
        row.items().iter().collect()
    };
    let widths = resolve_widths(visual.iter().copied(), share);

    let mut placements = Vec::with_capacity(visual.len());
    let mut cursor_x = ctx.origin_x;
    let mut row_height = 0.0f32;
    for (item, width) in visual.into_iter().zip(widths) {
        let height = measurer
            .preferred_height(item.handle, width)
            .with_context(|| format!("measuring height of item {:?} at width {width}", item.handle))?;
        row_height = row_height.max(height);
        trace!(
            target: "flexbox::resolve",
            "item {:?}: min={:.2} grow={:.2} -> width={:.2} height={:.2}",
            item.handle,
            item.min_width,
            item.grow,
            width,
            height
        );
        placements.push(ItemPlacement {
            handle: item.handle,
            frame: Frame::new(cursor_x, ctx.origin_y, width, height),
        });
        cursor_x += width + ctx.spacing;
    }
    Ok(ResolvedRow {
        placements,
        height: row_height,
    })
}
