//! Stacked layout used by the column directions.
//!
//! Every item sits on its own band and is offered the full content width.
//! There is no wrapping and no vertical growth.

use core::fmt::Debug;

use anyhow::{Context as _, Result};

use crate::geometry::Frame;
use crate::item::{FlexItem, MeasureItem};
use crate::resolve::{ItemPlacement, ResolvedRow, RowContext};
use crate::rows::{Grid, Row};

/// Arrange `items` one per band; `reverse` stacks them bottom to top.
pub fn stack_items<K>(mut items: Vec<FlexItem<K>>, reverse: bool) -> Grid<K> {
    if reverse {
        items.reverse();
    }
    Grid::single_file(items)
}

/// Resolve a stacked band: each item takes the content width within its bounds.
///
/// # Errors
/// Propagates height measurement failures.
pub fn resolve_band<K, M>(row: &Row<K>, ctx: RowContext, measurer: &M) -> Result<ResolvedRow<K>>
where
    K: Copy + Debug,
    M: MeasureItem<K> + ?Sized,
{
    let mut placements = Vec::with_capacity(row.len());
    let mut height = 0.0f32;
    for item in row.items() {
        let width = item.width_range().clamp(ctx.available_width);
        let item_height = measurer
            .preferred_height(item.handle, width)
            .with_context(|| format!("measuring height of stacked item {:?}", item.handle))?;
        height = height.max(item_height);
        placements.push(ItemPlacement {
            handle: item.handle,
            frame: Frame::new(ctx.origin_x, ctx.origin_y, width, item_height),
        });
    }
    Ok(ResolvedRow { placements, height })
}
