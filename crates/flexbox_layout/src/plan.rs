//! One complete layout pass over a snapshot of items.

use core::fmt::Debug;

use anyhow::{Context as _, Result};
use log::debug;

use crate::direction::FlexDirection;
use crate::geometry::Padding;
use crate::item::{ItemMetadata, MeasureItem, collect_items};
use crate::order::sort_by_declared_order;
use crate::resolve::{ItemPlacement, ResolvedRow, RowContext, resolve_row};
use crate::rows::{Grid, RowBounds, build_rows};
use crate::stack::{resolve_band, stack_items};

/// Container geometry and settings for one pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexContainerInputs {
    /// Outer width of the container.
    pub container_width: f32,
    /// Gap between adjacent items of a row.
    pub horizontal_spacing: f32,
    /// Gap between rows.
    pub vertical_spacing: f32,
    pub direction: FlexDirection,
    pub padding: Padding,
}

impl FlexContainerInputs {
    /// Width left for items once horizontal padding is removed.
    #[inline]
    pub fn available_width(&self) -> f32 {
        self.container_width - self.padding.horizontal()
    }

    /// Bounds used while packing rows.
    #[inline]
    pub fn row_bounds(&self) -> RowBounds {
        RowBounds {
            available_width: self.available_width(),
            spacing: self.horizontal_spacing,
            padding: self.padding.horizontal(),
        }
    }

    fn row_context(&self, origin_y: f32) -> RowContext {
        RowContext {
            available_width: self.available_width(),
            spacing: self.horizontal_spacing,
            origin_x: self.padding.left,
            origin_y,
            reverse: self.direction == FlexDirection::RowReverse,
        }
    }
}

/// Everything a pass computed, ready to be applied to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan<K> {
    /// Rows in packing order.
    pub grid: Grid<K>,
    /// Resolved rows, top to bottom, parallel to `grid`.
    pub rows: Vec<ResolvedRow<K>>,
    /// Padding plus row heights plus the spacing between rows.
    pub content_height: f32,
}

impl<K> LayoutPlan<K> {
    /// Placements of every item, row by row in visual order.
    pub fn placements(&self) -> impl Iterator<Item = &ItemPlacement<K>> {
        self.rows.iter().flat_map(|row| row.placements.iter())
    }

    /// Number of items the plan places.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|row| row.placements.len()).sum()
    }
}

/// Run a full pass: adapt, order, pack and resolve.
///
/// Returns `Ok(None)` without measuring anything when the content width is not
/// positive. Nothing is applied to the host; callers commit the returned plan.
///
/// An empty child set still completes: the plan has no rows and its content
/// height is the vertical padding.
///
/// # Errors
/// Propagates the first measurement failure.
pub fn plan_layout<K, M, I>(
    inputs: &FlexContainerInputs,
    children: I,
    measurer: &M,
) -> Result<Option<LayoutPlan<K>>>
where
    K: Copy + Debug,
    M: MeasureItem<K> + ?Sized,
    I: IntoIterator<Item = (K, ItemMetadata)>,
{
    let available = inputs.available_width();
    if available <= 0.0 {
        debug!(
            target: "flexbox::plan",
            "skipping pass: container_width={:.2} available={available:.2}",
            inputs.container_width
        );
        return Ok(None);
    }

    let mut items = collect_items(children, measurer)?;
    sort_by_declared_order(&mut items);

    let grid = if inputs.direction.is_row() {
        build_rows(&items, inputs.row_bounds())
    } else {
        stack_items(items, inputs.direction.is_reverse())
    };
    debug!(
        target: "flexbox::plan",
        "packed {} items into {} rows (available={available:.2}, direction={:?})",
        grid.item_count(),
        grid.len(),
        inputs.direction
    );

    let mut rows = Vec::with_capacity(grid.len());
    let mut cursor_y = inputs.padding.top;
    for (index, row) in grid.rows().iter().enumerate() {
        if index > 0 {
            cursor_y += inputs.vertical_spacing;
        }
        let ctx = inputs.row_context(cursor_y);
        let resolved = if inputs.direction.is_row() {
            resolve_row(row, ctx, measurer)
        } else {
            resolve_band(row, ctx, measurer)
        }
        .with_context(|| format!("resolving row {index}"))?;
        cursor_y += resolved.height;
        rows.push(resolved);
    }
    let content_height = cursor_y + inputs.padding.bottom;

    Ok(Some(LayoutPlan {
        grid,
        rows,
        content_height,
    }))
}
