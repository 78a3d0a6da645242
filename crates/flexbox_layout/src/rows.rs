//! Greedy row packing.

use core::mem;

use log::trace;

use crate::item::FlexItem;

/// Horizontal limits a row must respect while it is being packed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowBounds {
    /// Content width (container width minus horizontal padding).
    pub available_width: f32,
    /// Gap between adjacent items of a row.
    pub spacing: f32,
    /// Left plus right container padding, charged against every row.
    pub padding: f32,
}

/// Items sharing one horizontal band, in packing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<K> {
    items: Vec<FlexItem<K>>,
    /// Sum of item minimum widths, spacing excluded.
    min_width: f32,
    /// Minimum widths plus the spacing between them.
    used_width: f32,
    grow_sum: f32,
    overflow: bool,
}

impl<K> Default for Row<K> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            min_width: 0.0,
            used_width: 0.0,
            grow_sum: 0.0,
            overflow: false,
        }
    }
}

impl<K> Row<K> {
    /// Items in packing order.
    #[inline]
    pub fn items(&self) -> &[FlexItem<K>] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the items' minimum widths.
    #[inline]
    pub const fn min_width(&self) -> f32 {
        self.min_width
    }

    /// Sum of the items' grow factors.
    #[inline]
    pub const fn grow_sum(&self) -> f32 {
        self.grow_sum
    }

    /// True for a single item whose minimum width alone does not fit.
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        self.overflow
    }

    /// Total spacing between the row's items.
    #[inline]
    pub fn spacing_total(&self, spacing: f32) -> f32 {
        spacing * self.items.len().saturating_sub(1) as f32
    }

    /// Whether `item` can join this non-empty row without exceeding `bounds`.
    fn accepts(&self, item: &FlexItem<K>, bounds: RowBounds) -> bool {
        self.used_width + bounds.spacing + item.min_width + bounds.padding
            <= bounds.available_width
    }

    fn push(&mut self, item: FlexItem<K>, spacing: f32) {
        if !self.items.is_empty() {
            self.used_width += spacing;
        }
        self.used_width += item.min_width;
        self.min_width += item.min_width;
        self.grow_sum += item.grow;
        self.items.push(item);
    }
}

/// Rows indexed top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<K> {
    rows: Vec<Row<K>>,
}

impl<K> Default for Grid<K> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<K> Grid<K> {
    /// One row per item, used by the stacked column directions.
    pub fn single_file(items: Vec<FlexItem<K>>) -> Self {
        let rows = items
            .into_iter()
            .map(|item| {
                let mut row = Row::default();
                row.push(item, 0.0);
                row
            })
            .collect();
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Row<K>] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row<K>> {
        self.rows.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of items across all rows.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Item handles per row, in packing order.
    pub fn handles(&self) -> Vec<Vec<K>>
    where
        K: Copy,
    {
        self.rows
            .iter()
            .map(|row| row.items.iter().map(|item| item.handle).collect())
            .collect()
    }
}

/// Pack `items` into rows left to right in a single greedy pass.
///
/// An item that does not fit the current row starts the next one. An item
/// that does not fit even an empty row is placed alone in an overflow row,
/// which closes immediately; it is never split or rewrapped.
pub fn build_rows<K: Copy>(items: &[FlexItem<K>], bounds: RowBounds) -> Grid<K> {
    let mut grid = Grid::default();
    let mut current = Row::default();
    for item in items.iter().copied() {
        if !current.is_empty() && !current.accepts(&item, bounds) {
            trace!(
                target: "flexbox::rows",
                "row {} closed: items={} used={:.2}",
                grid.rows.len(),
                current.len(),
                current.used_width
            );
            grid.rows.push(mem::take(&mut current));
        }
        if current.is_empty() && item.min_width + bounds.padding > bounds.available_width {
            trace!(
                target: "flexbox::rows",
                "row {} overflow singleton: min_width={:.2} available={:.2}",
                grid.rows.len(),
                item.min_width,
                bounds.available_width
            );
            current.push(item, bounds.spacing);
            current.overflow = true;
            grid.rows.push(mem::take(&mut current));
            continue;
        }
        current.push(item, bounds.spacing);
    }
    if !current.is_empty() {
        grid.rows.push(current);
    }
    grid
}
