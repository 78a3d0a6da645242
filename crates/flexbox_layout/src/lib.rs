//! Row-wrapping flex layout.
//!
//! Items carry an intrinsic width range, a display order and a grow factor.
//! A pass orders them, packs them left to right into rows bounded by the
//! container's content width, hands leftover width to growable items and
//! measures each item's height at its final width. The crate is pure: hosts
//! supply measurements through [`MeasureItem`] and apply the returned
//! [`LayoutPlan`] themselves.

mod direction;
mod geometry;
mod item;
mod order;
mod plan;
mod resolve;
mod rows;
mod stack;

#[cfg(test)]
mod tests;

pub use direction::FlexDirection;
pub use geometry::{Frame, Padding, WidthRange};
pub use item::{FlexItem, ItemMetadata, MeasureItem, PROBE_WIDTH, adapt_item, collect_items};
pub use order::{has_declared_order, sort_by_declared_order};
pub use plan::{FlexContainerInputs, LayoutPlan, plan_layout};
pub use resolve::{
    GrowShare, ItemPlacement, ResolvedRow, RowContext, leftover_width, resolve_row, resolve_widths,
};
pub use rows::{Grid, Row, RowBounds, build_rows};
pub use stack::{resolve_band, stack_items};
