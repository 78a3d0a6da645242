//! Flex container integration.
//!
//! Wraps the pure algorithm in `flexbox_layout` with the state a hosting UI
//! container keeps between passes: validated spacing, direction and padding,
//! per-item order and grow declarations, the last computed height and a
//! guard that defers layout requests raised while a pass is running.

mod config;
mod container;
mod guard;
mod host;
mod metadata;

#[cfg(test)]
mod tests;

pub use config::{FlexBoxConfig, ensure_length, validate_padding};
pub use container::{FlexBox, PassOutcome, PassReport};
pub use flexbox_layout::{FlexDirection, Frame, ItemMetadata, MeasureItem, Padding, WidthRange};
pub use guard::{LayoutGuard, LayoutState, PassScope};
pub use host::LayoutHost;
pub use metadata::MetadataTable;
