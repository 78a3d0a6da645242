//! The host UI framework as seen by a flex container.

use flexbox_layout::{Frame, MeasureItem};

/// Scene-graph queries and geometry application a host provides.
///
/// Measurement comes from [`MeasureItem`]. `place` is only called once every
/// measurement of a pass has succeeded.
pub trait LayoutHost<K>: MeasureItem<K> {
    /// Managed children of the container, in source order.
    fn children(&self) -> Vec<K>;

    fn is_visible(&self, item: K) -> bool;

    fn is_managed(&self, item: K) -> bool;

    /// Apply final geometry to `item`.
    fn place(&mut self, item: K, frame: Frame);
}
