//! Display ordering of flex items.

use crate::item::FlexItem;

/// True when at least one item declares a non-default order.
#[inline]
pub fn has_declared_order<K>(items: &[FlexItem<K>]) -> bool {
    items.iter().any(|item| item.order != 0)
}

/// Reorder `items` by declared order when any item declares one.
///
/// The sort is stable: items sharing an order value keep their source order.
pub fn sort_by_declared_order<K>(items: &mut [FlexItem<K>]) {
    if has_declared_order(items) {
        items.sort_by_key(|item| item.order);
    }
}
