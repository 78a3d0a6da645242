//! Per-item order and grow values owned by a container.

use core::hash::Hash;
use std::collections::HashMap;

use anyhow::{Result, bail};
use flexbox_layout::ItemMetadata;

/// Typed side-table from item key to its declared layout metadata.
///
/// Items without an entry read as [`ItemMetadata::default`].
#[derive(Clone, Debug)]
pub struct MetadataTable<K> {
    entries: HashMap<K, Entry>,
}

/// Explicitly declared values; `None` falls back to the default.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Entry {
    order: Option<i32>,
    grow: Option<f32>,
}

impl Entry {
    const fn is_empty(&self) -> bool {
        self.order.is_none() && self.grow.is_none()
    }
}

impl<K> Default for MetadataTable<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> MetadataTable<K> {
    /// Effective metadata for `item`.
    pub fn get(&self, item: K) -> ItemMetadata {
        let defaults = ItemMetadata::default();
        self.entries
            .get(&item)
            .map_or(defaults, |entry| ItemMetadata {
                order: entry.order.unwrap_or(defaults.order),
                grow: entry.grow.unwrap_or(defaults.grow),
            })
    }

    pub fn order(&self, item: K) -> i32 {
        self.get(item).order
    }

    pub fn grow(&self, item: K) -> f32 {
        self.get(item).grow
    }

    pub fn set_order(&mut self, item: K, order: i32) {
        self.entries.entry(item).or_default().order = Some(order);
    }

    /// Declare the grow factor of `item`.
    ///
    /// # Errors
    /// Returns an error for negative or non-finite factors; the old value is kept.
    pub fn set_grow(&mut self, item: K, grow: f32) -> Result<()> {
        if !grow.is_finite() || grow < 0.0 {
            bail!("grow factor must be a finite non-negative number, got {grow}");
        }
        self.entries.entry(item).or_default().grow = Some(grow);
        Ok(())
    }

    /// Drop the declared order; the item reads order 0 again.
    pub fn clear_order(&mut self, item: K) {
        self.update(item, |entry| entry.order = None);
    }

    /// Drop the declared grow factor; the item reads grow 1 again.
    pub fn clear_grow(&mut self, item: K) {
        self.update(item, |entry| entry.grow = None);
    }

    /// Forget everything declared for `item`. Returns whether anything was stored.
    pub fn forget(&mut self, item: K) -> bool {
        self.entries.remove(&item).is_some()
    }

    /// Number of items with at least one declared value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn update(&mut self, item: K, change: impl FnOnce(&mut Entry)) {
        if let Some(entry) = self.entries.get_mut(&item) {
            change(entry);
            if entry.is_empty() {
                self.entries.remove(&item);
            }
        }
    }
}
