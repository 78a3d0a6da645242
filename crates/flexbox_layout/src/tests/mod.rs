//! Tests for whole layout passes.

use core::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Result, anyhow};

use super::*;


/// How a test item answers measurement.
#[derive(Copy, Clone, Debug)]
pub struct FixedSize {
    pub min_width: f32,
    pub max_width: f32,
    height: Height,
}

#[derive(Copy, Clone, Debug)]
enum Height {
    /// Same height at every width.
    Fixed(f32),
    /// Text-like content: constant area, so narrower means taller.
    Area(f32),
}

impl FixedSize {
    pub const fn new(min_width: f32, max_width: f32, height: f32) -> Self {
        Self {
            min_width,
            max_width,
            height: Height::Fixed(height),
        }
    }

    pub const fn reflowing(min_width: f32, max_width: f32, area: f32) -> Self {
        Self {
            min_width,
            max_width,
            height: Height::Area(area),
        }
    }
}

/// Measurer answering from a fixed table; unknown items fail.
pub struct FixedMeasurer {
    sizes: HashMap<u32, FixedSize>,
    /// Probe width of every `width_range` call, in call order.
    probes: RefCell<Vec<f32>>,
}

impl FixedMeasurer {
    pub fn new(sizes: impl IntoIterator<Item = (u32, FixedSize)>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            probes: RefCell::new(Vec::new()),
        }
    }

    pub fn probe_widths(&self) -> Vec<f32> {
        self.probes.borrow().clone()
    }

    fn size(&self, item: u32) -> Result<FixedSize> {
        self.sizes
            .get(&item)
            .copied()
            .ok_or_else(|| anyhow!("no size registered for {item}"))
    }
}

impl MeasureItem<u32> for FixedMeasurer {
    fn width_range(&self, item: u32, probe_width: f32) -> Result<WidthRange> {
        self.probes.borrow_mut().push(probe_width);
        let size = self.size(item)?;
        Ok(WidthRange::new(size.min_width, size.max_width))
    }

    fn preferred_height(&self, item: u32, width: f32) -> Result<f32> {
        match self.size(item)?.height {
            Height::Fixed(height) => Ok(height),
            Height::Area(area) if width > 0.0 => Ok(area / width),
            Height::Area(area) => Ok(area),
        }
    }
}

/// Default metadata for `handles`, in order.
pub fn plain(handles: impl IntoIterator<Item = u32>) -> Vec<(u32, ItemMetadata)> {
    handles
        .into_iter()
        .map(|handle| (handle, ItemMetadata::default()))
        .collect()
}

/// Row container `width` wide with no padding or spacing.
pub fn row_inputs(width: f32) -> FlexContainerInputs {
    FlexContainerInputs {
        container_width: width,
        ..FlexContainerInputs::default()
    }
}
