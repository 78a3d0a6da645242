//! The flex container: configuration, metadata and pass orchestration.

use core::fmt::Debug;
use core::hash::Hash;
use core::time::Duration;
use std::time::Instant;

use anyhow::{Context as _, Result, bail};
use flexbox_layout::{FlexContainerInputs, FlexDirection, Padding, plan_layout};
use log::{debug, info};

use crate::config::{FlexBoxConfig, ensure_length, validate_padding};
use crate::guard::{LayoutGuard, LayoutState};
use crate::host::LayoutHost;
use crate::metadata::MetadataTable;

/// Summary of a completed pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PassReport {
    pub rows: usize,
    pub items: usize,
    pub content_height: f32,
    pub duration: Duration,
}

/// What a call to [`FlexBox::layout`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum PassOutcome {
    /// Items were placed and the computed height updated.
    Completed(PassReport),
    /// The content width was not positive; nothing was measured or placed.
    Skipped,
}

/// A horizontally fluid container whose height follows its content.
#[derive(Debug)]
pub struct FlexBox<K> {
    config: FlexBoxConfig,
    metadata: MetadataTable<K>,
    guard: LayoutGuard,
    width: f32,
    computed_height: f32,
    /// Item keys per row from the last completed pass, in packing order.
    rows: Vec<Vec<K>>,
}

impl<K> Default for FlexBox<K> {
    fn default() -> Self {
        Self {
            config: FlexBoxConfig::default(),
            metadata: MetadataTable::default(),
            guard: LayoutGuard::new(),
            width: 0.0,
            computed_height: 0.0,
            rows: Vec::new(),
        }
    }
}

impl<K> FlexBox<K>
where
    K: Copy + Debug + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Container with `config`.
    ///
    /// # Errors
    /// Returns an error if `config` holds a negative or non-finite length.
    pub fn with_config(config: FlexBoxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Handle hosts keep to request passes and install their trigger.
    pub fn guard(&self) -> LayoutGuard {
        self.guard.clone()
    }

    pub fn layout_state(&self) -> LayoutState {
        self.guard.state()
    }

    /// Ask the host for a new pass, deferred if one is running.
    pub fn request_layout(&self) {
        self.guard.request_layout();
    }

    pub const fn config(&self) -> &FlexBoxConfig {
        &self.config
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Minimum height: the content height of the last completed pass.
    pub const fn computed_min_height(&self) -> f32 {
        self.computed_height
    }

    /// Preferred height; always equal to the minimum height.
    pub const fn computed_pref_height(&self) -> f32 {
        self.computed_height
    }

    /// Item keys per row from the last completed pass.
    pub fn rows(&self) -> &[Vec<K>] {
        &self.rows
    }

    /// Record a new outer width from the host.
    ///
    /// # Errors
    /// Returns an error for NaN or infinite widths.
    pub fn resize(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() {
            bail!("container width must be finite, got {width}");
        }
        self.store(width, |container| &mut container.width);
        Ok(())
    }

    /// # Errors
    /// Returns an error for negative or non-finite spacing.
    pub fn set_horizontal_spacing(&mut self, spacing: f32) -> Result<()> {
        let value = ensure_length("horizontal spacing", spacing)?;
        self.store(value, |container| &mut container.config.horizontal_spacing);
        Ok(())
    }

    /// # Errors
    /// Returns an error for negative or non-finite spacing.
    pub fn set_vertical_spacing(&mut self, spacing: f32) -> Result<()> {
        let value = ensure_length("vertical spacing", spacing)?;
        self.store(value, |container| &mut container.config.vertical_spacing);
        Ok(())
    }

    /// # Errors
    /// Returns an error if any side is negative or non-finite.
    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        validate_padding(padding)?;
        if self.config.padding != padding {
            self.config.padding = padding;
            self.request_layout();
        }
        Ok(())
    }

    pub fn set_direction(&mut self, direction: FlexDirection) {
        if self.config.direction != direction {
            self.config.direction = direction;
            self.request_layout();
        }
    }

    /// Toggle the per-pass duration report. Does not request a pass.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    pub fn order(&self, item: K) -> i32 {
        self.metadata.order(item)
    }

    pub fn grow(&self, item: K) -> f32 {
        self.metadata.grow(item)
    }

    /// Declare the display order of `item`.
    pub fn set_order(&mut self, item: K, order: i32) {
        self.metadata.set_order(item, order);
        self.request_layout();
    }

    /// Declare the grow factor of `item`.
    ///
    /// # Errors
    /// Returns an error for negative or non-finite factors.
    pub fn set_grow(&mut self, item: K, grow: f32) -> Result<()> {
        self.metadata.set_grow(item, grow)?;
        self.request_layout();
        Ok(())
    }

    pub fn clear_order(&mut self, item: K) {
        self.metadata.clear_order(item);
        self.request_layout();
    }

    pub fn clear_grow(&mut self, item: K) {
        self.metadata.clear_grow(item);
        self.request_layout();
    }

    /// Drop all metadata of an item that left the container.
    pub fn forget(&mut self, item: K) {
        if self.metadata.forget(item) {
            self.request_layout();
        }
    }

    /// Geometry inputs for a pass at the current width.
    pub fn inputs(&self) -> FlexContainerInputs {
        FlexContainerInputs {
            container_width: self.width,
            horizontal_spacing: self.config.horizontal_spacing,
            vertical_spacing: self.config.vertical_spacing,
            direction: self.config.direction,
            padding: self.config.padding,
        }
    }

    /// Run one pass against `host`.
    ///
    /// Visible managed children are measured, packed and resolved first;
    /// placements are applied only when all of that succeeded. Requests made
    /// while the pass runs are delivered once it has finished.
    ///
    /// # Errors
    /// Returns an error if a pass is already running or a measurement fails.
    /// In both cases nothing is placed, the computed height is unchanged and
    /// the guard still reports that a layout is needed.
    pub fn layout<H>(&mut self, host: &mut H) -> Result<PassOutcome>
    where
        H: LayoutHost<K>,
    {
        let scope = self.guard.begin_pass()?;
        let started = Instant::now();
        let inputs = self.inputs();

        let children: Vec<K> = host
            .children()
            .into_iter()
            .filter(|child| host.is_visible(*child) && host.is_managed(*child))
            .collect();
        let metadata = &self.metadata;
        let snapshot = children.iter().map(|child| (*child, metadata.get(*child)));
        let Some(plan) = plan_layout(&inputs, snapshot, &*host).context("flex layout pass failed")?
        else {
            debug!(
                target: "flexbox::container",
                "pass skipped at width {:.2}; keeping height {:.2}",
                self.width,
                self.computed_height
            );
            scope.complete();
            return Ok(PassOutcome::Skipped);
        };

        for placement in plan.placements() {
            host.place(placement.handle, placement.frame);
        }
        self.computed_height = plan.content_height;
        self.rows = plan.grid.handles();
        scope.complete();

        let duration = started.elapsed();
        if self.config.verbose {
            info!(
                target: "flexbox::container",
                "# layout duration: {} us ({} items, {} rows)",
                duration.as_micros(),
                plan.item_count(),
                plan.rows.len()
            );
        }
        Ok(PassOutcome::Completed(PassReport {
            rows: plan.rows.len(),
            items: plan.item_count(),
            content_height: plan.content_height,
            duration,
        }))
    }

    /// Write `value` into `slot`, requesting a pass when it changed.
    fn store(&mut self, value: f32, slot: fn(&mut Self) -> &mut f32) {
        let target = slot(self);
        if target.to_bits() != value.to_bits() {
            *target = value;
            self.request_layout();
        }
    }
}
