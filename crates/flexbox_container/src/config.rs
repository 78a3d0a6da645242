//! Long-lived container configuration.

use anyhow::{Result, bail};
use flexbox_layout::{FlexDirection, Padding};

/// Settings a container keeps between passes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexBoxConfig {
    /// Gap between adjacent items of a row.
    pub horizontal_spacing: f32,
    /// Gap between rows.
    pub vertical_spacing: f32,
    pub direction: FlexDirection,
    pub padding: Padding,
    /// Report each pass's duration through the log.
    pub verbose: bool,
}

impl FlexBoxConfig {
    #[must_use]
    pub const fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    #[must_use]
    pub const fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check every numeric field.
    ///
    /// # Errors
    /// Returns an error naming the first negative or non-finite field.
    pub fn validate(&self) -> Result<()> {
        ensure_length("horizontal spacing", self.horizontal_spacing)?;
        ensure_length("vertical spacing", self.vertical_spacing)?;
        validate_padding(self.padding)
    }
}

/// Reject negative, NaN and infinite lengths.
///
/// # Errors
/// Returns an error naming `what` when `value` is not a finite non-negative number.
pub fn ensure_length(what: &str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        bail!("{what} must be finite, got {value}");
    }
    if value < 0.0 {
        bail!("{what} must not be negative, got {value}");
    }
    Ok(value)
}

/// Reject padding with any negative or non-finite side.
///
/// # Errors
/// Returns an error naming the offending side.
pub fn validate_padding(padding: Padding) -> Result<()> {
    for (side, value) in padding.sides() {
        ensure_length(&format!("{side} padding"), value)?;
    }
    Ok(())
}
