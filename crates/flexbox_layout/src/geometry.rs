//! Geometry primitives shared by the packer, the resolver and hosts.

/// Final position and size assigned to an item, in container coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Build a frame from its origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Container padding on all four sides.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Explicit padding per side, in CSS order (top, right, bottom, left).
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every side.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on left/right, `vertical` on top/bottom.
    #[inline]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of left and right padding.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom padding.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Iterate the sides with their names, for validation messages.
    pub fn sides(&self) -> [(&'static str, f32); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

/// Width bounds reported by a host for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WidthRange {
    pub min: f32,
    pub max: f32,
}

impl WidthRange {
    /// Bounds with an explicit minimum and maximum.
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// An item that can grow without limit.
    #[inline]
    pub const fn at_least(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// An item whose width cannot change.
    #[inline]
    pub const fn fixed(width: f32) -> Self {
        Self::new(width, width)
    }

    /// Clamp `value` into `[min, max]`. When the bounds cross, `min` wins.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.min(self.max).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_sums() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert!((padding.horizontal() - 6.0).abs() < 0.001);
        assert!((padding.vertical() - 4.0).abs() < 0.001);
        let sym = Padding::symmetric(10.0, 5.0);
        assert!((sym.left - 10.0).abs() < 0.001);
        assert!((sym.top - 5.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if crossed bounds do not resolve to the minimum.
    fn clamp_prefers_min_when_bounds_cross() {
        let range = WidthRange::new(80.0, 50.0);
        assert!((range.clamp(120.0) - 80.0).abs() < 0.001);
        assert!((WidthRange::at_least(10.0).clamp(500.0) - 500.0).abs() < 0.001);
        assert!((WidthRange::fixed(30.0).clamp(0.0) - 30.0).abs() < 0.001);
    }
}
