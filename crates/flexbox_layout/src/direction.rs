//! Container direction.

/// Direction in which a container lays out its items.
///
/// Only the row variants wrap and distribute growth. The column variants stack
/// every item on its own band at the container's content width.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    /// Left to right, rows top to bottom.
    #[default]
    Row,
    /// Rows are packed left to right and rendered right to left.
    RowReverse,
    /// One item per band, top to bottom.
    Column,
    /// One item per band, bottom to top.
    ColumnReverse,
}

impl FlexDirection {
    /// True for `Row` and `RowReverse`.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// True when the visual order is the reverse of the packing order.
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}
