//! Scroll axis and main/cross axis projections.

use waterfall_graphics::{EdgeInsets, Rect, Size};

/// Direction in which the content scrolls.
///
/// Vertical layouts split the width into columns, horizontal layouts split the
/// height into rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollAxis {
    Horizontal,
    #[default]
    Vertical,
}

impl ScrollAxis {
    pub fn is_vertical(self) -> bool {
        matches!(self, ScrollAxis::Vertical)
    }

    /// Extent of `size` along the scroll direction.
    pub fn main(self, size: Size) -> f32 {
        match self {
            ScrollAxis::Vertical => size.height,
            ScrollAxis::Horizontal => size.width,
        }
    }

    /// Extent of `size` across the scroll direction.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            ScrollAxis::Vertical => size.width,
            ScrollAxis::Horizontal => size.height,
        }
    }

    /// Inset before the first item along the scroll direction.
    pub fn leading_inset(self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollAxis::Vertical => insets.top,
            ScrollAxis::Horizontal => insets.left,
        }
    }

    /// Inset after the last item along the scroll direction.
    pub fn trailing_inset(self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollAxis::Vertical => insets.bottom,
            ScrollAxis::Horizontal => insets.right,
        }
    }

    pub fn cross_leading_inset(self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollAxis::Vertical => insets.left,
            ScrollAxis::Horizontal => insets.top,
        }
    }

    /// Both insets across the scroll direction, added together.
    pub fn cross_inset_sum(self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollAxis::Vertical => insets.horizontal_sum(),
            ScrollAxis::Horizontal => insets.vertical_sum(),
        }
    }

    /// Builds a rectangle from main/cross coordinates.
    pub fn rect(
        self,
        main_offset: f32,
        cross_offset: f32,
        main_size: f32,
        cross_size: f32,
    ) -> Rect {
        match self {
            ScrollAxis::Vertical => Rect::new(cross_offset, main_offset, cross_size, main_size),
            ScrollAxis::Horizontal => Rect::new(main_offset, cross_offset, main_size, cross_size),
        }
    }

    /// Size that only spans the scroll direction; the other dimension is zero.
    pub fn main_only_size(self, extent: f32) -> Size {
        match self {
            ScrollAxis::Vertical => Size::new(0.0, extent),
            ScrollAxis::Horizontal => Size::new(extent, 0.0),
        }
    }

    /// Start offset of `rect` along the scroll direction.
    pub fn rect_main_start(self, rect: &Rect) -> f32 {
        match self {
            ScrollAxis::Vertical => rect.y,
            ScrollAxis::Horizontal => rect.x,
        }
    }

    /// End offset of `rect` along the scroll direction.
    pub fn rect_main_end(self, rect: &Rect) -> f32 {
        match self {
            ScrollAxis::Vertical => rect.max_y(),
            ScrollAxis::Horizontal => rect.max_x(),
        }
    }
}
