//! Delegate surface consumed by the waterfall layout.
//!
//! This module defines the [`WaterfallDelegate`] trait which answers per-item
//! size queries and may override layout defaults, plus [`ClosureDelegate`] for
//! hosts that would rather hand over closures than implement a trait.

use waterfall_graphics::EdgeInsets;

use crate::axis::ScrollAxis;

/// Answers size queries for items in a waterfall layout.
///
/// The two size queries are always required. Everything else is optional:
/// returning `None` (the default) means "use the layout's configured value".
pub trait WaterfallDelegate {
    /// Height of item `index` when laid out at the given column `width`.
    ///
    /// Used when scrolling vertically.
    fn height_for_item(&self, index: usize, width: f32) -> f32;

    /// Width of item `index` when laid out at the given row `height`.
    ///
    /// Used when scrolling horizontally.
    fn width_for_item(&self, index: usize, height: f32) -> f32;

    /// Number of columns. Only consulted for vertical layouts.
    fn column_count(&self) -> Option<usize> {
        None
    }

    /// Number of rows. Only consulted for horizontal layouts.
    fn row_count(&self) -> Option<usize> {
        None
    }

    /// Gap between columns, or between items of a row when scrolling
    /// horizontally.
    fn column_margin(&self) -> Option<f32> {
        None
    }

    /// Gap between rows, or between items of a column when scrolling
    /// vertically.
    fn row_margin(&self) -> Option<f32> {
        None
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        None
    }

    /// Main-axis size of item `index` given the uniform cross-axis size.
    fn main_axis_size(&self, axis: ScrollAxis, index: usize, cross_size: f32) -> f32 {
        match axis {
            ScrollAxis::Vertical => self.height_for_item(index, cross_size),
            ScrollAxis::Horizontal => self.width_for_item(index, cross_size),
        }
    }
}

impl<D: WaterfallDelegate + ?Sized> WaterfallDelegate for &D {
    fn height_for_item(&self, index: usize, width: f32) -> f32 {
        (**self).height_for_item(index, width)
    }

    fn width_for_item(&self, index: usize, height: f32) -> f32 {
        (**self).width_for_item(index, height)
    }

    fn column_count(&self) -> Option<usize> {
        (**self).column_count()
    }

    fn row_count(&self) -> Option<usize> {
        (**self).row_count()
    }

    fn column_margin(&self) -> Option<f32> {
        (**self).column_margin()
    }

    fn row_margin(&self) -> Option<f32> {
        (**self).row_margin()
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        (**self).edge_insets()
    }
}

/// Optional delegate capabilities, sampled once at the start of a pass.
///
/// Resolving these up front keeps capability checks out of the per-item loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DelegateOverrides {
    pub column_count: Option<usize>,
    pub row_count: Option<usize>,
    pub column_margin: Option<f32>,
    pub row_margin: Option<f32>,
    pub edge_insets: Option<EdgeInsets>,
}

impl DelegateOverrides {
    /// Samples every optional capability of `delegate`.
    pub fn query<D: WaterfallDelegate + ?Sized>(delegate: &D) -> Self {
        Self {
            column_count: delegate.column_count(),
            row_count: delegate.row_count(),
            column_margin: delegate.column_margin(),
            row_margin: delegate.row_margin(),
            edge_insets: delegate.edge_insets(),
        }
    }
}

type SizeFn = Box<dyn Fn(usize, f32) -> f32>;
type CountFn = Box<dyn Fn() -> usize>;
type MarginFn = Box<dyn Fn() -> f32>;
type InsetsFn = Box<dyn Fn() -> EdgeInsets>;

/// A delegate assembled from closures.
///
/// The size closure is mandatory and answers the complementary size for
/// whichever axis is active: height-for-width when scrolling vertically,
/// width-for-height when scrolling horizontally. Each optional capability is
/// absent until its builder method is called.
///
/// # Example
///
/// ```
/// use waterfall_layout::{ClosureDelegate, WaterfallDelegate};
///
/// let delegate = ClosureDelegate::new(|index, width| width * (1.0 + index as f32 * 0.25))
///     .with_column_count(|| 3)
///     .with_row_margin(|| 8.0);
///
/// assert_eq!(delegate.column_count(), Some(3));
/// assert_eq!(delegate.height_for_item(2, 100.0), 150.0);
/// assert!(delegate.edge_insets().is_none());
/// ```
pub struct ClosureDelegate {
    size: SizeFn,
    column_count: Option<CountFn>,
    row_count: Option<CountFn>,
    column_margin: Option<MarginFn>,
    row_margin: Option<MarginFn>,
    edge_insets: Option<InsetsFn>,
}

impl ClosureDelegate {
    pub fn new(size: impl Fn(usize, f32) -> f32 + 'static) -> Self {
        Self {
            size: Box::new(size),
            column_count: None,
            row_count: None,
            column_margin: None,
            row_margin: None,
            edge_insets: None,
        }
    }

    pub fn with_column_count(mut self, count: impl Fn() -> usize + 'static) -> Self {
        self.column_count = Some(Box::new(count));
        self
    }

    pub fn with_row_count(mut self, count: impl Fn() -> usize + 'static) -> Self {
        self.row_count = Some(Box::new(count));
        self
    }

    pub fn with_column_margin(mut self, margin: impl Fn() -> f32 + 'static) -> Self {
        self.column_margin = Some(Box::new(margin));
        self
    }

    pub fn with_row_margin(mut self, margin: impl Fn() -> f32 + 'static) -> Self {
        self.row_margin = Some(Box::new(margin));
        self
    }

    pub fn with_edge_insets(mut self, insets: impl Fn() -> EdgeInsets + 'static) -> Self {
        self.edge_insets = Some(Box::new(insets));
        self
    }
}

impl WaterfallDelegate for ClosureDelegate {
    fn height_for_item(&self, index: usize, width: f32) -> f32 {
        (self.size)(index, width)
    }

    fn width_for_item(&self, index: usize, height: f32) -> f32 {
        (self.size)(index, height)
    }

    fn column_count(&self) -> Option<usize> {
        self.column_count.as_ref().map(|f| f())
    }

    fn row_count(&self) -> Option<usize> {
        self.row_count.as_ref().map(|f| f())
    }

    fn column_margin(&self) -> Option<f32> {
        self.column_margin.as_ref().map(|f| f())
    }

    fn row_margin(&self) -> Option<f32> {
        self.row_margin.as_ref().map(|f| f())
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        self.edge_insets.as_ref().map(|f| f())
    }
}

impl std::fmt::Debug for ClosureDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureDelegate")
            .field("column_count", &self.column_count.is_some())
            .field("row_count", &self.row_count.is_some())
            .field("column_margin", &self.column_margin.is_some())
            .field("row_margin", &self.row_margin.is_some())
            .field("edge_insets", &self.edge_insets.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct SquareItems;

    impl WaterfallDelegate for SquareItems {
        fn height_for_item(&self, _index: usize, width: f32) -> f32 {
            width
        }

        fn width_for_item(&self, _index: usize, height: f32) -> f32 {
            height
        }

        fn row_margin(&self) -> Option<f32> {
            Some(4.0)
        }
    }

    #[test]
    fn overrides_default_to_none() {
        let overrides = DelegateOverrides::query(&SquareItems);
        assert_eq!(overrides.row_margin, Some(4.0));
        assert_eq!(overrides.column_count, None);
        assert_eq!(overrides.row_count, None);
        assert_eq!(overrides.column_margin, None);
        assert_eq!(overrides.edge_insets, None);
    }

    #[test]
    fn main_axis_size_dispatches_on_axis() {
        let delegate = ClosureDelegate::new(|index, cross| cross + index as f32);
        assert_eq!(delegate.main_axis_size(ScrollAxis::Vertical, 2, 10.0), 12.0);
        assert_eq!(delegate.main_axis_size(ScrollAxis::Horizontal, 3, 10.0), 13.0);
    }

    #[test]
    fn closure_capabilities_are_live() {
        let columns = Rc::new(Cell::new(2));
        let handle = columns.clone();
        let delegate = ClosureDelegate::new(|_, w| w).with_column_count(move || handle.get());

        assert_eq!(DelegateOverrides::query(&delegate).column_count, Some(2));
        columns.set(4);
        assert_eq!(DelegateOverrides::query(&delegate).column_count, Some(4));
    }
}
