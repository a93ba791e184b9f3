use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waterfall_graphics::EdgeInsets;
use waterfall_layout::WaterfallDelegate;

/// Delegate returning a fixed main-axis size per item.
///
/// The same table answers both height-for-width and width-for-height, so one
/// fixture serves vertical and horizontal layouts alike.
#[derive(Clone, Debug, Default)]
pub struct FixedSizes {
    sizes: Vec<f32>,
    column_count: Option<usize>,
    row_count: Option<usize>,
    column_margin: Option<f32>,
    row_margin: Option<f32>,
    edge_insets: Option<EdgeInsets>,
}

impl FixedSizes {
    pub fn new(sizes: impl IntoIterator<Item = f32>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// `count` items, all of the same size.
    pub fn uniform(count: usize, size: f32) -> Self {
        Self::new(vec![size; count])
    }

    /// Deterministic pseudo-random sizes in `min..max`.
    pub fn scattered(count: usize, min: f32, max: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sizes = (0..count)
            .map(|_| rng.gen_range(min..max).round())
            .collect::<Vec<_>>();
        Self::new(sizes)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn with_column_count(mut self, count: usize) -> Self {
        self.column_count = Some(count);
        self
    }

    pub fn with_row_count(mut self, count: usize) -> Self {
        self.row_count = Some(count);
        self
    }

    pub fn with_column_margin(mut self, margin: f32) -> Self {
        self.column_margin = Some(margin);
        self
    }

    pub fn with_row_margin(mut self, margin: f32) -> Self {
        self.row_margin = Some(margin);
        self
    }

    pub fn with_edge_insets(mut self, insets: EdgeInsets) -> Self {
        self.edge_insets = Some(insets);
        self
    }

    fn size(&self, index: usize) -> f32 {
        self.sizes
            .get(index)
            .copied()
            .unwrap_or_else(|| panic!("FixedSizes has no size for item #{}", index))
    }
}

impl WaterfallDelegate for FixedSizes {
    fn height_for_item(&self, index: usize, _width: f32) -> f32 {
        self.size(index)
    }

    fn width_for_item(&self, index: usize, _height: f32) -> f32 {
        self.size(index)
    }

    fn column_count(&self) -> Option<usize> {
        self.column_count
    }

    fn row_count(&self) -> Option<usize> {
        self.row_count
    }

    fn column_margin(&self) -> Option<f32> {
        self.column_margin
    }

    fn row_margin(&self) -> Option<f32> {
        self.row_margin
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        self.edge_insets
    }
}

/// Which size query the engine issued.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeQuery {
    HeightForWidth { index: usize, width: f32 },
    WidthForHeight { index: usize, height: f32 },
}

/// Wraps another delegate and records every size query it receives.
#[derive(Debug)]
pub struct RecordingDelegate<D> {
    inner: D,
    queries: RefCell<Vec<SizeQuery>>,
}

impl<D: WaterfallDelegate> RecordingDelegate<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SizeQuery> {
        self.queries.borrow().clone()
    }

    pub fn clear(&self) {
        self.queries.borrow_mut().clear();
    }
}

impl<D: WaterfallDelegate> WaterfallDelegate for RecordingDelegate<D> {
    fn height_for_item(&self, index: usize, width: f32) -> f32 {
        self.queries
            .borrow_mut()
            .push(SizeQuery::HeightForWidth { index, width });
        self.inner.height_for_item(index, width)
    }

    fn width_for_item(&self, index: usize, height: f32) -> f32 {
        self.queries
            .borrow_mut()
            .push(SizeQuery::WidthForHeight { index, height });
        self.inner.width_for_item(index, height)
    }

    fn column_count(&self) -> Option<usize> {
        self.inner.column_count()
    }

    fn row_count(&self) -> Option<usize> {
        self.inner.row_count()
    }

    fn column_margin(&self) -> Option<f32> {
        self.inner.column_margin()
    }

    fn row_margin(&self) -> Option<f32> {
        self.inner.row_margin()
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        self.inner.edge_insets()
    }
}
