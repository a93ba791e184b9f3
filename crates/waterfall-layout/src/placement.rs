//! Placement records and the result of a layout pass.

use waterfall_graphics::{Rect, Size};

use crate::axis::ScrollAxis;

/// Where a single item ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Index in the data source.
    pub index: usize,

    /// Column (vertical) or row (horizontal) the item was assigned to.
    pub track: usize,

    /// Frame in content coordinates.
    pub frame: Rect,
}

/// What a [`LayoutElement`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Item { index: usize },
    Header,
}

/// A frame handed to the host for display, either an item cell or the header.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutElement {
    pub kind: ElementKind,
    pub frame: Rect,
}

/// Result of a complete layout pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Axis the pass was computed for.
    pub axis: ScrollAxis,

    /// Number of columns or rows the items were distributed over.
    pub track_count: usize,

    /// One placement per item, in index order.
    pub placements: Vec<Placement>,

    /// Scrollable length along the main axis, trailing inset included.
    pub content_extent: f32,

    /// Header frame, present only when the header is enabled.
    ///
    /// Not part of any track.
    pub header: Option<Rect>,
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            track_count: 0,
            placements: Vec::new(),
            content_extent: 0.0,
            header: None,
        }
    }
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Content size for the scroll container. Only the main axis is set.
    pub fn content_size(&self) -> Size {
        self.axis.main_only_size(self.content_extent)
    }

    /// Final main-axis end of every track that received at least one item.
    ///
    /// Tracks that stayed empty are reported as `None`.
    pub fn track_extents(&self) -> Vec<Option<f32>> {
        let mut extents = vec![None; self.track_count];
        for placement in &self.placements {
            if let Some(slot) = extents.get_mut(placement.track) {
                let end = self.axis.rect_main_end(&placement.frame);
                *slot = Some(slot.map_or(end, |current: f32| current.max(end)));
            }
        }
        extents
    }

    /// Every element of the layout: items in index order, then the header.
    pub fn elements(&self) -> impl Iterator<Item = LayoutElement> + '_ {
        let items = self.placements.iter().map(|placement| LayoutElement {
            kind: ElementKind::Item {
                index: placement.index,
            },
            frame: placement.frame,
        });
        let header = self.header.map(|frame| LayoutElement {
            kind: ElementKind::Header,
            frame,
        });
        items.chain(header)
    }

    /// Elements whose frame intersects `rect`.
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<LayoutElement> {
        self.elements()
            .filter(|element| element.frame.intersects(&rect))
            .collect()
    }
}
