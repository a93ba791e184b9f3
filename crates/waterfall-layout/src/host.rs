//! Host-facing waterfall layout object.
//!
//! Provides [`WaterfallLayout`], which owns the configured defaults and the
//! result of the most recent pass, and answers the queries a scroll container
//! asks between passes.

use waterfall_graphics::{Rect, Size};

use crate::config::{resolve_config, LayoutConfig, WaterfallSpec};
use crate::delegate::{DelegateOverrides, WaterfallDelegate};
use crate::engine::{Viewport, WaterfallEngine};
use crate::error::LayoutError;
use crate::header::compute_header_rect;
use crate::placement::{LayoutElement, LayoutResult, Placement};

/// A waterfall layout bound to a single-section scroll container.
///
/// # Example
///
/// ```
/// use waterfall_graphics::Size;
/// use waterfall_layout::{ClosureDelegate, Viewport, WaterfallLayout, WaterfallSpec};
///
/// let mut layout = WaterfallLayout::new(WaterfallSpec::vertical().column_count(3));
/// let delegate = ClosureDelegate::new(|index, width| width + (index % 4) as f32 * 20.0);
///
/// layout.prepare(12, Viewport::new(Size::new(320.0, 640.0)), &delegate).unwrap();
///
/// assert_eq!(layout.result().len(), 12);
/// assert!(layout.content_extent() > 0.0);
/// ```
#[derive(Debug, Default)]
pub struct WaterfallLayout {
    spec: WaterfallSpec,
    engine: WaterfallEngine,
    config: Option<LayoutConfig>,
    result: LayoutResult,
}

impl WaterfallLayout {
    pub fn new(spec: WaterfallSpec) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    pub fn spec(&self) -> &WaterfallSpec {
        &self.spec
    }

    /// Mutable access to the defaults. Takes effect on the next [`prepare`](Self::prepare).
    pub fn spec_mut(&mut self) -> &mut WaterfallSpec {
        &mut self.spec
    }

    /// Configuration resolved by the last successful pass.
    pub fn config(&self) -> Option<&LayoutConfig> {
        self.config.as_ref()
    }

    /// Result of the last successful pass.
    pub fn result(&self) -> &LayoutResult {
        &self.result
    }

    /// Recomputes every placement from scratch.
    ///
    /// Delegate overrides are sampled once, merged with the `WaterfallSpec`, and the
    /// whole item range is laid out again. On error the previous result is
    /// kept.
    pub fn prepare<D>(
        &mut self,
        item_count: usize,
        viewport: Viewport,
        delegate: &D,
    ) -> Result<(), LayoutError>
    where
        D: WaterfallDelegate + ?Sized,
    {
        let overrides = DelegateOverrides::query(delegate);
        let config = resolve_config(&overrides, &self.spec);

        self.engine
            .reset_pass_with_capacity(config.clone(), viewport, item_count)?;
        for index in 0..item_count {
            if let Err(err) = self.engine.place_item(index, delegate) {
                self.engine.discard_pass();
                return Err(err);
            }
        }
        self.result = self.engine.finalize_result()?;
        self.config = Some(config);
        Ok(())
    }

    /// Scrollable length along the main axis.
    pub fn content_extent(&self) -> f32 {
        self.result.content_extent
    }

    /// Scrollable size; the axis that does not scroll is reported as zero.
    pub fn content_size(&self) -> Size {
        self.result.content_size()
    }

    pub fn attributes_for_item(&self, index: usize) -> Option<&Placement> {
        self.result.placement(index)
    }

    /// Items and header whose frames intersect `rect`.
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<LayoutElement> {
        self.result.elements_in_rect(rect)
    }

    /// Header frame for the current viewport, when the header is enabled.
    pub fn header_frame(&self, viewport: &Viewport) -> Option<Rect> {
        match &self.config {
            Some(config) => compute_header_rect(config, viewport),
            None => compute_header_rect(&LayoutConfig::from(&self.spec), viewport),
        }
    }
}
