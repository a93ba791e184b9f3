//! Core placement algorithm for waterfall layouts.
//!
//! Items are placed one at a time, in index order, into whichever track is
//! currently the shortest. The engine is a small state machine: it is idle
//! until [`WaterfallEngine::reset_pass`] starts a pass, accumulates
//! placements through [`WaterfallEngine::place_item`], and hands everything
//! back from [`WaterfallEngine::finalize_result`].

use waterfall_graphics::Size;

use crate::config::LayoutConfig;
use crate::delegate::WaterfallDelegate;
use crate::error::LayoutError;
use crate::header::compute_header_rect;
use crate::placement::{LayoutResult, Placement};
use crate::track::TrackState;

/// The visible region of the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub size: Size,

    /// Current scroll position along the main axis.
    pub scroll_offset: f32,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scroll_offset: 0.0,
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f32) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }
}

/// Observable state of a [`WaterfallEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Accumulating,
}

/// Everything owned by one in-flight pass. Dropped when the pass ends.
#[derive(Debug)]
struct Pass {
    config: LayoutConfig,
    viewport: Viewport,
    leading_inset: f32,
    cross_leading_inset: f32,
    cross_size: f32,
    tracks: TrackState,
    placements: Vec<Placement>,
    content_extent: f32,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Accumulating(Pass),
}

/// Greedy shortest-track placement engine.
///
/// One engine can run any number of passes, one after another. Pass state is
/// owned by the engine, so a pass can never be observed from two places at
/// once.
#[derive(Debug, Default)]
pub struct WaterfallEngine {
    phase: Phase,
}

impl WaterfallEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Idle => EngineState::Idle,
            Phase::Accumulating(_) => EngineState::Accumulating,
        }
    }

    /// Starts a new pass, discarding any pass already in progress.
    ///
    /// Every track starts at the leading inset along the main axis.
    pub fn reset_pass(
        &mut self,
        config: LayoutConfig,
        viewport: Viewport,
    ) -> Result<(), LayoutError> {
        self.reset_pass_with_capacity(config, viewport, 0)
    }

    pub(crate) fn reset_pass_with_capacity(
        &mut self,
        config: LayoutConfig,
        viewport: Viewport,
        capacity: usize,
    ) -> Result<(), LayoutError> {
        // A failed reset must not leave a stale pass behind.
        self.phase = Phase::Idle;

        config.validate()?;
        if !viewport.size.is_valid() {
            return Err(LayoutError::input(
                "viewport cross extent",
                config.axis.cross(viewport.size),
            ));
        }

        let axis = config.axis;
        let leading_inset = config.leading_inset();
        let cross_leading_inset = axis.cross_leading_inset(&config.insets);
        let track_count = config.track_count;

        let available = axis.cross(viewport.size)
            - axis.cross_inset_sum(&config.insets)
            - (track_count - 1) as f32 * config.track_margin;
        let cross_size = available / track_count as f32;
        if cross_size < 0.0 {
            return Err(LayoutError::config(format!(
                "viewport cross extent {} cannot fit {} tracks with the configured margins",
                axis.cross(viewport.size),
                track_count
            )));
        }

        self.phase = Phase::Accumulating(Pass {
            tracks: TrackState::new(track_count, leading_inset),
            placements: Vec::with_capacity(capacity),
            content_extent: leading_inset,
            leading_inset,
            cross_leading_inset,
            cross_size,
            viewport,
            config,
        });
        Ok(())
    }

    /// Places item `index` into the currently shortest track.
    ///
    /// Items must be placed as 0, 1, 2, ... within a pass; track selection
    /// depends on every earlier placement.
    pub fn place_item<D>(&mut self, index: usize, delegate: &D) -> Result<Placement, LayoutError>
    where
        D: WaterfallDelegate + ?Sized,
    {
        let Phase::Accumulating(pass) = &mut self.phase else {
            return Err(LayoutError::misuse("place_item", "no layout pass in progress"));
        };
        if index != pass.placements.len() {
            return Err(LayoutError::misuse(
                "place_item",
                format!("expected item {}, got {}", pass.placements.len(), index),
            ));
        }
        pass.place(index, delegate)
    }

    /// Extents of every track in the pass in progress.
    pub fn track_extents(&self) -> Option<&[f32]> {
        match &self.phase {
            Phase::Accumulating(pass) => Some(pass.tracks.extents()),
            Phase::Idle => None,
        }
    }

    /// Drops the pass in progress, if any, without producing a result.
    pub(crate) fn discard_pass(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Ends the pass and returns its placements, content extent and header.
    pub fn finalize_result(&mut self) -> Result<LayoutResult, LayoutError> {
        match std::mem::take(&mut self.phase) {
            Phase::Accumulating(pass) => Ok(pass.finish()),
            Phase::Idle => Err(LayoutError::misuse(
                "finalize_result",
                "no layout pass in progress",
            )),
        }
    }
}

impl Pass {
    fn place<D>(&mut self, index: usize, delegate: &D) -> Result<Placement, LayoutError>
    where
        D: WaterfallDelegate + ?Sized,
    {
        let config = &self.config;
        let axis = config.axis;

        let main_size = delegate.main_axis_size(axis, index, self.cross_size);
        if !main_size.is_finite() || main_size < 0.0 {
            return Err(LayoutError::input(format!("size of item {index}"), main_size));
        }

        let Some((track, extent)) = self.tracks.shortest() else {
            return Err(LayoutError::config("track count must be at least 1"));
        };

        let cross_offset =
            self.cross_leading_inset + track as f32 * (self.cross_size + config.track_margin);

        // The header only reserves space in vertical layouts, and only above
        // the first item of each column.
        let reserve_header =
            axis.is_vertical() && config.header_enabled && self.tracks.item_count(track) == 0;
        let mut main_offset = if reserve_header {
            config.header_extent
        } else {
            extent
        };
        if main_offset != self.leading_inset {
            main_offset += config.main_margin;
        }

        let frame = axis.rect(main_offset, cross_offset, main_size, self.cross_size);
        let end = main_offset + main_size;
        self.tracks.advance(track, end);
        if end > self.content_extent {
            self.content_extent = end;
        }

        log::trace!("waterfall: item {} -> track {} at {:?}", index, track, frame);

        let placement = Placement {
            index,
            track,
            frame,
        };
        self.placements.push(placement);
        Ok(placement)
    }

    fn finish(self) -> LayoutResult {
        let tallest = self.tracks.max_extent().unwrap_or(self.leading_inset);
        let content_extent = self.content_extent.max(tallest) + self.config.trailing_inset();
        let header = compute_header_rect(&self.config, &self.viewport);

        log::debug!(
            "waterfall: placed {} items in {} tracks ({:?}), content extent {}",
            self.placements.len(),
            self.tracks.len(),
            self.config.axis,
            content_extent
        );

        LayoutResult {
            axis: self.config.axis,
            track_count: self.tracks.len(),
            placements: self.placements,
            content_extent,
            header,
        }
    }
}

/// Runs a complete pass: reset, place every item, finalize.
pub fn layout<D>(
    config: &LayoutConfig,
    item_count: usize,
    viewport: Viewport,
    delegate: &D,
) -> Result<LayoutResult, LayoutError>
where
    D: WaterfallDelegate + ?Sized,
{
    let mut engine = WaterfallEngine::new();
    engine.reset_pass_with_capacity(config.clone(), viewport, item_count)?;
    for index in 0..item_count {
        engine.place_item(index, delegate)?;
    }
    engine.finalize_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaterfallSpec;
    use crate::delegate::ClosureDelegate;
    use waterfall_graphics::{EdgeInsets, Rect};

    fn fixed(heights: &'static [f32]) -> ClosureDelegate {
        ClosureDelegate::new(move |index, _| heights[index])
    }

    fn vertical_config() -> LayoutConfig {
        LayoutConfig::from(&WaterfallSpec::vertical())
    }

    #[test]
    fn place_before_reset_is_misuse() {
        let mut engine = WaterfallEngine::new();
        let result = engine.place_item(0, &fixed(&[10.0]));
        assert!(matches!(
            result,
            Err(LayoutError::StateMisuse {
                operation: "place_item",
                ..
            })
        ));
    }

    #[test]
    fn finalize_while_idle_is_misuse() {
        let mut engine = WaterfallEngine::new();
        assert!(matches!(
            engine.finalize_result(),
            Err(LayoutError::StateMisuse { .. })
        ));
    }

    #[test]
    fn out_of_order_index_is_misuse() {
        let mut engine = WaterfallEngine::new();
        engine
            .reset_pass(vertical_config(), Viewport::new(Size::new(210.0, 400.0)))
            .unwrap();
        let delegate = fixed(&[10.0, 20.0, 30.0]);
        engine.place_item(0, &delegate).unwrap();
        assert!(matches!(
            engine.place_item(2, &delegate),
            Err(LayoutError::StateMisuse { .. })
        ));
    }

    #[test]
    fn reference_scenario() {
        let mut engine = WaterfallEngine::new();
        engine
            .reset_pass(vertical_config(), Viewport::new(Size::new(210.0, 400.0)))
            .unwrap();
        let delegate = fixed(&[50.0, 30.0, 30.0]);

        let first = engine.place_item(0, &delegate).unwrap();
        let second = engine.place_item(1, &delegate).unwrap();
        let third = engine.place_item(2, &delegate).unwrap();

        assert_eq!(first.frame, Rect::new(10.0, 10.0, 90.0, 50.0));
        assert_eq!(second.frame, Rect::new(110.0, 10.0, 90.0, 30.0));
        assert_eq!(third.track, 1);
        assert_eq!(third.frame, Rect::new(110.0, 50.0, 90.0, 30.0));
        assert_eq!(engine.track_extents(), Some(&[60.0, 80.0][..]));

        let result = engine.finalize_result().unwrap();
        assert_eq!(result.content_extent, 90.0);
        assert_eq!(result.track_count, 2);
        assert_eq!(result.track_extents(), vec![Some(60.0), Some(80.0)]);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn reset_discards_pass_in_progress() {
        let mut engine = WaterfallEngine::new();
        let viewport = Viewport::new(Size::new(210.0, 400.0));
        let delegate = fixed(&[50.0, 30.0]);

        engine.reset_pass(vertical_config(), viewport).unwrap();
        engine.place_item(0, &delegate).unwrap();
        engine.reset_pass(vertical_config(), viewport).unwrap();

        assert_eq!(engine.state(), EngineState::Accumulating);
        assert_eq!(engine.track_extents(), Some(&[10.0, 10.0][..]));
        let placement = engine.place_item(0, &delegate).unwrap();
        assert_eq!(placement.track, 0);
    }

    #[test]
    fn failed_reset_leaves_engine_idle() {
        let mut engine = WaterfallEngine::new();
        let viewport = Viewport::new(Size::new(210.0, 400.0));
        engine.reset_pass(vertical_config(), viewport).unwrap();

        let broken = LayoutConfig {
            track_count: 0,
            ..vertical_config()
        };
        assert!(matches!(
            engine.reset_pass(broken, viewport),
            Err(LayoutError::InvalidConfig { .. })
        ));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn rejects_invalid_item_sizes() {
        let mut engine = WaterfallEngine::new();
        engine
            .reset_pass(vertical_config(), Viewport::new(Size::new(210.0, 400.0)))
            .unwrap();
        let delegate = ClosureDelegate::new(|index, _| if index == 0 { f32::NAN } else { -1.0 });
        assert!(matches!(
            engine.place_item(0, &delegate),
            Err(LayoutError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_viewport_too_small_for_tracks() {
        let config = LayoutConfig {
            track_count: 4,
            ..vertical_config()
        };
        let err = layout(&config, 1, Viewport::new(Size::new(20.0, 100.0)), &fixed(&[1.0]))
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_non_finite_viewport() {
        let err = layout(
            &vertical_config(),
            0,
            Viewport::new(Size::new(f32::INFINITY, 100.0)),
            &fixed(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { .. }));
    }

    #[test]
    fn empty_layout_reports_insets() {
        let config = LayoutConfig {
            insets: EdgeInsets::new(12.0, 0.0, 8.0, 0.0),
            ..vertical_config()
        };
        let viewport = Viewport::new(Size::new(200.0, 100.0));
        let result = layout(&config, 0, viewport, &fixed(&[])).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.content_extent, 20.0);
    }

    #[test]
    fn header_offsets_first_row_only() {
        let config = LayoutConfig::from(&WaterfallSpec::vertical().header(40.0));
        let result = layout(
            &config,
            3,
            Viewport::new(Size::new(210.0, 400.0)),
            &fixed(&[50.0, 30.0, 30.0]),
        )
        .unwrap();

        assert_eq!(result.placements[0].frame.y, 50.0);
        assert_eq!(result.placements[1].frame.y, 50.0);
        // Track 1 ends at 80, so the third item follows it rather than the header.
        assert_eq!(result.placements[2].frame.y, 90.0);
        assert_eq!(result.header, Some(Rect::new(0.0, 0.0, 210.0, 40.0)));
    }
}
