//! Header frame computation.

use waterfall_graphics::Rect;

use crate::config::LayoutConfig;
use crate::engine::Viewport;

/// The header stays pinned to the leading edge while content scrolls.
const HEADER_PINNED: bool = true;

/// Frame of the header for the given viewport, or `None` when disabled.
///
/// The header spans the full cross extent of the viewport and
/// `header_extent` along the main axis. It does not belong to any track.
pub fn compute_header_rect(config: &LayoutConfig, viewport: &Viewport) -> Option<Rect> {
    if !config.header_enabled {
        return None;
    }
    let main_offset = header_main_offset(HEADER_PINNED, viewport.scroll_offset);
    Some(config.axis.rect(
        main_offset,
        0.0,
        config.header_extent,
        config.axis.cross(viewport.size),
    ))
}

fn header_main_offset(pinned: bool, scroll_offset: f32) -> f32 {
    if pinned {
        0.0
    } else {
        scroll_offset.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaterfallSpec;
    use waterfall_graphics::Size;

    #[test]
    fn disabled_header_has_no_frame() {
        let config = LayoutConfig::from(&WaterfallSpec::default());
        let viewport = Viewport::new(Size::new(320.0, 480.0));
        assert_eq!(compute_header_rect(&config, &viewport), None);
    }

    #[test]
    fn pinned_header_ignores_scroll() {
        let config = LayoutConfig::from(&WaterfallSpec::default().header(44.0));
        let viewport = Viewport::new(Size::new(320.0, 480.0)).with_scroll_offset(250.0);
        assert_eq!(
            compute_header_rect(&config, &viewport),
            Some(Rect::new(0.0, 0.0, 320.0, 44.0))
        );
    }

    #[test]
    fn horizontal_header_spans_height() {
        let config = LayoutConfig::from(&WaterfallSpec::horizontal().header(60.0));
        let viewport = Viewport::new(Size::new(800.0, 200.0));
        assert_eq!(
            compute_header_rect(&config, &viewport),
            Some(Rect::new(0.0, 0.0, 60.0, 200.0))
        );
    }

    #[test]
    fn unpinned_offset_follows_scroll() {
        assert_eq!(header_main_offset(false, 120.0), 120.0);
        assert_eq!(header_main_offset(false, -30.0), 0.0);
        assert_eq!(header_main_offset(true, 120.0), 0.0);
    }
}
