mod feed;

use anyhow::Context;
use waterfall_graphics::{Rect, Size};
use waterfall_layout::{ScrollAxis, Viewport, WaterfallLayout, WaterfallSpec};

use feed::PhotoFeed;

const PHONE_PORTRAIT: Size = Size::new(390.0, 844.0);
const PHONE_LANDSCAPE: Size = Size::new(844.0, 390.0);

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let feed = PhotoFeed::sample(48);

    let mut portrait = WaterfallLayout::new(WaterfallSpec::vertical().column_count(3).header(56.0));
    let viewport = Viewport::new(PHONE_PORTRAIT).with_scroll_offset(400.0);
    portrait
        .prepare(feed.len(), viewport, &feed)
        .context("vertical layout failed")?;
    report(&portrait, viewport);

    let mut landscape = WaterfallLayout::new(WaterfallSpec::horizontal().row_count(2).margins(8.0));
    let viewport = Viewport::new(PHONE_LANDSCAPE);
    landscape
        .prepare(feed.len(), viewport, &feed)
        .context("horizontal layout failed")?;
    report(&landscape, viewport);

    Ok(())
}

fn report(layout: &WaterfallLayout, viewport: Viewport) {
    let result = layout.result();
    let Some(config) = layout.config() else {
        return;
    };

    println!(
        "{:?} waterfall: {} items in {} tracks, content size {:?}",
        result.axis,
        result.len(),
        config.track_count,
        result.content_size()
    );

    for (track, extent) in result.track_extents().iter().enumerate() {
        let count = result.placements.iter().filter(|p| p.track == track).count();
        println!("  track {}: {} items, ends at {:.1}", track, count, extent.unwrap_or(0.0));
    }

    let visible_rect = match result.axis {
        ScrollAxis::Vertical => Rect::new(
            0.0,
            viewport.scroll_offset,
            viewport.size.width,
            viewport.size.height,
        ),
        ScrollAxis::Horizontal => Rect::new(
            viewport.scroll_offset,
            0.0,
            viewport.size.width,
            viewport.size.height,
        ),
    };
    let visible = layout.elements_in_rect(visible_rect);
    log::info!("{} elements intersect {:?}", visible.len(), visible_rect);
    for element in visible {
        println!("  {:?} at {:?}", element.kind, element.frame);
    }
}
