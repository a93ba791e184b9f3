use waterfall_layout::{LayoutConfig, LayoutResult, Placement};

/// Asserts one placement per item, in index order.
pub fn assert_index_order(result: &LayoutResult, item_count: usize) {
    assert_eq!(
        result.placements.len(),
        item_count,
        "expected {} placements, got {}",
        item_count,
        result.placements.len()
    );
    for (position, placement) in result.placements.iter().enumerate() {
        assert_eq!(
            placement.index, position,
            "placement #{} carries index {}",
            position, placement.index
        );
    }
}

/// Placements assigned to `track`, in placement order.
pub fn placements_in_track(result: &LayoutResult, track: usize) -> Vec<Placement> {
    result
        .placements
        .iter()
        .filter(|placement| placement.track == track)
        .copied()
        .collect()
}

/// Asserts that no two items sharing a track overlap along the main axis,
/// and that each one is at least `main_margin` after its predecessor.
pub fn assert_tracks_disjoint(result: &LayoutResult, config: &LayoutConfig) {
    let axis = result.axis;
    for track in 0..config.track_count {
        let placements = placements_in_track(result, track);
        for pair in placements.windows(2) {
            let previous_end = axis.rect_main_end(&pair[0].frame);
            let next_start = axis.rect_main_start(&pair[1].frame);
            assert!(
                next_start >= previous_end + config.main_margin,
                "track {}: item {} starts at {} but item {} ends at {} (margin {})",
                track,
                pair[1].index,
                next_start,
                pair[0].index,
                previous_end,
                config.main_margin
            );
        }
    }
}

/// Asserts the content extent equals the tallest track plus the trailing inset.
pub fn assert_content_covers_tracks(result: &LayoutResult, config: &LayoutConfig) {
    let tallest = result
        .track_extents()
        .into_iter()
        .map(|extent| extent.unwrap_or(config.leading_inset()))
        .fold(config.leading_inset(), f32::max);
    assert_eq!(
        result.content_extent,
        tallest + config.trailing_inset(),
        "content extent should be the tallest track plus the trailing inset"
    );
}
