//! Per-track running extents.

use smallvec::SmallVec;

/// Next free main-axis offset of every track, plus how many items each holds.
///
/// Most grids have only a handful of columns, so extents live inline.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackState {
    extents: SmallVec<[f32; 8]>,
    counts: SmallVec<[usize; 8]>,
}

impl TrackState {
    /// Creates `count` tracks, all starting at `leading_inset`.
    pub fn new(count: usize, leading_inset: f32) -> Self {
        Self {
            extents: SmallVec::from_elem(leading_inset, count),
            counts: SmallVec::from_elem(0, count),
        }
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn extent(&self, track: usize) -> f32 {
        self.extents[track]
    }

    pub fn extents(&self) -> &[f32] {
        &self.extents
    }

    /// Number of items placed into `track` so far.
    pub fn item_count(&self, track: usize) -> usize {
        self.counts[track]
    }

    /// Index and extent of the shortest track.
    ///
    /// Ties go to the lowest index. Returns `None` only when there are no
    /// tracks.
    pub fn shortest(&self) -> Option<(usize, f32)> {
        let (&first, rest) = self.extents.split_first()?;
        let mut best = (0, first);
        for (offset, &extent) in rest.iter().enumerate() {
            if extent < best.1 {
                best = (offset + 1, extent);
            }
        }
        Some(best)
    }

    /// Records an item ending at `end` in `track`. Extents never shrink.
    pub fn advance(&mut self, track: usize, end: f32) {
        let extent = &mut self.extents[track];
        *extent = extent.max(end);
        self.counts[track] += 1;
    }

    /// Largest extent across all tracks.
    pub fn max_extent(&self) -> Option<f32> {
        self.extents.iter().copied().reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_pick_lowest_index() {
        let tracks = TrackState::new(3, 10.0);
        assert_eq!(tracks.shortest(), Some((0, 10.0)));
    }

    #[test]
    fn shortest_follows_advances() {
        let mut tracks = TrackState::new(3, 0.0);
        tracks.advance(0, 50.0);
        assert_eq!(tracks.shortest(), Some((1, 0.0)));
        tracks.advance(1, 30.0);
        tracks.advance(2, 30.0);
        assert_eq!(tracks.shortest(), Some((1, 30.0)));
        assert_eq!(tracks.max_extent(), Some(50.0));
    }

    #[test]
    fn counts_items_even_when_extent_stays_put() {
        let mut tracks = TrackState::new(2, 100.0);
        assert_eq!(tracks.item_count(0), 0);
        tracks.advance(0, 40.0);
        assert_eq!(tracks.extent(0), 100.0);
        assert_eq!(tracks.item_count(0), 1);
        assert_eq!(tracks.item_count(1), 0);
    }

    #[test]
    fn empty_state_has_no_shortest() {
        let tracks = TrackState::new(0, 0.0);
        assert!(tracks.is_empty());
        assert_eq!(tracks.shortest(), None);
        assert_eq!(tracks.max_extent(), None);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut tracks = TrackState::new(12, 5.0);
        tracks.advance(11, 6.0);
        assert_eq!(tracks.len(), 12);
        assert_eq!(tracks.extent(11), 6.0);
        assert_eq!(tracks.shortest(), Some((0, 5.0)));
    }
}
