//! Sample photo feed used by the demo.

use waterfall_graphics::EdgeInsets;
use waterfall_layout::WaterfallDelegate;

/// Width-to-height ratios cycled through by the sample feed.
const ASPECT_RATIOS: [f32; 7] = [1.0, 0.75, 1.5, 0.5625, 1.333, 0.8, 1.777];

pub struct Photo {
    pub aspect_ratio: f32,
    /// Extra space under the image for a caption.
    pub caption_height: f32,
}

/// A feed of photos that keep their aspect ratio at any track size.
pub struct PhotoFeed {
    photos: Vec<Photo>,
}

impl PhotoFeed {
    pub fn sample(count: usize) -> Self {
        let photos = (0..count)
            .map(|i| Photo {
                aspect_ratio: ASPECT_RATIOS[i % ASPECT_RATIOS.len()],
                caption_height: if i % 3 == 0 { 24.0 } else { 0.0 },
            })
            .collect();
        Self { photos }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }
}

impl WaterfallDelegate for PhotoFeed {
    fn height_for_item(&self, index: usize, width: f32) -> f32 {
        let photo = &self.photos[index];
        width / photo.aspect_ratio + photo.caption_height
    }

    fn width_for_item(&self, index: usize, height: f32) -> f32 {
        height * self.photos[index].aspect_ratio
    }

    fn edge_insets(&self) -> Option<EdgeInsets> {
        Some(EdgeInsets::symmetric(12.0, 8.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_keep_aspect_ratio() {
        let feed = PhotoFeed::sample(3);
        assert_eq!(feed.height_for_item(1, 150.0), 200.0);
        assert_eq!(feed.height_for_item(0, 100.0), 124.0);
        assert_eq!(feed.width_for_item(2, 100.0), 150.0);
    }
}
