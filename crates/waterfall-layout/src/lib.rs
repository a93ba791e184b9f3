//! Waterfall (masonry) layout for scrolling grids.
//!
//! Items are distributed across a fixed number of tracks (columns when
//! scrolling vertically, rows when scrolling horizontally). Each item goes to
//! the currently shortest track, so tracks stay as balanced as the item sizes
//! allow. Every pass recomputes the layout from scratch.
//!
//! # Architecture
//!
//! - [`WaterfallDelegate`] - per-item size queries and optional overrides
//! - [`WaterfallSpec`] - configured defaults, merged with overrides by [`resolve_config`]
//! - [`WaterfallEngine`] - the placement state machine
//! - [`layout`] - one full pass in a single call
//! - [`WaterfallLayout`] - host-facing object that caches the last result
//!
//! # Example
//!
//! ```
//! use waterfall_graphics::{Rect, Size};
//! use waterfall_layout::{layout, ClosureDelegate, LayoutConfig, Viewport, WaterfallSpec};
//!
//! let config = LayoutConfig::from(&WaterfallSpec::vertical());
//! let heights = [50.0, 30.0, 30.0];
//! let delegate = ClosureDelegate::new(move |index, _width| heights[index]);
//!
//! let result = layout(&config, 3, Viewport::new(Size::new(210.0, 400.0)), &delegate).unwrap();
//!
//! assert_eq!(result.placements[2].frame, Rect::new(110.0, 50.0, 90.0, 30.0));
//! assert_eq!(result.content_extent, 90.0);
//! ```

mod axis;
mod config;
mod delegate;
mod engine;
mod error;
mod header;
mod host;
mod placement;
mod track;

pub use axis::*;
pub use config::*;
pub use delegate::*;
pub use engine::*;
pub use error::*;
pub use header::*;
pub use host::*;
pub use placement::*;
pub use track::*;

pub use waterfall_graphics::{EdgeInsets, Point, Rect, Size};
