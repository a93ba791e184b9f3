//! Testing utilities for waterfall layouts

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fixtures::*;
    pub use waterfall_graphics::{EdgeInsets, Rect, Size};
    pub use waterfall_layout::{
        layout, LayoutConfig, LayoutError, LayoutResult, ScrollAxis, Viewport, WaterfallDelegate,
        WaterfallEngine, WaterfallLayout, WaterfallSpec,
    };
}
