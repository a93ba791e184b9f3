//! Layout defaults and per-pass configuration.

use waterfall_graphics::EdgeInsets;

use crate::axis::ScrollAxis;
use crate::delegate::DelegateOverrides;
use crate::error::LayoutError;

pub const DEFAULT_COLUMN_COUNT: usize = 2;
pub const DEFAULT_ROW_COUNT: usize = 2;
pub const DEFAULT_MARGIN: f32 = 10.0;
pub const DEFAULT_HEADER_EXTENT: f32 = 40.0;

/// Configured defaults for a waterfall layout.
///
/// Delegate overrides take precedence over these values when a pass is
/// resolved; see [`resolve_config`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaterfallSpec {
    /// Scroll direction.
    pub axis: ScrollAxis,

    /// Number of columns for vertical layouts.
    pub column_count: usize,

    /// Number of rows for horizontal layouts.
    pub row_count: usize,

    /// Gap between columns (vertical) or between items in a row (horizontal).
    pub column_margin: f32,

    /// Gap between items in a column (vertical) or between rows (horizontal).
    pub row_margin: f32,

    /// Insets around the whole content.
    pub edge_insets: EdgeInsets,

    /// Whether a header is reserved at the leading edge.
    pub header_enabled: bool,

    /// Length of the header along the scroll direction.
    pub header_extent: f32,
}

impl Default for WaterfallSpec {
    fn default() -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            column_count: DEFAULT_COLUMN_COUNT,
            row_count: DEFAULT_ROW_COUNT,
            column_margin: DEFAULT_MARGIN,
            row_margin: DEFAULT_MARGIN,
            edge_insets: EdgeInsets::uniform(DEFAULT_MARGIN),
            header_enabled: false,
            header_extent: DEFAULT_HEADER_EXTENT,
        }
    }
}

impl WaterfallSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self::default().axis(ScrollAxis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::default().axis(ScrollAxis::Horizontal)
    }

    pub fn axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn column_count(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    pub fn row_count(mut self, count: usize) -> Self {
        self.row_count = count;
        self
    }

    pub fn column_margin(mut self, margin: f32) -> Self {
        self.column_margin = margin;
        self
    }

    pub fn row_margin(mut self, margin: f32) -> Self {
        self.row_margin = margin;
        self
    }

    /// Sets both margins to the same value.
    pub fn margins(mut self, margin: f32) -> Self {
        self.column_margin = margin;
        self.row_margin = margin;
        self
    }

    pub fn edge_insets(mut self, insets: EdgeInsets) -> Self {
        self.edge_insets = insets;
        self
    }

    /// Reserves a header of `extent` at the leading edge.
    pub fn header(mut self, extent: f32) -> Self {
        self.header_enabled = true;
        self.header_extent = extent;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header_enabled = false;
        self
    }
}

/// Fully resolved configuration for one layout pass.
///
/// Margins are already mapped onto the scroll axis: `track_margin` separates
/// neighbouring tracks, `main_margin` separates consecutive items in a track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub axis: ScrollAxis,
    pub track_count: usize,
    pub track_margin: f32,
    pub main_margin: f32,
    pub insets: EdgeInsets,
    pub header_enabled: bool,
    pub header_extent: f32,
}

impl LayoutConfig {
    /// Leading inset along the scroll direction; every track starts here.
    pub fn leading_inset(&self) -> f32 {
        self.axis.leading_inset(&self.insets)
    }

    pub fn trailing_inset(&self) -> f32 {
        self.axis.trailing_inset(&self.insets)
    }

    /// Rejects configurations the placement loop cannot honour.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.track_count == 0 {
            return Err(LayoutError::config("track count must be at least 1"));
        }
        if !is_non_negative(self.track_margin) {
            return Err(LayoutError::config(format!(
                "track margin must be finite and non-negative, got {}",
                self.track_margin
            )));
        }
        if !is_non_negative(self.main_margin) {
            return Err(LayoutError::config(format!(
                "main-axis margin must be finite and non-negative, got {}",
                self.main_margin
            )));
        }
        if !self.insets.is_valid() {
            return Err(LayoutError::config(format!(
                "edge insets must be finite and non-negative, got {:?}",
                self.insets
            )));
        }
        if self.header_enabled && !is_non_negative(self.header_extent) {
            return Err(LayoutError::config(format!(
                "header extent must be finite and non-negative, got {}",
                self.header_extent
            )));
        }
        Ok(())
    }
}

impl From<&WaterfallSpec> for LayoutConfig {
    fn from(spec: &WaterfallSpec) -> Self {
        resolve_config(&DelegateOverrides::default(), spec)
    }
}

/// Merges delegate overrides with the configured defaults.
///
/// For each setting the delegate's answer wins when present. Track count and
/// margins are then projected onto the scroll axis of the `WaterfallSpec`.
pub fn resolve_config(overrides: &DelegateOverrides, spec: &WaterfallSpec) -> LayoutConfig {
    let column_count = overrides.column_count.unwrap_or(spec.column_count);
    let row_count = overrides.row_count.unwrap_or(spec.row_count);
    let column_margin = overrides.column_margin.unwrap_or(spec.column_margin);
    let row_margin = overrides.row_margin.unwrap_or(spec.row_margin);
    let insets = overrides.edge_insets.unwrap_or(spec.edge_insets);

    let (track_count, track_margin, main_margin) = match spec.axis {
        ScrollAxis::Vertical => (column_count, column_margin, row_margin),
        ScrollAxis::Horizontal => (row_count, row_margin, column_margin),
    };

    LayoutConfig {
        axis: spec.axis,
        track_count,
        track_margin,
        main_margin,
        insets,
        header_enabled: spec.header_enabled,
        header_extent: spec.header_extent,
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let spec = WaterfallSpec::default();
        assert_eq!(spec.axis, ScrollAxis::Vertical);
        assert_eq!(spec.column_count, 2);
        assert_eq!(spec.row_count, 2);
        assert_eq!(spec.column_margin, 10.0);
        assert_eq!(spec.row_margin, 10.0);
        assert_eq!(spec.edge_insets, EdgeInsets::uniform(10.0));
        assert!(!spec.header_enabled);
        assert_eq!(spec.header_extent, 40.0);
    }

    #[test]
    fn vertical_uses_columns() {
        let spec = WaterfallSpec::vertical()
            .column_count(3)
            .row_count(5)
            .column_margin(4.0)
            .row_margin(6.0);
        let config = LayoutConfig::from(&spec);
        assert_eq!(config.track_count, 3);
        assert_eq!(config.track_margin, 4.0);
        assert_eq!(config.main_margin, 6.0);
        assert_eq!(config.leading_inset(), 10.0);
    }

    #[test]
    fn horizontal_uses_rows() {
        let spec = WaterfallSpec::horizontal()
            .column_count(3)
            .row_count(5)
            .column_margin(4.0)
            .row_margin(6.0)
            .edge_insets(EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        let config = LayoutConfig::from(&spec);
        assert_eq!(config.track_count, 5);
        assert_eq!(config.track_margin, 6.0);
        assert_eq!(config.main_margin, 4.0);
        assert_eq!(config.leading_inset(), 2.0);
        assert_eq!(config.trailing_inset(), 4.0);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let overrides = DelegateOverrides {
            column_count: Some(4),
            row_margin: Some(2.0),
            edge_insets: Some(EdgeInsets::ZERO),
            ..DelegateOverrides::default()
        };
        let config = resolve_config(&overrides, &WaterfallSpec::default());
        assert_eq!(config.track_count, 4);
        assert_eq!(config.main_margin, 2.0);
        assert_eq!(config.track_margin, 10.0);
        assert_eq!(config.insets, EdgeInsets::ZERO);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = LayoutConfig::from(&WaterfallSpec::default());
        assert!(base.validate().is_ok());

        let zero_tracks = LayoutConfig {
            track_count: 0,
            ..base.clone()
        };
        assert!(matches!(
            zero_tracks.validate(),
            Err(LayoutError::InvalidConfig { .. })
        ));

        let negative_margin = LayoutConfig {
            main_margin: -1.0,
            ..base.clone()
        };
        assert!(negative_margin.validate().is_err());

        let nan_insets = LayoutConfig {
            insets: EdgeInsets::new(f32::NAN, 0.0, 0.0, 0.0),
            ..base.clone()
        };
        assert!(nan_insets.validate().is_err());

        let negative_header = LayoutConfig {
            header_enabled: true,
            header_extent: -5.0,
            ..base
        };
        assert!(negative_header.validate().is_err());
    }
}
