//! Draw-instruction models for the donut chart.

use serde::{Deserialize, Serialize};

/// Draw parameters for one donut segment.
///
/// `arc_length` and `arc_offset` are stroke-dash values along the circle's
/// circumference: a segment is drawn as a dash of `arc_length` user units
/// starting `-arc_offset` units around the circle. Rendering is delegated
/// to the presentation layer; this struct carries geometry only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    /// ID of the holding this segment represents
    pub holding_id: String,
    /// Ticker symbol, for legends
    pub symbol: String,
    /// Length of the visible arc, in circumference units
    pub arc_length: f64,
    /// Dash offset at the moment of drawing; zero or negative, shrinking
    /// as the cumulative share grows
    pub arc_offset: f64,
    /// Index into the segment palette, before the modulo cycle
    pub color_index: usize,
    /// Resolved palette color (hex code)
    pub color: String,
}
