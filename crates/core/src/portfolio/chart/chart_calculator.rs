//! Pure mapping from allocation shares to donut-arc draw parameters.

use log::warn;
use num_traits::ToPrimitive;

use crate::constants::{CHART_PALETTE, CHART_RADIUS};
use crate::portfolio::allocation::PortfolioAllocation;

use super::ArcSegment;

/// Circumference of the chart circle, in SVG user units.
pub fn chart_circumference() -> f64 {
    2.0 * std::f64::consts::PI * CHART_RADIUS
}

/// Stroke length per percentage point: `2πr / 100`.
pub fn length_per_percent() -> f64 {
    chart_circumference() / 100.0
}

/// Maps an allocation breakdown to per-segment draw instructions.
///
/// Segments come back in position order. Each segment's arc length is its
/// percentage share scaled by [`length_per_percent`]; its offset is the
/// negative cumulative percentage at the moment of drawing, after which the
/// cumulative advances by the segment's own share. Colors cycle through the
/// fixed palette by position index, so the mapping is deterministic for a
/// given input order. Zero shares produce zero-length segments.
pub fn build_donut_segments(allocation: &PortfolioAllocation) -> Vec<ArcSegment> {
    let scale = length_per_percent();
    let mut cumulative_percentage = 0.0_f64;

    allocation
        .positions
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let percentage = position.percentage.to_f64().unwrap_or_else(|| {
                warn!(
                    "Share for holding {} not representable as f64; drawing empty segment",
                    position.holding_id
                );
                0.0
            });

            let segment = ArcSegment {
                holding_id: position.holding_id.clone(),
                symbol: position.symbol.clone(),
                arc_length: percentage * scale,
                arc_offset: -cumulative_percentage * scale,
                color_index: index,
                color: CHART_PALETTE[index % CHART_PALETTE.len()].to_string(),
            };

            cumulative_percentage += percentage;
            segment
        })
        .collect()
}
