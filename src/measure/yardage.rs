//! Rough yarn yardage estimate from blanket area.
//!
//! This is a v1 heuristic with no claim of physical accuracy. The constants
//! are placeholders that must stay as they are so estimates remain stable.

use std::fmt;

use super::border::BorderSpec;
use super::plan::{compute_body_size, BorderTooLarge};
use super::size::Dimensions;

/// Border stitching uses less yarn per square inch than solid body fill.
pub const BORDER_DENSITY: f64 = 0.7;

/// Yards per square inch at the low end of the range.
pub const LOW_YARDS_PER_SQ_IN: f64 = 0.35;

/// Yards per square inch at the high end of the range.
pub const HIGH_YARDS_PER_SQ_IN: f64 = 0.55;

/// Estimates are rounded to this many yards.
pub const ROUNDING_STEP: u64 = 50;

/// Largest estimate that is still a multiple of [`ROUNDING_STEP`].
const MAX_YARDS: u64 = u64::MAX - u64::MAX % ROUNDING_STEP;

/// Smallest low estimate ever reported.
pub const MIN_LOW_YARDS: u64 = 200;

/// Smallest high estimate ever reported.
pub const MIN_HIGH_YARDS: u64 = 300;

/// An estimated yardage range in whole yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YardageRange {
    pub low: u64,
    pub high: u64,
}

impl YardageRange {
    /// Range for an area-equivalent in square inches.
    pub fn from_area(effective_area: f64) -> Self {
        Self {
            low: round_to_step(effective_area * LOW_YARDS_PER_SQ_IN).max(MIN_LOW_YARDS),
            high: round_to_step(effective_area * HIGH_YARDS_PER_SQ_IN).max(MIN_HIGH_YARDS),
        }
    }
}

impl fmt::Display for YardageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} yd", self.low, self.high)
    }
}

/// Round to the nearest multiple of [`ROUNDING_STEP`], ties to even.
///
/// Estimates too large for a `u64` are capped at [`MAX_YARDS`].
fn round_to_step(yards: f64) -> u64 {
    let steps = (yards / ROUNDING_STEP as f64).round_ties_even();
    if steps.is_nan() || steps <= 0.0 {
        return 0;
    }
    // The cast saturates, so an oversized step count hits the cap below.
    (steps as u64)
        .checked_mul(ROUNDING_STEP)
        .unwrap_or(MAX_YARDS)
}

/// Area-equivalent of the project in square inches.
///
/// The border ring counts at [`BORDER_DENSITY`] times the border's own
/// yardage factor. When the finished size does not include the border,
/// the ring is added outside the given size.
pub fn effective_area(
    finished: Dimensions,
    border: &BorderSpec,
    finished_includes_border: bool,
) -> Result<f64, BorderTooLarge> {
    if border.is_none() || border.width_in() <= 0.0 {
        return Ok(finished.area());
    }

    let (body_area, outer_area) = if finished_includes_border {
        let body = compute_body_size(finished, border, true)?;
        (body.area(), finished.area())
    } else {
        (finished.area(), finished.expanded(border.width_in()).area())
    };

    Ok(weighted_area(body_area, outer_area, border))
}

/// Body area plus the ring between body and outer edge, weighted for the border.
pub(crate) fn weighted_area(body_area: f64, outer_area: f64, border: &BorderSpec) -> f64 {
    let ring_area = (outer_area - body_area).max(0.0);
    body_area + ring_area * BORDER_DENSITY * border.yardage_factor()
}

/// Estimate the yardage range for a blanket.
pub fn estimate_yardage(
    finished: Dimensions,
    border: &BorderSpec,
    finished_includes_border: bool,
) -> Result<YardageRange, BorderTooLarge> {
    effective_area(finished, border, finished_includes_border).map(YardageRange::from_area)
}
