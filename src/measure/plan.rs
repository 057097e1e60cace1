//! Body-size derivation and the assembled project plan.

use super::border::BorderSpec;
use super::size::{Dimensions, SizeSelection};
use super::yardage::{weighted_area, YardageRange};

/// The border leaves no room for the body.
///
/// This is an expected input outcome: callers should ask for a different
/// size or border rather than treat it as a fault.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("border of {border_in} in is too large for a {finished} in finished size")]
pub struct BorderTooLarge {
    pub finished: Dimensions,
    pub border_in: f64,
}

/// Derive the stitched body from the finished size.
///
/// When the finished size does not include the border (or there is no
/// border) the body is the finished size unchanged. Otherwise the border
/// width is removed from every side, failing if either side collapses.
pub fn compute_body_size(
    finished: Dimensions,
    border: &BorderSpec,
    finished_includes_border: bool,
) -> Result<Dimensions, BorderTooLarge> {
    if !finished_includes_border || border.is_none() {
        return Ok(finished);
    }

    let body = finished.expanded(-border.width_in());
    if body.width <= 0.0 || body.height <= 0.0 {
        return Err(BorderTooLarge {
            finished,
            border_in: border.width_in(),
        });
    }
    Ok(body)
}

/// Everything the user chose for one blanket, plus the derived body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPlan {
    pub selection: SizeSelection,
    pub border: BorderSpec,
    pub finished_includes_border: bool,
    pub body: Dimensions,
}

impl ProjectPlan {
    /// Validate the combination and derive the body size.
    pub fn new(
        selection: SizeSelection,
        border: BorderSpec,
        finished_includes_border: bool,
    ) -> Result<Self, BorderTooLarge> {
        let body = compute_body_size(selection.size, &border, finished_includes_border)?;
        Ok(Self {
            selection,
            border,
            finished_includes_border,
            body,
        })
    }

    /// Finished size as entered by the user.
    pub fn finished(&self) -> Dimensions {
        self.selection.size
    }

    /// Outer size once the border is on.
    ///
    /// Equal to the entered size when it already includes the border,
    /// larger by twice the border width otherwise.
    pub fn overall_size(&self) -> Dimensions {
        if self.finished_includes_border || self.border.is_none() {
            self.selection.size
        } else {
            self.body.expanded(self.border.width_in())
        }
    }

    /// Yardage for the validated body and its border ring.
    pub fn yardage(&self) -> YardageRange {
        let area = weighted_area(self.body.area(), self.overall_size().area(), &self.border);
        YardageRange::from_area(area)
    }
}
