//! Granny-square grid layout and round-count estimates.

use super::size::Dimensions;

/// Squares at or below this size are always given the minimum rounds.
const SMALL_SQUARE_IN: f64 = 2.0;

/// Fewest rounds a square is ever estimated to need.
pub const MIN_ROUNDS: u32 = 2;

/// How many squares make up the body and how big they assemble to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareLayout {
    pub across: u64,
    pub down: u64,
    pub square_in: f64,
}

impl SquareLayout {
    /// Squares in the whole grid. Saturates rather than wrapping.
    pub fn total(&self) -> u64 {
        self.across.saturating_mul(self.down)
    }

    /// Assembled size before joins, blocking, or border.
    pub fn assembled(&self) -> Dimensions {
        Dimensions::new(
            self.across as f64 * self.square_in,
            self.down as f64 * self.square_in,
        )
    }
}

/// Cover the body with whole squares, rounding each direction up.
///
/// Joining gaps are ignored. At least one square is placed each way.
pub fn estimate_square_layout(body: Dimensions, square_in: f64) -> SquareLayout {
    SquareLayout {
        across: squares_to_cover(body.width, square_in),
        down: squares_to_cover(body.height, square_in),
        square_in,
    }
}

fn squares_to_cover(length: f64, square_in: f64) -> u64 {
    let count = (length / square_in).ceil();
    if count.is_finite() && count >= 1.0 {
        // Float-to-int casts saturate at u64::MAX.
        count as u64
    } else {
        1
    }
}

/// Approximate rounds needed to reach `target_in` across.
///
/// Assumes a classic worsted granny grows about an inch per round after
/// the first couple. A crude linear guess, not a gauge model.
pub fn estimate_granny_rounds(target_in: f64) -> u32 {
    if target_in <= SMALL_SQUARE_IN {
        return MIN_ROUNDS;
    }
    (target_in.round_ties_even() as u32).max(MIN_ROUNDS)
}
