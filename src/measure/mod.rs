//! Measurement and estimation.
//!
//! Pure functions over inches: unit conversion, body size from finished
//! size and border, yardage, and granny-square layout. Nothing here reads
//! input or prints; expected failures come back as values.

mod border;
mod format;
mod granny;
mod plan;
mod size;
mod units;
mod yardage;

pub use border::{BorderKind, BorderSpec};
pub use format::format_measure;
pub use granny::{estimate_granny_rounds, estimate_square_layout, SquareLayout, MIN_ROUNDS};
pub use plan::{compute_body_size, BorderTooLarge, ProjectPlan};
pub use size::{parse_dimensions, DimensionError, Dimensions, Preset, SizeSelection, SizeSource};
pub use units::{to_inches, Unit, UnitError, CM_PER_INCH};
pub use yardage::{effective_area, estimate_yardage, YardageRange};
