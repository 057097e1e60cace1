//! Text rendering for wizard output.
//!
//! Renderers build strings from estimation results and explicit
//! [`RenderSettings`]; they never read input or write to the console.

mod pattern;
mod style;
mod summary;

pub use pattern::{demo_pattern, granny_plan, granny_plan_border_too_large, granny_square};
pub use style::{Materials, PatternStyle, RenderSettings, DEFAULT_HOOK, DEFAULT_YARN};
pub use summary::{
    border_lines, border_too_large_warning, confirmation, confirmation_border_too_large, heading,
    materials,
};
