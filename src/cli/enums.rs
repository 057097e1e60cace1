//! CLI enum types for pattern style and unit options.

use clap::ValueEnum;

use crate::measure::Unit;
use crate::render::PatternStyle;

/// Pattern wording style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StyleArg {
    #[default]
    Beginner,
    Advanced,
}

impl From<StyleArg> for PatternStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Beginner => PatternStyle::Beginner,
            StyleArg::Advanced => PatternStyle::Advanced,
        }
    }
}

/// Unit for custom dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnitArg {
    #[default]
    In,
    Ft,
    Cm,
    M,
}

impl From<UnitArg> for Unit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::In => Unit::In,
            UnitArg::Ft => Unit::Ft,
            UnitArg::Cm => Unit::Cm,
            UnitArg::M => Unit::M,
        }
    }
}
