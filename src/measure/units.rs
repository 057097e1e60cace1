//! Length units accepted for custom dimensions.
//!
//! Inches are the canonical unit; everything else is converted on entry.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// A length unit the user may type dimensions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    In,
    Ft,
    Cm,
    M,
}

impl Unit {
    /// All supported units, in menu order.
    pub const ALL: [Unit; 4] = [Unit::In, Unit::Ft, Unit::Cm, Unit::M];

    /// Short token used in prompts and labels.
    pub fn token(&self) -> &'static str {
        match self {
            Unit::In => "in",
            Unit::Ft => "ft",
            Unit::Cm => "cm",
            Unit::M => "m",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::In => "inches",
            Unit::Ft => "feet",
            Unit::Cm => "centimeters",
            Unit::M => "meters",
        }
    }

    /// Convert a value in this unit to inches.
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            Unit::In => value,
            Unit::Ft => value * 12.0,
            Unit::Cm => value / CM_PER_INCH,
            Unit::M => (value * 100.0) / CM_PER_INCH,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Unit::In),
            "ft" => Ok(Unit::Ft),
            "cm" => Ok(Unit::Cm),
            "m" => Ok(Unit::M),
            other => Err(UnitError::Unsupported(other.to_string())),
        }
    }
}

/// Error returned for a unit token outside `in`, `ft`, `cm`, `m`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("unsupported unit '{0}' (expected in, ft, cm, or m)")]
    Unsupported(String),
}

/// Convert `value` expressed in the unit named by `unit` to inches.
///
/// Tokens are matched exactly; callers lowercase user input first.
pub fn to_inches(value: f64, unit: &str) -> Result<f64, UnitError> {
    let unit: Unit = unit.parse()?;
    Ok(unit.to_inches(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_pass_through() {
        assert_eq!(to_inches(7.5, "in").unwrap(), 7.5);
    }

    #[test]
    fn test_feet_to_inches() {
        assert_eq!(to_inches(4.0, "ft").unwrap(), 48.0);
    }

    #[test]
    fn test_centimeters_to_inches() {
        assert!((to_inches(2.54, "cm").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_meters_to_inches() {
        assert!((to_inches(1.0, "m").unwrap() - 100.0 / 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        assert_eq!(
            to_inches(1.0, "yd"),
            Err(UnitError::Unsupported("yd".to_string()))
        );
        assert!(to_inches(1.0, "IN").is_err());
        assert!(to_inches(1.0, "").is_err());
    }

    #[test]
    fn test_token_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(unit.token().parse::<Unit>().unwrap(), unit);
        }
    }
}
