//! Blanket sizes: presets, free-form dimension pairs, and the chosen size.

use std::fmt;

use super::format::format_measure;
use super::units::Unit;

/// A width × height pair in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grow (or shrink, for negative `amount`) by `amount` on every side.
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {}",
            format_measure(self.width),
            format_measure(self.height)
        )
    }
}

/// Named blanket size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Baby,
    Throw,
    Twin,
    Queen,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Baby, Preset::Throw, Preset::Twin, Preset::Queen];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Baby => "baby",
            Preset::Throw => "throw",
            Preset::Twin => "twin",
            Preset::Queen => "queen",
        }
    }

    /// Width and height in inches.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Preset::Baby => Dimensions::new(30.0, 36.0),
            Preset::Throw => Dimensions::new(50.0, 60.0),
            Preset::Twin => Dimensions::new(66.0, 90.0),
            Preset::Queen => Dimensions::new(90.0, 100.0),
        }
    }

    /// Case-insensitive lookup by name. Unknown names are not presets.
    pub fn lookup(name: &str) -> Option<Preset> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

/// Where a size selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    Preset(Preset),
    /// Entered by the user in the given unit.
    Custom(Unit),
}

impl fmt::Display for SizeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSource::Preset(p) => write!(f, "preset ({})", p.name()),
            SizeSource::Custom(u) => write!(f, "custom ({})", u.token()),
        }
    }
}

/// A finished size in inches plus where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSelection {
    pub size: Dimensions,
    pub source: SizeSource,
}

impl SizeSelection {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            size: preset.dimensions(),
            source: SizeSource::Preset(preset),
        }
    }

    /// Build a custom selection from a pair entered in `unit`.
    pub fn custom(width: f64, height: f64, unit: Unit) -> Self {
        Self {
            size: Dimensions::new(unit.to_inches(width), unit.to_inches(height)),
            source: SizeSource::Custom(unit),
        }
    }

    /// Resolve user text as a preset name or a dimension pair in `unit`.
    pub fn resolve(entry: &str, unit: Unit) -> Result<Self, DimensionError> {
        if let Some(preset) = Preset::lookup(entry) {
            return Ok(Self::from_preset(preset));
        }
        let (w, h) = parse_dimensions(entry)?;
        Ok(Self::custom(w, h, unit))
    }
}

/// Why a dimension pair could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DimensionError {
    #[error("expected two numbers, found {0}")]
    WrongCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("dimensions must be greater than zero")]
    NotPositive,
}

/// Parse a free-form pair such as `52x68`, `52 by 68`, or `52,68`.
///
/// Both values must be finite and strictly positive.
pub fn parse_dimensions(text: &str) -> Result<(f64, f64), DimensionError> {
    let mut normalized = text.trim().to_lowercase();
    for sep in ["by", "x", ","] {
        normalized = normalized.replace(sep, " ");
    }

    let parts: Vec<&str> = normalized.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(DimensionError::WrongCount(parts.len()));
    }

    let w = parse_number(parts[0])?;
    let h = parse_number(parts[1])?;
    if w <= 0.0 || h <= 0.0 {
        return Err(DimensionError::NotPositive);
    }
    Ok((w, h))
}

fn parse_number(token: &str) -> Result<f64, DimensionError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DimensionError::NotANumber(token.to_string()))
}
