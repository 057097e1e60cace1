//! Border styles and their geometry.

use std::fmt;

use super::format::format_measure;

/// Border style around the blanket body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    None,
    Simple,
    Scallop,
    Picot,
    Ribbed,
    Custom,
}

impl BorderKind {
    /// All kinds, in menu order (`0` through `5`).
    pub const ALL: [BorderKind; 6] = [
        BorderKind::None,
        BorderKind::Simple,
        BorderKind::Scallop,
        BorderKind::Picot,
        BorderKind::Ribbed,
        BorderKind::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BorderKind::None => "none",
            BorderKind::Simple => "simple",
            BorderKind::Scallop => "scallop",
            BorderKind::Picot => "picot",
            BorderKind::Ribbed => "ribbed",
            BorderKind::Custom => "custom",
        }
    }

    /// Menu description shown next to the choice number.
    pub fn description(&self) -> &'static str {
        match self {
            BorderKind::None => "none",
            BorderKind::Simple => "simple (straight)",
            BorderKind::Scallop => "scallop / shell (rounded)",
            BorderKind::Picot => "picot (tiny points)",
            BorderKind::Ribbed => "ribbed / textured (more yarn)",
            BorderKind::Custom => "other / custom (describe it)",
        }
    }

    /// Width in inches offered when the user accepts the default.
    pub fn default_width(&self) -> f64 {
        match self {
            BorderKind::None => 0.0,
            BorderKind::Simple => 2.0,
            BorderKind::Scallop => 2.5,
            BorderKind::Picot => 1.5,
            BorderKind::Ribbed => 2.5,
            BorderKind::Custom => 2.0,
        }
    }

    /// Multiplier on border yarn relative to a plain border.
    pub fn yardage_factor(&self) -> f64 {
        match self {
            BorderKind::None => 1.00,
            BorderKind::Simple => 1.00,
            BorderKind::Scallop => 1.12,
            BorderKind::Picot => 1.05,
            BorderKind::Ribbed => 1.15,
            BorderKind::Custom => 1.10,
        }
    }

    /// Position in the menu; also the number the user types.
    pub fn menu_index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    /// Map a menu choice (`"0"`..`"5"`) to a kind.
    ///
    /// Only the bare digit is accepted, so `"+1"` or `"05"` are rejected.
    pub fn from_choice(choice: &str) -> Option<BorderKind> {
        match choice.trim() {
            "0" => Some(BorderKind::None),
            "1" => Some(BorderKind::Simple),
            "2" => Some(BorderKind::Scallop),
            "3" => Some(BorderKind::Picot),
            "4" => Some(BorderKind::Ribbed),
            "5" => Some(BorderKind::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for BorderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chosen border.
///
/// A `None` border always has zero width and a factor of 1.0; the
/// constructors enforce this.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSpec {
    kind: BorderKind,
    width_in: f64,
    yardage_factor: f64,
    description: String,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self::none()
    }
}

impl BorderSpec {
    pub fn none() -> Self {
        Self {
            kind: BorderKind::None,
            width_in: 0.0,
            yardage_factor: 1.0,
            description: String::new(),
        }
    }

    /// A border of `kind` at `width_in` inches, using the kind's yardage factor.
    ///
    /// Negative widths are clamped to zero.
    pub fn new(kind: BorderKind, width_in: f64) -> Self {
        if kind == BorderKind::None {
            return Self::none();
        }
        Self {
            kind,
            width_in: width_in.max(0.0),
            yardage_factor: kind.yardage_factor(),
            description: String::new(),
        }
    }

    /// A border of `kind` at its default width.
    pub fn with_default_width(kind: BorderKind) -> Self {
        Self::new(kind, kind.default_width())
    }

    /// Attach a free-text description. Only kept for custom borders.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        if self.kind == BorderKind::Custom {
            self.description = description.into().trim().to_string();
        }
        self
    }

    pub fn kind(&self) -> BorderKind {
        self.kind
    }

    pub fn width_in(&self) -> f64 {
        self.width_in
    }

    pub fn yardage_factor(&self) -> f64 {
        self.yardage_factor
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_none(&self) -> bool {
        self.kind == BorderKind::None
    }
}

impl fmt::Display for BorderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        write!(f, "{} ({} in)", self.kind, format_measure(self.width_in))?;
        if !self.description.is_empty() {
            write!(f, " — {}", self.description)?;
        }
        Ok(())
    }
}
