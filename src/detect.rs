//! Photo pattern detection.
//!
//! There is no image recognition yet: [`detect_from_photo`] always reports
//! a granny square so the recreate-from-photo flow can be exercised.

use std::fmt;

/// Stitch pattern families a photo could be recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    GrannySquare,
    /// Anything the wizard cannot build a plan for yet.
    Unsupported(String),
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::GrannySquare => f.write_str("granny_square"),
            PatternKind::Unsupported(name) => f.write_str(name),
        }
    }
}

/// Result of looking at a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub pattern: PatternKind,
    /// 0.0 to 1.0.
    pub confidence: f32,
}

impl Detection {
    pub fn new(pattern: PatternKind, confidence: f32) -> Self {
        Self {
            pattern,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.pattern == PatternKind::GrannySquare
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (confidence {:.2})", self.pattern, self.confidence)
    }
}

/// Stand-in for real detection.
pub fn detect_from_photo() -> Detection {
    Detection::new(PatternKind::GrannySquare, 0.86)
}
