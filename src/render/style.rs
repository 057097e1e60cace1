//! Wording style and material defaults used by the text renderers.

use serde::Deserialize;
use std::fmt;

/// How pattern text is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternStyle {
    /// Spelled-out stitch names and step-by-step rounds.
    #[default]
    Beginner,
    /// Standard abbreviations.
    Advanced,
}

impl PatternStyle {
    pub fn name(&self) -> &'static str {
        match self {
            PatternStyle::Beginner => "beginner",
            PatternStyle::Advanced => "advanced",
        }
    }

    pub fn double_crochet(&self) -> &'static str {
        match self {
            PatternStyle::Beginner => "double crochet",
            PatternStyle::Advanced => "dc",
        }
    }

    /// Plural of "stitch" as written in row instructions.
    pub fn stitches(&self) -> &'static str {
        match self {
            PatternStyle::Beginner => "stitches",
            PatternStyle::Advanced => "sts",
        }
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DEFAULT_YARN: &str = "Worsted weight (#4)";
pub const DEFAULT_HOOK: &str = "5.0 mm";

/// Yarn and hook suggested in materials lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materials {
    pub yarn: String,
    pub hook: String,
}

impl Default for Materials {
    fn default() -> Self {
        Self {
            yarn: DEFAULT_YARN.to_string(),
            hook: DEFAULT_HOOK.to_string(),
        }
    }
}

/// Everything the renderers need besides the data being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderSettings {
    pub style: PatternStyle,
    pub materials: Materials,
}

impl RenderSettings {
    pub fn new(style: PatternStyle) -> Self {
        Self {
            style,
            materials: Materials::default(),
        }
    }

    pub fn with_materials(mut self, materials: Materials) -> Self {
        self.materials = materials;
        self
    }
}
