use serde::{Deserialize, Serialize};

pub const DEFAULT_DOT_COLOR: &str = "#0fffc3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Darkest,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Darkest => "darkest",
            Theme::Night => "night",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "darkest" => Some(Theme::Darkest),
            "night" => Some(Theme::Night),
            _ => None,
        }
    }
}
