use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// CSS color name applied to a plotted route line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    Blue,
    Green,
    Red,
    Orange,
}

impl LineColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineColor::Blue => "blue",
            LineColor::Green => "green",
            LineColor::Red => "red",
            LineColor::Orange => "orange",
        }
    }
}

impl Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
