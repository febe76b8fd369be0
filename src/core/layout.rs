use crate::error::MatterTableError;
use std::fmt;
use std::str::FromStr;

/// Table shape for rendered front matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Keys form a header row, values a single body row
    Horizontal,
    /// One two-cell row per key/value pair
    #[default]
    Vertical,
}

impl Layout {
    /// The selector string naming this layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = MatterTableError;

    /// Selectors are matched exactly; no case folding or trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(MatterTableError::unknown_layout(other)),
        }
    }
}
