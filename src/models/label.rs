use serde::Serialize;
use std::fmt;

/// Class predicted for a journal entry.
///
/// Models are binary (`0` = control, `1` = schizophrenia-like). Any other
/// class code is kept as `Other` so it can be counted as unclassified
/// instead of being forced into one of the two buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Control,
    SchizophreniaLike,
    Other(i64),
}

impl Label {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Label::Control,
            1 => Label::SchizophreniaLike,
            other => Label::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Label::Control => 0,
            Label::SchizophreniaLike => 1,
            Label::Other(c) => *c,
        }
    }

    /// Key used by the label-frequency table ("0", "1", ...).
    pub fn key(&self) -> String {
        self.code().to_string()
    }

    /// Human-readable name written to the `prediction` column.
    pub fn name(&self) -> &'static str {
        match self {
            Label::SchizophreniaLike => "Schizophrenic-like",
            Label::Control | Label::Other(_) => "Control-like",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Label::SchizophreniaLike)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
