use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer to "Have you ever sought professional help for mental health?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum HelpStatus {
    Yes,
    No,
    #[serde(rename = "Prefer not to say")]
    #[value(name = "prefer-not-to-say")]
    PreferNotToSay,
}

impl HelpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpStatus::Yes => "Yes",
            HelpStatus::No => "No",
            HelpStatus::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for HelpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
