use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported mood attached to every row of an analysis batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Mood {
    #[serde(alias = "🙂 Happy")]
    Happy,
    #[serde(alias = "😐 Neutral")]
    Neutral,
    #[serde(alias = "😔 Sad")]
    Sad,
    #[serde(alias = "😰 Anxious")]
    Anxious,
    #[serde(alias = "😡 Frustrated")]
    Frustrated,
    #[serde(alias = "😭 Overwhelmed")]
    Overwhelmed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Frustrated => "Frustrated",
            Mood::Overwhelmed => "Overwhelmed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Anxious => "😰",
            Mood::Frustrated => "😡",
            Mood::Overwhelmed => "😭",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
