use crate::text::normalizer::normalize;

/// A submitted journal entry together with its cleaned form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    raw_text: String,
    normalized_text: String,
}

impl JournalEntry {
    pub fn new(raw: &str) -> Self {
        let raw_text = raw.trim().to_string();
        let normalized_text = normalize(&raw_text);
        Self {
            raw_text,
            normalized_text,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }
}
