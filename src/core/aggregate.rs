//! Reduce per-entry classifications to one batch verdict and narrative.

use crate::classifier::ClassificationResult;
use crate::models::Label;
use std::collections::HashMap;

/// Positive-label share at or above which the cautionary narrative is used.
pub const CAUTION_THRESHOLD: f64 = 0.6;
/// Control-label share at or above which the reassuring narrative is used.
pub const REASSURE_THRESHOLD: f64 = 0.8;

/// Which of the three fixed narratives applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    Cautionary,
    Reassuring,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// Mean positive-class probability on the 0–100 scale.
    pub average_probability: f64,
    pub overall_label: Label,
    pub narrative_kind: NarrativeKind,
    pub narrative: String,
    /// Relative frequency of each label key ("0", "1", ...).
    pub label_frequencies: HashMap<String, f64>,
}

pub struct Aggregator;

impl Aggregator {
    /// Summarize a batch. An empty batch yields a 0% control-like summary
    /// with the neutral narrative.
    pub fn summarize(results: &[ClassificationResult], count: usize) -> BatchSummary {
        let n = results.len();

        let average_probability = if n == 0 {
            0.0
        } else {
            results.iter().map(|r| r.probability).sum::<f64>() / n as f64 * 100.0
        };

        let labels: Vec<Label> = results.iter().map(|r| r.label).collect();
        let label_frequencies = Self::label_frequencies(&labels);

        let positive = frequency(&label_frequencies, &Label::SchizophreniaLike);
        let overall_label = if n > 0 && positive >= 0.5 {
            Label::SchizophreniaLike
        } else {
            Label::Control
        };

        let narrative_kind = Self::narrative_kind(&label_frequencies);
        let narrative = Self::narrative(narrative_kind, count);

        BatchSummary {
            average_probability,
            overall_label,
            narrative_kind,
            narrative,
            label_frequencies,
        }
    }

    /// Relative frequency of every label present, keyed by label code.
    pub fn label_frequencies(labels: &[Label]) -> HashMap<String, f64> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for label in labels {
            *counts.entry(label.key()).or_insert(0) += 1;
        }

        let total = labels.len() as f64;
        counts
            .into_iter()
            .map(|(k, c)| (k, c as f64 / total))
            .collect()
    }

    /// Thresholds are checked in order, so the cautionary rule wins when
    /// both could apply. Keys other than "0" and "1" count for neither.
    pub fn narrative_kind(frequencies: &HashMap<String, f64>) -> NarrativeKind {
        let positive = frequency(frequencies, &Label::SchizophreniaLike);
        let control = frequency(frequencies, &Label::Control);

        if positive >= CAUTION_THRESHOLD {
            NarrativeKind::Cautionary
        } else if control >= REASSURE_THRESHOLD {
            NarrativeKind::Reassuring
        } else {
            NarrativeKind::Neutral
        }
    }

    pub fn narrative(kind: NarrativeKind, count: usize) -> String {
        match kind {
            NarrativeKind::Cautionary => format!(
                "Across {count} entries, a strong portion appear schizophrenia-like. \
                 Consider exploring deeper mental health support."
            ),
            NarrativeKind::Reassuring => format!(
                "{count} entries appear grounded, coherent, and stable, \
                 with no alarming signs detected."
            ),
            NarrativeKind::Neutral => "Your entries show a mix of emotional states. \
                 Consider continuing to track them for patterns over time."
                .to_string(),
        }
    }
}

fn frequency(frequencies: &HashMap<String, f64>, label: &Label) -> f64 {
    frequencies.get(&label.key()).copied().unwrap_or(0.0)
}
