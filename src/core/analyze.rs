use crate::classifier::{ClassificationResult, Classifier};
use crate::core::aggregate::{Aggregator, BatchSummary};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{HelpStatus, JournalEntry, LogRecord, Mood};
use crate::store::LogStore;
use crate::ui::messages::{header, paragraph, success, warning};
use crate::utils::colors::{paint_label, paint_score};
use crate::utils::date::now_timestamp;
use crate::utils::formatting::{bold, round2};

/// Everything produced by one "Analyze" action.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub entries: Vec<JournalEntry>,
    pub results: Vec<ClassificationResult>,
    pub summary: BatchSummary,
}

impl Analysis {
    /// Normalize, classify as one batch, aggregate.
    pub fn evaluate(classifier: &Classifier, entries: Vec<JournalEntry>) -> AppResult<Self> {
        let normalized: Vec<String> = entries
            .iter()
            .map(|e| e.normalized_text().to_string())
            .collect();

        let results = classifier.classify_batch(&normalized)?;
        let summary = Aggregator::summarize(&results, entries.len());

        Ok(Self {
            entries,
            results,
            summary,
        })
    }

    /// One log row per entry. Every row carries the batch average and the
    /// overall label, not the entry's own score.
    pub fn to_records(&self, mood: Mood, help_status: HelpStatus, timestamp: &str) -> Vec<LogRecord> {
        let probability = round2(self.summary.average_probability);
        let prediction = self.summary.overall_label.name().to_string();

        self.entries
            .iter()
            .map(|e| LogRecord {
                timestamp: timestamp.to_string(),
                mood,
                help_status,
                entry: e.raw_text().to_string(),
                probability,
                prediction: prediction.clone(),
            })
            .collect()
    }
}

/// High-level business logic for the `analyze` command.
pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Trim the first `expected` submitted texts and check that none of
    /// them is blank. Texts beyond `expected` are not part of the batch.
    ///
    /// Returns `Ok(None)` when an announced entry is missing or blank (the
    /// caller warns and stops without touching the log).
    pub fn prepare_entries(
        raw: &[String],
        expected: usize,
        max_entries: usize,
    ) -> AppResult<Option<Vec<JournalEntry>>> {
        if expected > max_entries {
            return Err(AppError::TooManyEntries {
                given: expected,
                max: max_entries,
            });
        }

        let entries: Vec<JournalEntry> = raw
            .iter()
            .take(expected)
            .filter(|t| !t.trim().is_empty())
            .map(|t| JournalEntry::new(t))
            .collect();

        if entries.is_empty() || entries.len() < expected {
            return Ok(None);
        }

        Ok(Some(entries))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn run(
        pool: &mut DbPool,
        store: &LogStore,
        classifier: &Classifier,
        user_id: &str,
        raw_entries: &[String],
        expected: usize,
        max_entries: usize,
        mood: Mood,
        help_status: HelpStatus,
    ) -> AppResult<Option<Analysis>> {
        let Some(entries) = Self::prepare_entries(raw_entries, expected, max_entries)? else {
            warning("Please fill in all the journal entries before analyzing.");
            return Ok(None);
        };

        let analysis = Analysis::evaluate(classifier, entries)?;
        print_analysis(&analysis);

        let records = analysis.to_records(mood, help_status, &now_timestamp());
        store.append(user_id, &records)?;

        success(format!(
            "Logged {} entr{} to {}",
            records.len(),
            if records.len() == 1 { "y" } else { "ies" },
            store.path_for(user_id).display()
        ));

        ttlog_or_warn(
            &pool.conn,
            "analyze",
            user_id,
            &format!(
                "{} entries, avg {:.2}%, {}",
                records.len(),
                analysis.summary.average_probability,
                analysis.summary.overall_label.name()
            ),
        );

        Ok(Some(analysis))
    }
}

fn print_analysis(analysis: &Analysis) {
    let summary = &analysis.summary;

    header("🔍 Analysis Result");
    println!(
        "{} {}",
        bold("Prediction Score (Schizophrenia-like):"),
        paint_score(summary.average_probability)
    );
    println!("{} {}", bold("Overall:"), paint_label(&summary.overall_label));
    paragraph("Summary", &summary.narrative);

    if analysis.entries.len() > 1 {
        header("🧾 Entry-wise Analysis");
        for (i, result) in analysis.results.iter().enumerate() {
            println!(
                "{} {} ({:.2}% confidence)",
                bold(&format!("Entry {}:", i + 1)),
                paint_label(&result.label),
                result.probability * 100.0
            );
        }
    }
}
