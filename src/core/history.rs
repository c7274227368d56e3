use crate::errors::AppResult;
use crate::models::LogRecord;
use crate::models::record::LOG_HEADERS;
use crate::store::LogStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::colour_for_prediction;
use crate::utils::formatting::preview;
use crate::utils::table::{Column, Table};

pub struct HistoryLogic;

impl HistoryLogic {
    /// Log rows newest first, entry text cut to `preview_len` characters.
    /// `limit` keeps only the newest `limit` rows.
    pub fn rows(records: &[LogRecord], preview_len: usize, limit: Option<usize>) -> Vec<LogRecord> {
        records
            .iter()
            .rev()
            .take(limit.unwrap_or(usize::MAX))
            .map(|r| LogRecord {
                entry: preview(&r.entry, preview_len),
                ..r.clone()
            })
            .collect()
    }

    pub fn show(
        store: &LogStore,
        user_id: &str,
        preview_len: usize,
        limit: Option<usize>,
    ) -> AppResult<()> {
        let records = match store.load_all(user_id)? {
            Some(r) if !r.is_empty() => r,
            _ => {
                info("No logs found yet. Submit a journal entry to start tracking.");
                return Ok(());
            }
        };

        header("📜 My Journal History");

        let rows = Self::rows(&records, preview_len, limit);

        let mut table = Table::new(vec![
            Column::new(LOG_HEADERS[0], 19),
            Column::new(LOG_HEADERS[1], 14),
            Column::new(LOG_HEADERS[2], 17),
            Column::new(LOG_HEADERS[3], preview_len + 3),
            Column::new(LOG_HEADERS[4], 11),
        ]);
        for r in &rows {
            let mut cells = r.to_row();
            cells.truncate(5);
            table.add_row(cells);
        }
        table.shrink_to_fit();

        // prediction is appended after padding so ANSI codes do not skew widths
        let rendered = table.render();
        let mut lines = rendered.lines();
        if let Some(head) = lines.next() {
            println!("{}{}", head, LOG_HEADERS[5]);
        }
        if let Some(rule) = lines.next() {
            println!("{}{}", rule, "-".repeat(LOG_HEADERS[5].len()));
        }
        for (line, r) in lines.zip(&rows) {
            println!(
                "{}{}",
                line,
                colour_for_prediction(&r.prediction).paint(r.prediction.as_str())
            );
        }

        println!("\n{} rows ({} total)", rows.len(), records.len());
        Ok(())
    }
}
