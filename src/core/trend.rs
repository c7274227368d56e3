use crate::errors::AppResult;
use crate::models::LogRecord;
use crate::store::LogStore;
use crate::ui::messages::{header, info};
use crate::utils::date::parse_day_first;
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

/// One point of the prediction trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub timestamp: NaiveDateTime,
    /// Batch probability as logged (0–100).
    pub probability: f64,
}

/// Chronological `(timestamp, probability)` series built from a user log.
#[derive(Debug, Clone, Default)]
pub struct TrendView {
    points: Vec<TrendPoint>,
}

impl TrendView {
    /// Rows with an unparsable timestamp are dropped; the rest are sorted
    /// ascending, keeping log order for equal timestamps.
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut points: Vec<TrendPoint> = records
            .iter()
            .filter_map(|r| {
                parse_day_first(&r.timestamp).map(|timestamp| TrendPoint {
                    timestamp,
                    probability: r.probability,
                })
            })
            .collect();

        points.sort_by_key(|p| p.timestamp);

        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Column chart on a fixed 0–100 axis. When there are more points than
    /// columns, neighbouring points are averaged into one column.
    pub fn render(&self, width: usize, height: usize) -> String {
        let mut out = String::new();
        if self.points.is_empty() || width == 0 || height == 0 {
            return out;
        }

        let columns = bucket_means(&self.points, width);
        let step = 100.0 / height as f64;

        for row in (1..=height).rev() {
            let label = if row == height {
                "100 ┤".to_string()
            } else if row == height.div_ceil(2) {
                " 50 ┤".to_string()
            } else {
                "    │".to_string()
            };
            out.push_str(&label);

            let threshold = (row as f64 - 0.5) * step;
            for value in &columns {
                out.push(if *value >= threshold { '█' } else { ' ' });
            }
            out.push('\n');
        }

        out.push_str("  0 └");
        out.push_str(&"─".repeat(columns.len()));
        out.push('\n');

        let first = self.points[0].timestamp.format("%Y-%m-%d").to_string();
        let last = self.points[self.points.len() - 1]
            .timestamp
            .format("%Y-%m-%d")
            .to_string();
        let gap = columns.len().saturating_sub(first.len() + last.len()).max(1);
        out.push_str(&format!("     {}{}{}\n", first, " ".repeat(gap), last));

        out
    }
}

/// Split `points` into at most `width` consecutive groups and average each.
fn bucket_means(points: &[TrendPoint], width: usize) -> Vec<f64> {
    let n = points.len();
    if n <= width {
        return points.iter().map(|p| p.probability).collect();
    }

    (0..width)
        .map(|c| {
            let start = c * n / width;
            let end = ((c + 1) * n / width).max(start + 1);
            let slice = &points[start..end];
            slice.iter().map(|p| p.probability).sum::<f64>() / slice.len() as f64
        })
        .collect()
}

pub struct TrendLogic;

impl TrendLogic {
    pub fn show(
        store: &LogStore,
        user_id: &str,
        width: usize,
        height: usize,
        table: bool,
    ) -> AppResult<()> {
        let Some(records) = store.load_all(user_id)? else {
            info("No data available yet to show trends.");
            return Ok(());
        };

        let view = TrendView::from_records(&records);
        if view.is_empty() {
            info("No data available yet to show trends.");
            return Ok(());
        }

        header("📈 Mental Health Prediction Trend");
        print!("{}", view.render(width, height));

        if let Some(latest) = view.points().last() {
            println!(
                "\n{} points, latest {:.2}% at {}",
                view.points().len(),
                latest.probability,
                latest.timestamp.format("%Y-%m-%d %H:%M:%S")
            );
        }

        if table {
            let mut t = Table::new(vec![Column::new("timestamp", 19), Column::new("probability", 11)]);
            for p in view.points() {
                t.add_row(vec![
                    p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    format!("{:.2}", p.probability),
                ]);
            }
            println!();
            print!("{}", t.render());
        }

        Ok(())
    }
}
