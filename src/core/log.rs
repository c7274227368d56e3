use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::fit_width;
use ansi_term::Colour;

/// Max visible width of the "operation (target)" column.
const OP_WIDTH: usize = 40;

/// Colour per audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "analyze" => Colour::Green,
        "export" => Colour::Blue,
        "login" => Colour::Cyan,
        "logout" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let lines = load_log(&pool.conn)?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let date_of = |raw: &str| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| raw.to_string())
        };

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines
            .iter()
            .map(|l| date_of(&l.date).len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for line in &lines {
            let op_target = if line.target.is_empty() {
                line.operation.clone()
            } else {
                format!("{} ({})", line.operation, line.target)
            };
            let visible = fit_width(&op_target, OP_WIDTH);

            // colour only the operation word; pad on the visible text
            let padding = " ".repeat(OP_WIDTH.saturating_sub(visible.chars().count()));
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&line.operation).paint(op), rest)
                }
                None => color_for_operation(&line.operation)
                    .paint(visible.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                date_of(&line.date),
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
