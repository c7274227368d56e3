use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::core::model::ModelLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Session;
use crate::store::LogStore;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs;

/// Split a text file into entries on blank lines.
pub fn split_entries(content: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                entries.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        entries.push(current.join("\n"));
    }

    entries
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Analyze {
        mood,
        help_status,
        count,
        entries,
        from_file,
    } = cmd
    {
        let (user_id, name) = session.require_user()?;

        let mut raw: Vec<String> = entries.clone();
        if let Some(path) = from_file {
            let content = fs::read_to_string(expand_tilde(path))?;
            raw.extend(split_entries(&content));
        }

        let expected = count.map(usize::from).unwrap_or(raw.len());

        // the model is loaded before anything else so a broken artifact
        // aborts without side effects
        let classifier = ModelLogic::load(cfg)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let store = LogStore::new(&cfg.logs_dir);

        info(format!(
            "Welcome, {name}! Analyzing {} journal entr{}.",
            expected,
            if expected == 1 { "y" } else { "ies" }
        ));

        AnalyzeLogic::run(
            &mut pool,
            &store,
            &classifier,
            user_id,
            &raw,
            expected,
            cfg.max_entries,
            *mood,
            *help_status,
        )?;
    }
    Ok(())
}
