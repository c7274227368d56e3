use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::models::Session;
use crate::store::LogStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let (user_id, _) = session.require_user()?;
        let store = LogStore::new(&cfg.logs_dir);
        HistoryLogic::show(&store, user_id, cfg.preview_len, *limit)?;
    }
    Ok(())
}
