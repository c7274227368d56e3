use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trend::TrendLogic;
use crate::errors::AppResult;
use crate::models::Session;
use crate::store::LogStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Trend {
        width,
        height,
        table,
    } = cmd
    {
        let (user_id, _) = session.require_user()?;
        let store = LogStore::new(&cfg.logs_dir);
        TrendLogic::show(
            &store,
            user_id,
            width.unwrap_or(cfg.chart_width),
            height.unwrap_or(cfg.chart_height),
            *table,
        )?;
    }
    Ok(())
}
