use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { user_id, name } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        SessionLogic::login(&mut pool, Path::new(&cfg.session_file), user_id, name)?;
    }
    Ok(())
}
