use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    SessionLogic::logout(&mut pool, Path::new(&cfg.session_file))?;
    Ok(())
}
