use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Session;
use crate::store::LogStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        dir,
        force,
    } = cmd
    {
        let (user_id, _) = session.require_user()?;
        let store = LogStore::new(&cfg.logs_dir);
        let mut pool = DbPool::new(&cfg.database)?;

        let path = ExportLogic::target_path(user_id, *format, file.as_deref(), dir.as_deref());
        ExportLogic::export(&mut pool, &store, user_id, *format, &path, *force)?;
    }
    Ok(())
}
