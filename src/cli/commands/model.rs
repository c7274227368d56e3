use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::model::ModelLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Model { info: true }) {
        ModelLogic::print_info(cfg)?;
    }
    Ok(())
}
