use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the logs and models directories
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing SCOPE…");

    cfg.init_all(cli.test)?;

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &cfg.database);

    ttlog_or_warn(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!(
        "📦 Place model.json and vectorizer.json in {} before running `scope analyze`.",
        cfg.model_dir
    );
    println!("🎉 SCOPE initialization completed!");
    Ok(())
}
