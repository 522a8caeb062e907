use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema migrations
pub fn handle(cli: &Cli, ctx: &Context) -> AppResult<()> {
    let db_path = Config::init_all(&ctx.config_path, cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing punchclock…");
    println!("📄 Config file : {}", ctx.config_path.display());
    println!("🗄️  Database   : {}", db_path.display());

    SqliteStore::open(&db_path)?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
