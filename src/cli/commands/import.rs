use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut ledger = ctx.open_ledger();
        let (imported, skipped) = ExportLogic::import(&mut ledger, &expand_tilde(file))?;

        if skipped > 0 {
            warning(format!("Skipped {} entries without a punch-out.", skipped));
        }
        success(format!("Imported {} entries from {}.", imported, file));
    }
    Ok(())
}
