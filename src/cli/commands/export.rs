use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let range = ctx.range(range)?;
        let ledger = ctx.open_ledger();
        ExportLogic::export(&ledger, *format, &expand_tilde(file), &range, *force)?;
    }
    Ok(())
}
