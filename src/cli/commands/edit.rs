use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::compute_duration;
use crate::errors::AppResult;
use crate::models::entry_field::EntryField;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Edit {
        index,
        punch_in,
        punch_out,
    } = cmd
    {
        //
        // 1. Parse every new value before touching the ledger
        //
        let mut fields = Vec::new();
        if let Some(v) = punch_in {
            fields.push(EntryField::punch_in(v)?);
        }
        if let Some(v) = punch_out {
            fields.push(EntryField::punch_out(v)?);
        }

        //
        // 2. Resolve the displayed number (1-based)
        //
        let mut ledger = ctx.open_ledger();
        let Some(idx) = index.checked_sub(1).filter(|i| ledger.entry(*i).is_some()) else {
            warning(format!("No entry #{}.", index));
            return Ok(());
        };

        //
        // 3. Apply
        //
        let mut updated = None;
        for field in fields {
            updated = Some(ledger.update_entry(idx, field)?);
        }

        if let Some(entry) = updated {
            let duration = compute_duration(&entry)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".into());
            success(format!("Entry #{} updated. Duration: {}", index, duration));
        }
    }
    Ok(())
}
