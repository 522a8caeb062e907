use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};
use tracing::debug;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut ledger = ctx.open_ledger();

        // Unknown numbers are ignored without a message.
        let Some(idx) = index.checked_sub(1) else {
            debug!(index, "nothing to delete");
            return Ok(());
        };
        let Some(entry) = ledger.entry(idx) else {
            debug!(index, "nothing to delete");
            return Ok(());
        };

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({} {} → {})? This action is irreversible.",
                index,
                entry.date_str(),
                entry.punch_in_str(),
                entry.punch_out_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if ledger.delete_entry(idx).is_some() {
            success(format!("Entry #{} has been deleted.", index));
        }
    }
    Ok(())
}
