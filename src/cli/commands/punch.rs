use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::{compute_duration, entry_minutes};
use crate::core::ledger::TimeLedger;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::format_money;
use crate::utils::time::format_time;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let mut ledger = ctx.open_ledger();

    let outcome = match cmd {
        Commands::PunchIn => punch_in(&mut ledger),
        Commands::PunchOut => punch_out(&mut ledger, &ctx.cfg.currency),
        _ => Ok(()),
    };

    // Punch state conflicts are warnings; everything else propagates.
    match outcome {
        Err(e) if e.is_invalid_state() => {
            warning(&e);
            Ok(())
        }
        other => other,
    }
}

fn punch_in(ledger: &mut TimeLedger) -> AppResult<()> {
    let entry = ledger.punch_in()?;
    success(format!("Punched in at {}", format_time(entry.punch_in)));
    Ok(())
}

fn punch_out(ledger: &mut TimeLedger, currency: &str) -> AppResult<()> {
    let entry = ledger.punch_out()?;

    let out = entry.punch_out.map(format_time).unwrap_or_default();
    let duration = compute_duration(&entry)
        .map(|d| d.to_string())
        .unwrap_or_default();
    let mut msg = format!("Punched out at {}\nDuration: {}", out, duration);

    if ledger.rate() > 0.0 {
        let earned = ledger.earnings(entry_minutes(&entry).unwrap_or(0));
        msg.push_str(&format!(" | {}", format_money(earned, currency)));
    }

    success(msg);
    Ok(())
}
