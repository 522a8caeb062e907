use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::summary::Summary;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::{format_hours, format_money};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Summary { range } = cmd {
        let range = ctx.range(range)?;
        let ledger = ctx.open_ledger();
        let summary = ledger.summarize(&range);

        if summary.entries == 0 {
            info("No time entries found for the selected date range.");
            return Ok(());
        }

        header("Hours Summary");
        if !range.is_unbounded() {
            println!("📅 Period: {}\n", range);
        }
        print_summary(&summary, &ctx.cfg.currency);
    }
    Ok(())
}

fn print_summary(s: &Summary, currency: &str) {
    println!(
        "{} {} hours | 💰 {}",
        bold(&pad_right("Today:", 8)),
        format_hours(s.today_hours()),
        format_money(s.today_earnings, currency)
    );
    println!(
        "{} {} hours | 💰 {}",
        bold(&pad_right("Total:", 8)),
        format_hours(s.total_hours()),
        format_money(s.total_earnings, currency)
    );
    println!("{} {}", bold(&pad_right("Entries:", 8)), s.entries);
}
