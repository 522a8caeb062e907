use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::{compute_duration, entry_minutes};
use crate::core::ledger::TimeLedger;
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_minutes, colorize_in_out};
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let range = ctx.range(range)?;
        let ledger = ctx.open_ledger();
        print_entries(&ledger, &range, &ctx.cfg.currency);
    }
    Ok(())
}

fn print_entries(ledger: &TimeLedger, range: &DateRange, currency: &str) {
    let selected = ledger.filter_by_date_range(range);

    if selected.is_empty() {
        info("No time entries found for the selected date range.");
        return;
    }

    header("Time Entries");
    if !range.is_unbounded() {
        println!("📅 Showing entries {}\n", range);
    }

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Date", 10),
        Column::new("In", 8),
        Column::new("Out", 8),
        Column::new("Duration", 9),
        Column::new("Earned", 10),
    ]);

    for (idx, entry) in selected {
        let minutes = entry_minutes(entry).unwrap_or(0);
        let duration = compute_duration(entry)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());

        table.add_row(vec![
            (idx + 1).to_string(),
            entry.date_str(),
            colorize_in_out(&entry.punch_in_str(), true),
            colorize_in_out(&entry.punch_out_str(), false),
            format!("{}{}{}", color_for_minutes(minutes), duration, RESET),
            format_money(ledger.earnings(minutes), currency),
        ]);
    }

    print!("{}", table.render());
}
