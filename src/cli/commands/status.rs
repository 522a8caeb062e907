use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::ledger::TimeLedger;
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::time::format_timestamp;
use std::thread;
use std::time::Duration;

/// Handle `status`, optionally refreshing every `interval` seconds.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Status { watch, interval } = cmd {
        if !*watch {
            println!("{}", render(&ctx.open_ledger()));
            return Ok(());
        }

        // Re-read the store on each tick; the display never writes.
        loop {
            println!("{}\n", render(&ctx.open_ledger()));
            thread::sleep(Duration::from_secs(*interval));
        }
    }

    Ok(())
}

pub fn render(ledger: &TimeLedger) -> String {
    match (ledger.current(), ledger.current_duration()) {
        (Some(open), Some(running)) => format!(
            "{GREEN}🟢 Currently clocked in{RESET}\nStarted: {}\nDuration: {}",
            format_timestamp(open.punch_in),
            running
        ),
        _ => format!("{GREY}Ready to start tracking time{RESET}"),
    }
}
