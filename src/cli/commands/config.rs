use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
        set_rate,
        set_currency,
    } = cmd
    {
        let path = &ctx.config_path;
        let mut shown = ctx.cfg.clone();

        // ---- SET VALUES ----
        if set_rate.is_some() || set_currency.is_some() {
            let mut stored = Config::read(path)?;
            if let Some(rate) = set_rate {
                stored.pay_rate = *rate;
            }
            if let Some(symbol) = set_currency {
                stored.currency = symbol.clone();
            }

            shown.pay_rate = stored.pay_rate;
            shown.currency = stored.currency.clone();

            if ctx.test {
                warning("Test mode: configuration not written.");
            } else {
                stored.save(path)?;
                success(format!(
                    "Configuration saved: rate {} {}",
                    stored.currency, stored.pay_rate
                ));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `punchclock init`.",
                    path.display()
                ));
            } else {
                if let Err(e) = Config::load(path) {
                    error(format!("Invalid configuration: {e}"));
                }
                // an unparsable file was reported just above
                match missing_fields(path) {
                    Ok(missing) if missing.is_empty() => {
                        success("Configuration file is complete.")
                    }
                    Ok(missing) => warning(format!(
                        "Missing fields (defaults in use): {}",
                        missing.join(", ")
                    )),
                    Err(_) => {}
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor.clone());
        }
    }

    Ok(())
}

fn edit_file(path: &std::path::Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{}'", editor_to_use));
            return;
        }
        _ => warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => info(format!(
            "Configuration file edited using fallback '{}'",
            default_editor
        )),
        _ => error(format!(
            "Failed to edit configuration file using fallback '{}'",
            default_editor
        )),
    }
}
