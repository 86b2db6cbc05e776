use crate::Context;
use crate::cli::parser::Commands;
use crate::config::check as config_check;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;

        if !(*print_config || *check || *migrate || *edit_config) {
            info(format!("Config file: {}", path.display()));
            info("Use --print, --check, --migrate or --edit.");
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            header(format!("Configuration ({})", path.display()));
            print!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        // ---- CHECK ----
        if *check {
            let report = config_check::check(path)?;
            if report.is_clean() {
                success("Configuration file is up to date.");
            }
            for key in &report.missing {
                warning(format!("Missing key: {key} (run `config --migrate`)"));
            }
            for key in &report.unknown {
                warning(format!("Unknown key: {key}"));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let added = config_check::migrate(path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added missing keys: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
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
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{default_editor}'"
                    ));
                }
            }
        }
    }
}
