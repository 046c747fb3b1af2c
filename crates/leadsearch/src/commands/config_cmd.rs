//! Config subcommand handlers.

use dialoguer::{Input, Select};

use leadsearch_core::LookupConfig;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const OUTPUT_CHOICES: [&str; 5] = ["table", "json", "json-compact", "yaml", "plain"];

/// Config as TOML, the way it would be written to disk.
fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# cannot render config: {e}"))
}

fn save(cfg: &Config) -> Result<std::path::PathBuf, CliError> {
    Ok(leadsearch_config::save_config(cfg)?)
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("LeadSearch CLI: configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = config::load_config_or_default();

            // 1. Registry URL
            let current = LookupConfig::default().base_url_str().to_owned();
            let base_url: String = Input::new()
                .with_prompt("Registry base URL")
                .default(cfg.api.base_url.clone().unwrap_or_else(|| current.clone()))
                .validate_with(|input: &String| {
                    Config::default()
                        .set("api.base_url", input)
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;
            cfg.set(
                "api.base_url",
                if base_url == current { "" } else { &base_url },
            )?;

            // 2. Output format
            let default_idx = OUTPUT_CHOICES
                .iter()
                .position(|o| *o == cfg.defaults.output)
                .unwrap_or(0);
            let selection = Select::new()
                .with_prompt("Default output format")
                .items(&OUTPUT_CHOICES)
                .default(default_idx)
                .interact()
                .map_err(prompt_err)?;
            let output = OUTPUT_CHOICES.get(selection).copied().unwrap_or("table");
            cfg.set("defaults.output", output)?;

            // 3. Timeout
            let timeout: String = Input::new()
                .with_prompt("Request timeout in seconds (empty for none)")
                .allow_empty(true)
                .default(cfg.defaults.timeout.map(|t| t.to_string()).unwrap_or_default())
                .interact_text()
                .map_err(prompt_err)?;
            cfg.set("defaults.timeout", timeout.trim())?;

            let path = save(&cfg)?;
            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("\n  Test it: leadsearch lookup 11.222.333/0001-81");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let format = config::output_format(global, &cfg);
            let out = output::render_single(format, &cfg, format_config, |_| {
                config::config_path().display().to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            cfg.set(&key, &value)?;
            let path = save(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Set {key} in {}", path.display());
            }
            Ok(())
        }
    }
}
