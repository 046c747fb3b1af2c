//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one value per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Bold brand-blue heading, or the bare text without color.
pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().blue().to_string()
    } else {
        text.to_owned()
    }
}

/// Dimmed secondary text, or the bare text without color.
pub fn muted(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item detail views
/// don't map onto one `Tabled` row.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Plain => Ok(id_fn(data)),
        structured => render_structured(structured, data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_structured<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| e.to_string()),
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(|e| e.to_string()),
        OutputFormat::Table | OutputFormat::Plain => {
            Err("not a structured format".to_owned())
        }
    };
    rendered.map_err(|message| CliError::Render {
        format: format!("{format:?}").to_lowercase(),
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Item {
        uf: &'static str,
        companies: &'static str,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "UF")]
        uf: String,
    }

    const ITEMS: [Item; 2] = [
        Item { uf: "AC", companies: "148.547" },
        Item { uf: "AL", companies: "607.395" },
    ];

    #[test]
    fn plain_emits_one_value_per_line() {
        let out = render_single(
            OutputFormat::Plain,
            &ITEMS,
            |_| unreachable!(),
            |items| items.iter().map(|i| i.uf).collect::<Vec<_>>().join("\n"),
        )
        .unwrap();
        assert_eq!(out, "AC\nAL");
    }

    #[test]
    fn compact_json_is_single_line() {
        let out = render_single(
            OutputFormat::JsonCompact,
            &ITEMS,
            |_| unreachable!(),
            |_| unreachable!(),
        )
        .unwrap();
        assert_eq!(
            out,
            r#"[{"uf":"AC","companies":"148.547"},{"uf":"AL","companies":"607.395"}]"#
        );
    }

    #[test]
    fn table_uses_rounded_style_and_renamed_headers() {
        let out = render_table(&[Row { uf: "BA".into() }]);
        assert!(out.contains("UF"));
        assert!(out.contains("BA"));
        assert!(out.starts_with('╭'));
    }

    #[test]
    fn colors_are_skipped_when_disabled() {
        assert_eq!(heading("LeadSearch", false), "LeadSearch");
        assert_ne!(heading("LeadSearch", true), "LeadSearch");
        assert_eq!(muted("x", false), "x");
    }
}
