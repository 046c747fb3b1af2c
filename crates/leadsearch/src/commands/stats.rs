//! `stats` handler: landing-page totals by state.

use tabled::Tabled;

use leadsearch_core::catalog::{self, StateCount, TOTAL_CAPTION};

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "UF")]
    uf: &'static str,
    #[tabled(rename = "Empresas")]
    companies: &'static str,
}

impl From<&StateCount> for StateRow {
    fn from(s: &StateCount) -> Self {
        Self {
            uf: s.uf,
            companies: s.companies,
        }
    }
}

pub fn handle(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let format = config::output_format(global, cfg);
    let color = output::should_color(config::color_mode(global, cfg));
    let stats = catalog::stats();

    let out = output::render_single(
        format,
        &stats,
        |s| {
            let rows: Vec<StateRow> = s.states.iter().map(StateRow::from).collect();
            format!(
                "{} {}\n\n{}\n{}",
                output::heading(s.total, color),
                TOTAL_CAPTION,
                output::muted(catalog::STATES_TITLE, color),
                output::render_table(&rows)
            )
        },
        |s| {
            s.states
                .iter()
                .map(|c| format!("{}\t{}", c.uf, c.companies))
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
