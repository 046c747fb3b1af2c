//! `lookup` handler: one submission through the search controller.

use tabled::Tabled;
use tracing::debug;

use leadsearch_core::catalog::SUBMIT_LABEL_LOADING;
use leadsearch_core::{CompanyRecord, CompanyView, FilterKind, Query, RequestOutcome, SearchController};

use crate::cli::{FilterArg, GlobalOpts, LookupArgs};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<FilterArg> for FilterKind {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Todos => FilterKind::All,
            FilterArg::Cnpj => FilterKind::TaxId,
            FilterArg::Razao => FilterKind::LegalName,
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Campo")]
    label: &'static str,
    #[tabled(rename = "Valor")]
    value: String,
}

/// Legal name as a heading, then the remaining fields as a table.
fn detail(view: &CompanyView, color: bool) -> String {
    let rows: Vec<FieldRow> = view
        .fields()
        .into_iter()
        .skip(1)
        .map(|(label, value)| FieldRow {
            label,
            value: value.to_owned(),
        })
        .collect();
    format!(
        "{}\n{}",
        output::heading(&view.legal_name, color),
        output::render_table(&rows)
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: LookupArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let lookup_config = config::resolve_lookup(global, cfg)?;
    let base_url = lookup_config.base_url_str().to_owned();
    let controller = SearchController::from_config(&lookup_config)?;

    let query = Query::new(args.query, args.filter.into());
    debug!(filter = %query.filter, "submitting search");

    let spinner = util::spinner(SUBMIT_LABEL_LOADING, global.quiet);
    let outcome = controller.submit_query(query).await;
    spinner.finish_and_clear();

    match outcome {
        RequestOutcome::Success(record) => {
            let format = config::output_format(global, cfg);
            let color = output::should_color(config::color_mode(global, cfg));
            let view = CompanyView::from(&record);
            let out = output::render_single(
                format,
                &record,
                |_: &CompanyRecord| detail(&view, color),
                |_: &CompanyRecord| view.tax_id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
        RequestOutcome::Failure(failure) => Err(CliError::from_failure(&failure, &base_url)),
        RequestOutcome::Idle | RequestOutcome::Loading => Err(CliError::LookupFailed {
            message: "search did not settle".into(),
            base_url,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadsearch_core::view::LEGAL_NAME_PLACEHOLDER;

    #[test]
    fn filter_args_map_to_kinds() {
        assert_eq!(FilterKind::from(FilterArg::Todos), FilterKind::All);
        assert_eq!(FilterKind::from(FilterArg::Cnpj), FilterKind::TaxId);
        assert_eq!(FilterKind::from(FilterArg::Razao), FilterKind::LegalName);
    }

    #[test]
    fn detail_heads_with_legal_name() {
        let view = CompanyView::from(&CompanyRecord {
            cnpj: Some("11222333000181".into()),
            ..CompanyRecord::default()
        });
        let out = detail(&view, false);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(LEGAL_NAME_PLACEHOLDER));
        assert!(out.contains("11222333000181"));
        assert!(out.contains("Atividade Principal"));
        assert!(!out.contains("│ Razão Social"));
    }
}
