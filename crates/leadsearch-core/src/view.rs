// ── Result card mapping ──
//
// Turns a raw `CompanyRecord` into the four lines the result card shows.
// An empty string counts as absent, same as a missing or null field.

use serde::Serialize;

use leadsearch_api::CompanyRecord;

pub const LEGAL_NAME_PLACEHOLDER: &str = "Razão Social não disponível";
pub const TAX_ID_PLACEHOLDER: &str = "CNPJ não disponível";
pub const ACTIVITY_PLACEHOLDER: &str = "Atividade Principal não disponível";

/// Display-ready view of a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    pub legal_name: String,
    pub tax_id: String,
    pub address: String,
    pub principal_activity: String,
}

impl From<&CompanyRecord> for CompanyView {
    fn from(r: &CompanyRecord) -> Self {
        Self {
            legal_name: or_placeholder(r.razao_social.as_deref(), LEGAL_NAME_PLACEHOLDER),
            tax_id: or_placeholder(r.cnpj.as_deref(), TAX_ID_PLACEHOLDER),
            address: format!(
                "{}, {}, {} - {}",
                part(r.logradouro.as_deref()),
                part(r.numero.as_deref()),
                part(r.municipio.as_deref()),
                part(r.uf.as_deref()),
            ),
            principal_activity: or_placeholder(r.principal_activity(), ACTIVITY_PLACEHOLDER),
        }
    }
}

impl CompanyView {
    /// `(label, value)` pairs in card order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Razão Social", &self.legal_name),
            ("CNPJ", &self.tax_id),
            ("Endereço", &self.address),
            ("Atividade Principal", &self.principal_activity),
        ]
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}

fn part(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadsearch_api::Activity;

    fn full() -> CompanyRecord {
        CompanyRecord {
            razao_social: Some("ACME COMERCIO LTDA".into()),
            cnpj: Some("11222333000181".into()),
            logradouro: Some("RUA DAS FLORES".into()),
            numero: Some("100".into()),
            municipio: Some("SAO PAULO".into()),
            uf: Some("SP".into()),
            atividade_principal: vec![Activity {
                text: Some("Comércio varejista".into()),
                code: None,
            }],
        }
    }

    #[test]
    fn full_record_renders_verbatim() {
        let view = CompanyView::from(&full());
        assert_eq!(view.legal_name, "ACME COMERCIO LTDA");
        assert_eq!(view.tax_id, "11222333000181");
        assert_eq!(view.address, "RUA DAS FLORES, 100, SAO PAULO - SP");
        assert_eq!(view.principal_activity, "Comércio varejista");
    }

    #[test]
    fn missing_legal_name_uses_placeholder_only_there() {
        let record = CompanyRecord {
            razao_social: None,
            ..full()
        };
        let view = CompanyView::from(&record);
        assert_eq!(view.legal_name, LEGAL_NAME_PLACEHOLDER);
        assert_eq!(view.tax_id, "11222333000181");
        assert_eq!(view.principal_activity, "Comércio varejista");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let record = CompanyRecord {
            razao_social: Some(String::new()),
            cnpj: Some(String::new()),
            ..full()
        };
        let view = CompanyView::from(&record);
        assert_eq!(view.legal_name, LEGAL_NAME_PLACEHOLDER);
        assert_eq!(view.tax_id, TAX_ID_PLACEHOLDER);
    }

    #[test]
    fn empty_record_renders_placeholders_and_bare_separators() {
        let view = CompanyView::from(&CompanyRecord::default());
        assert_eq!(view.legal_name, LEGAL_NAME_PLACEHOLDER);
        assert_eq!(view.tax_id, TAX_ID_PLACEHOLDER);
        assert_eq!(view.address, ", ,  - ");
        assert_eq!(view.principal_activity, ACTIVITY_PLACEHOLDER);
    }

    #[test]
    fn activity_without_text_uses_placeholder() {
        let record = CompanyRecord {
            atividade_principal: vec![Activity::default()],
            ..full()
        };
        assert_eq!(
            CompanyView::from(&record).principal_activity,
            ACTIVITY_PLACEHOLDER
        );
    }

    #[test]
    fn fields_follow_card_order() {
        let view = CompanyView::from(&full());
        let labels: Vec<&str> = view.fields().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Razão Social", "CNPJ", "Endereço", "Atividade Principal"]);
    }
}
