// Wire models for the CNPJ lookup endpoint.
//
// Only the fields LeadSearch renders are modelled; everything else in the
// registry payload is ignored. Every field may be missing or null.

use serde::{Deserialize, Serialize};

/// A company record as returned by `GET /cnpj/{digits}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default)]
    pub razao_social: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    /// Principal economic activities; only the first entry is displayed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub atividade_principal: Vec<Activity>,
}

/// One entry of the `atividade_principal` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl CompanyRecord {
    /// Description of the first principal activity, if any.
    pub fn principal_activity(&self) -> Option<&str> {
        self.atividade_principal
            .first()
            .and_then(|a| a.text.as_deref())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Activity>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Activity>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_payload_and_ignores_extra_fields() {
        let body = json!({
            "razao_social": "ACME COMERCIO LTDA",
            "cnpj": "11222333000181",
            "logradouro": "RUA DAS FLORES",
            "numero": "100",
            "municipio": "SAO PAULO",
            "uf": "SP",
            "atividade_principal": [
                { "code": "47.11-3-02", "text": "Comércio varejista de mercadorias em geral" },
                { "code": "00.00-0-00", "text": "ignored" }
            ],
            "capital_social": "1000.00",
            "socios": []
        });

        let record: CompanyRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.razao_social.as_deref(), Some("ACME COMERCIO LTDA"));
        assert_eq!(record.uf.as_deref(), Some("SP"));
        assert_eq!(
            record.principal_activity(),
            Some("Comércio varejista de mercadorias em geral")
        );
    }

    #[test]
    fn missing_and_null_fields_are_none() {
        let record: CompanyRecord =
            serde_json::from_value(json!({ "cnpj": null, "atividade_principal": null })).unwrap();
        assert_eq!(record, CompanyRecord::default());
        assert_eq!(record.principal_activity(), None);
    }

    #[test]
    fn empty_activity_list_has_no_principal_activity() {
        let record: CompanyRecord =
            serde_json::from_value(json!({ "atividade_principal": [] })).unwrap();
        assert_eq!(record.principal_activity(), None);
    }
}
