use std::future::Future;

use leadsearch_api::{CnpjClient, CompanyRecord};

use crate::model::TaxId;

/// Resolves a validated CNPJ to a company record.
///
/// The controller only sees this trait, so it can be driven by the real
/// HTTP client or by a scripted fake in tests.
pub trait CompanyLookup: Send + Sync {
    fn lookup(
        &self,
        tax_id: &TaxId,
    ) -> impl Future<Output = Result<CompanyRecord, leadsearch_api::Error>> + Send;
}

impl CompanyLookup for CnpjClient {
    async fn lookup(&self, tax_id: &TaxId) -> Result<CompanyRecord, leadsearch_api::Error> {
        self.company(tax_id.as_str()).await
    }
}
