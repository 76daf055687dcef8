use super::id_list;
use super::names::VISIT;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

/// Visits.
/// Field reference: http://developer.pardot.com/kb/api-version-3/object-field-references/#visit
///
/// Id lists are comma separated integers; whitespace is stripped before
/// sending.
pub struct Visits<'a> {
    resource: Resource<'a>,
}

impl<'a> Visits<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, VISIT),
        }
    }

    pub async fn query_by_ids(&mut self, ids: &str, params: Params) -> Result<Option<Value>> {
        self.query_by("ids", ids, params).await
    }

    pub async fn query_by_visitor_ids(
        &mut self,
        visitor_ids: &str,
        params: Params,
    ) -> Result<Option<Value>> {
        self.query_by("visitor_ids", visitor_ids, params).await
    }

    pub async fn query_by_prospect_ids(
        &mut self,
        prospect_ids: &str,
        params: Params,
    ) -> Result<Option<Value>> {
        self.query_by("prospect_ids", prospect_ids, params).await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    async fn query_by(&mut self, field: &str, ids: &str, params: Params) -> Result<Option<Value>> {
        let params = params.with(field, id_list(ids)?);
        self.resource.query_results(params).await
    }
}
