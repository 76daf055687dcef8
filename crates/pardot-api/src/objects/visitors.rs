use super::id_list;
use super::names::VISITOR;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

pub struct Visitors<'a> {
    resource: Resource<'a>,
}

impl<'a> Visitors<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, VISITOR),
        }
    }

    pub async fn query_by_ids(&mut self, ids: &str, params: Params) -> Result<Option<Value>> {
        let params = params.with("ids", id_list(ids)?);
        self.resource.query_results(params).await
    }

    pub async fn query_by_prospect_ids(
        &mut self,
        prospect_ids: &str,
        params: Params,
    ) -> Result<Option<Value>> {
        let params = params.with("prospect_ids", id_list(prospect_ids)?);
        self.resource.query_results(params).await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    /// Link an anonymous visitor to a prospect
    pub async fn assign(&mut self, id: u64, prospect_id: u64, params: Params) -> Result<Outcome> {
        self.resource
            .post_by("assign", "id", id, params.with("prospect_id", prospect_id))
            .await
    }
}
