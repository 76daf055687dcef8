use super::names::OPPORTUNITY;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

pub struct Opportunities<'a> {
    resource: Resource<'a>,
}

impl<'a> Opportunities<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, OPPORTUNITY),
        }
    }

    pub async fn query(&mut self, params: Params) -> Result<Option<Value>> {
        self.resource.query_results(params).await
    }

    /// Create an opportunity linked to the prospect with this email.
    /// `probability` is a percentage between 0 and 100.
    pub async fn create_by_email(
        &mut self,
        prospect_email: &str,
        name: &str,
        value: f64,
        probability: u8,
        params: Params,
    ) -> Result<Outcome> {
        let params = params
            .with("name", name)
            .with("value", value)
            .with("probability", probability);
        self.resource
            .post_by("create", "prospect_email", prospect_email, params)
            .await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    pub async fn update(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.update(id, params).await
    }

    pub async fn delete(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.delete(id, params).await
    }

    pub async fn undelete(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.post_by("undelete", "id", id, params).await
    }
}
