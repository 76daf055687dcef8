use super::names::USER;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

pub struct Users<'a> {
    resource: Resource<'a>,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, USER),
        }
    }

    pub async fn query(&mut self, params: Params) -> Result<Option<Value>> {
        self.resource.query_results(params).await
    }

    pub async fn read_by_id(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    pub async fn read_by_email(&mut self, email: &str, params: Params) -> Result<Outcome> {
        self.resource.post_by("read", "email", email, params).await
    }
}
