use super::names::CAMPAIGN;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

pub struct Campaigns<'a> {
    resource: Resource<'a>,
}

impl<'a> Campaigns<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, CAMPAIGN),
        }
    }

    pub async fn query(&mut self, params: Params) -> Result<Option<Value>> {
        self.resource.query_results(params).await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    pub async fn update(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.update(id, params).await
    }

    pub async fn create(&mut self, name: &str, params: Params) -> Result<Outcome> {
        self.resource.create(params.with("name", name)).await
    }
}
