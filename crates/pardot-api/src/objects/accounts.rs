use super::names::ACCOUNT;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};

/// Prospect accounts.
/// Field reference: http://developer.pardot.com/kb/api-version-3/object-field-references#prospectAccount
pub struct Accounts<'a> {
    resource: Resource<'a>,
}

impl<'a> Accounts<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, ACCOUNT),
        }
    }

    /// Prospect accounts matching the given search criteria
    pub async fn query(&mut self, params: Params) -> Result<Outcome> {
        self.resource.query(params).await
    }

    pub async fn create(&mut self, params: Params) -> Result<Outcome> {
        self.resource.get_action("create", params).await
    }

    /// Field metadata: available fields, their types and options
    pub async fn describe(&mut self, params: Params) -> Result<Outcome> {
        self.resource.describe(params).await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params.with("id", id)).await
    }

    pub async fn update(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.update(id, params.with("id", id)).await
    }
}
