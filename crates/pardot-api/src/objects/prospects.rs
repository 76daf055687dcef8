use super::names::PROSPECT;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};
use serde_json::Value;

/// Prospects, addressed by Pardot id or email address.
pub struct Prospects<'a> {
    resource: Resource<'a>,
}

impl<'a> Prospects<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, PROSPECT),
        }
    }

    pub async fn query(&mut self, params: Params) -> Result<Option<Value>> {
        self.resource.query_results(params).await
    }

    pub async fn create_by_email(&mut self, email: &str, params: Params) -> Result<Outcome> {
        self.resource.post_by("create", "email", email, params).await
    }

    pub async fn read_by_email(&mut self, email: &str, params: Params) -> Result<Outcome> {
        self.resource.post_by("read", "email", email, params).await
    }

    pub async fn read_by_id(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    pub async fn update_by_id(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.update(id, params).await
    }

    /// Update the prospect with this email, creating it when missing
    pub async fn upsert_by_email(&mut self, email: &str, params: Params) -> Result<Outcome> {
        self.resource.post_by("upsert", "email", email, params).await
    }

    pub async fn delete_by_id(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.delete(id, params).await
    }

    /// Assign the prospect to a user
    pub async fn assign_by_id(&mut self, id: u64, user_id: u64, params: Params) -> Result<Outcome> {
        self.resource
            .post_by("assign", "id", id, params.with("user_id", user_id))
            .await
    }

    pub async fn unassign_by_id(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.post_by("unassign", "id", id, params).await
    }
}
