use crate::client::PardotApiClient;
use crate::errors::Result;
use pardot_core::{Outcome, Params};
use std::fmt::Display;

/// Binds a client to one Pardot object so the shared verbs need only their
/// parameters.
///
/// Paths follow Pardot's `/do/<action>` and `/do/<action>/<field>/<value>`
/// layout, e.g. `/do/read/id/42` or `/do/read/email/jane@example.com`.
pub struct Resource<'a> {
    client: &'a mut PardotApiClient,
    object_name: &'static str,
}

impl<'a> Resource<'a> {
    pub fn new(client: &'a mut PardotApiClient, object_name: &'static str) -> Self {
        Self {
            client,
            object_name,
        }
    }

    pub fn object_name(&self) -> &'static str {
        self.object_name
    }

    /// GET with a raw path suffix
    pub async fn get(&mut self, path: Option<&str>, params: Params) -> Result<Outcome> {
        self.client.get(self.object_name, path, params).await
    }

    /// POST with a raw path suffix and no body
    pub async fn post(&mut self, path: Option<&str>, params: Params) -> Result<Outcome> {
        self.client.post(self.object_name, path, params, None).await
    }

    /// GET `/do/<action>`
    pub async fn get_action(&mut self, action: &str, params: Params) -> Result<Outcome> {
        self.get(Some(&action_path(action)), params).await
    }

    /// POST `/do/<action>`
    pub async fn post_action(&mut self, action: &str, params: Params) -> Result<Outcome> {
        self.post(Some(&action_path(action)), params).await
    }

    /// GET `/do/<action>/<field>/<value>`
    pub async fn get_by(
        &mut self,
        action: &str,
        field: &str,
        value: impl Display,
        params: Params,
    ) -> Result<Outcome> {
        self.get(Some(&keyed_path(action, field, value)), params)
            .await
    }

    /// POST `/do/<action>/<field>/<value>`
    pub async fn post_by(
        &mut self,
        action: &str,
        field: &str,
        value: impl Display,
        params: Params,
    ) -> Result<Outcome> {
        self.post(Some(&keyed_path(action, field, value)), params)
            .await
    }

    pub async fn query(&mut self, params: Params) -> Result<Outcome> {
        self.get_action("query", params).await
    }

    pub async fn describe(&mut self, params: Params) -> Result<Outcome> {
        self.get_action("describe", params).await
    }

    pub async fn create(&mut self, params: Params) -> Result<Outcome> {
        self.post_action("create", params).await
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.post_by("read", "id", id, params).await
    }

    pub async fn update(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.post_by("update", "id", id, params).await
    }

    pub async fn delete(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.post_by("delete", "id", id, params).await
    }

    /// Query and unwrap the `result` envelope
    pub async fn query_results(&mut self, params: Params) -> Result<Option<serde_json::Value>> {
        Ok(self.query(params).await?.into_result())
    }
}

fn action_path(action: &str) -> String {
    format!("/do/{}", action)
}

fn keyed_path(action: &str, field: &str, value: impl Display) -> String {
    format!("/do/{}/{}/{}", action, field, value)
}
