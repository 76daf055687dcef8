use super::names::EMAIL;
use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::resource::Resource;
use pardot_core::{Outcome, Params};

pub struct Emails<'a> {
    resource: Resource<'a>,
}

impl<'a> Emails<'a> {
    pub fn new(client: &'a mut PardotApiClient) -> Self {
        Self {
            resource: Resource::new(client, EMAIL),
        }
    }

    pub async fn read(&mut self, id: u64, params: Params) -> Result<Outcome> {
        self.resource.read(id, params).await
    }

    /// Send a one-to-one email to a prospect as part of a campaign
    pub async fn send_to_prospect(
        &mut self,
        prospect_id: u64,
        campaign_id: u64,
        params: Params,
    ) -> Result<Outcome> {
        let params = params.with("campaign_id", campaign_id);
        self.resource
            .post_by("send", "prospect_id", prospect_id, params)
            .await
    }

    /// Send a list email. Lists are passed as indexed `list_ids[n]` fields.
    pub async fn send_to_list(
        &mut self,
        list_ids: &[u64],
        campaign_id: u64,
        params: Params,
    ) -> Result<Outcome> {
        let mut params = params.with("campaign_id", campaign_id);
        for (index, list_id) in list_ids.iter().enumerate() {
            params.insert(format!("list_ids[{}]", index), list_id);
        }
        self.resource.post_action("send", params).await
    }
}
