use crate::client::PardotApiClient;
use crate::errors::Result;
use crate::objects::{
    Accounts, Campaigns, Emails, Lists, Opportunities, Prospects, Users, VisitorActivities,
    Visitors, Visits,
};
use crate::resource::Resource;
use pardot_core::Credentials;

/// Main SDK struct for Pardot
///
/// ```no_run
/// # async fn demo() -> pardot_api::Result<()> {
/// use pardot_api::{Credentials, Pardot, Params};
///
/// let mut pardot = Pardot::new(Credentials::new("me@example.com", "secret", "user-key"))?;
/// let _prospect = pardot.prospects().read_by_id(5, Params::new()).await?;
/// # Ok(())
/// # }
/// ```
pub struct Pardot {
    api_client: PardotApiClient,
}

impl Pardot {
    /// Create new Pardot instance against the production host
    pub fn new(credentials: Credentials) -> Result<Self> {
        let api_client = PardotApiClient::new(credentials, None)?;
        Ok(Self { api_client })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_client(PardotApiClient::from_env()?))
    }

    pub fn from_client(api_client: PardotApiClient) -> Self {
        Self { api_client }
    }

    /// The underlying client, for raw `get`/`post` calls
    pub fn client(&mut self) -> &mut PardotApiClient {
        &mut self.api_client
    }

    pub fn into_client(self) -> PardotApiClient {
        self.api_client
    }

    /// Log in eagerly instead of on the first request
    pub async fn authenticate(&mut self) -> Result<bool> {
        self.api_client.authenticate().await
    }

    /// Generic binding for objects without a typed wrapper
    pub fn resource(&mut self, object_name: &'static str) -> Resource<'_> {
        Resource::new(&mut self.api_client, object_name)
    }

    pub fn accounts(&mut self) -> Accounts<'_> {
        Accounts::new(&mut self.api_client)
    }

    pub fn campaigns(&mut self) -> Campaigns<'_> {
        Campaigns::new(&mut self.api_client)
    }

    pub fn emails(&mut self) -> Emails<'_> {
        Emails::new(&mut self.api_client)
    }

    pub fn lists(&mut self) -> Lists<'_> {
        Lists::new(&mut self.api_client)
    }

    pub fn opportunities(&mut self) -> Opportunities<'_> {
        Opportunities::new(&mut self.api_client)
    }

    pub fn prospects(&mut self) -> Prospects<'_> {
        Prospects::new(&mut self.api_client)
    }

    pub fn users(&mut self) -> Users<'_> {
        Users::new(&mut self.api_client)
    }

    pub fn visitor_activities(&mut self) -> VisitorActivities<'_> {
        VisitorActivities::new(&mut self.api_client)
    }

    pub fn visitors(&mut self) -> Visitors<'_> {
        Visitors::new(&mut self.api_client)
    }

    pub fn visits(&mut self) -> Visits<'_> {
        Visits::new(&mut self.api_client)
    }
}
