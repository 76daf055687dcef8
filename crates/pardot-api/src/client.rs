use crate::errors::{ApiError, HttpError, Result};
use log::{debug, error, info, trace, warn};
use pardot_core::{classify, ApiKey, Credentials, Method, Outcome, Params, Request, LOGIN_OBJECT};
use pardot_utils::{authorization_header, mask_secret};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use url::Url;

/// Production Pardot host
pub const DEFAULT_BASE_URL: &str = "https://pi.pardot.com";

/// API version used when none is configured
pub const DEFAULT_API_VERSION: u32 = 3;

/// Trait for providing configuration to the API client
/// This allows the main application to implement config without circular dependencies
pub trait ApiConfig {
    type Error;

    /// Get the account credentials used to log in
    fn get_credentials(&self) -> std::result::Result<Credentials, Self::Error>;

    /// Get the base URL for the API (optional, defaults to the production host)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }

    /// Get the API version (optional, defaults to [`DEFAULT_API_VERSION`])
    fn get_api_version(&self) -> std::result::Result<Option<u32>, Self::Error> {
        Ok(None)
    }
}

/// Authenticated HTTP client for the Pardot API.
///
/// The client owns the API key. It logs in on demand before the first
/// request, and when the server reports the key as invalid it logs in again
/// and replays the request exactly once.
///
/// Every method that can change the key takes `&mut self`, so a client is
/// driven by a single owner at a time.
#[derive(Debug, Clone)]
pub struct PardotApiClient {
    client: Client,
    credentials: Credentials,
    api_key: ApiKey,
    base_url: String,
    version: u32,
}

impl PardotApiClient {
    /// Create a new API client
    pub fn new(credentials: Credentials, base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| HttpError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        let base_url = base_url.trim_end_matches('/').to_string();

        debug!("Creating PardotApiClient");
        debug!("  Email: {}", credentials.email());
        debug!("  User key: {}", mask_secret(credentials.user_key()));
        debug!("  Base URL: {}", base_url);

        Ok(Self {
            client: Client::new(),
            credentials,
            api_key: ApiKey::Absent,
            base_url,
            version: DEFAULT_API_VERSION,
        })
    }

    /// Create API client from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Creating PardotApiClient from environment variables");
        let credentials = Credentials::new(
            require_env("PARDOT_EMAIL")?,
            require_env("PARDOT_PASSWORD")?,
            require_env("PARDOT_USER_KEY")?,
        );
        let base_url = std::env::var("PARDOT_BASE_URL").ok();

        Self::new(credentials, base_url)
    }

    /// Create API client with custom base URL
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        debug!("Creating PardotApiClient with custom base URL: {}", base_url);
        Self::new(credentials, Some(base_url))
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
        C::Error: From<ApiError>,
    {
        debug!("Creating PardotApiClient from config");
        let credentials = config.get_credentials()?;
        let base_url = config.get_base_url()?;

        if let Some(ref url) = base_url {
            debug!("Got custom base URL from config: {}", url);
        } else {
            debug!("Using default base URL");
        }

        let mut client = Self::new(credentials, base_url)?;
        if let Some(version) = config.get_api_version()? {
            client = client.with_version(version);
        }

        Ok(client)
    }

    /// Use a different API version
    pub fn with_version(mut self, version: u32) -> Self {
        debug!("Using API version {}", version);
        self.version = version;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether an API key is currently held
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_present()
    }

    /// Log in and store the returned API key.
    ///
    /// Returns `Ok(false)` when Pardot rejects the login or answers without a
    /// key; the key is absent afterwards. Transport failures are returned as
    /// errors.
    pub async fn authenticate(&mut self) -> Result<bool> {
        debug!("Authenticating as {}", self.credentials.email());
        self.api_key.clear();

        let request = Request::login(&self.credentials);
        let outcome = match self.dispatch(&request).await {
            Ok(outcome) => outcome,
            Err(ApiError::Pardot(err)) => {
                warn!("Authentication rejected: {}", err);
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let api_key = outcome
            .as_json()
            .and_then(|body| body.get("api_key"))
            .and_then(|key| key.as_str())
            .filter(|key| !key.is_empty());

        match api_key {
            Some(key) => {
                self.api_key.store(key)?;
                info!("Authenticated, API key {}", mask_secret(key));
                Ok(true)
            }
            None => {
                warn!("Login response did not contain an API key");
                Ok(false)
            }
        }
    }

    /// Log in unless a key is held or the call is the login itself.
    pub async fn ensure_authenticated(&mut self, object_name: &str) -> Result<()> {
        if object_name == LOGIN_OBJECT || self.api_key.is_present() {
            return Ok(());
        }

        if !self.authenticate().await? {
            warn!("No API key available, sending {} request unauthenticated", object_name);
        }
        Ok(())
    }

    /// Make a GET request
    pub async fn get(
        &mut self,
        object_name: &str,
        path: Option<&str>,
        params: Params,
    ) -> Result<Outcome> {
        self.send(Request::get(object_name, path, params), 0).await
    }

    /// Make a POST request
    pub async fn post(
        &mut self,
        object_name: &str,
        path: Option<&str>,
        params: Params,
        data: Option<Params>,
    ) -> Result<Outcome> {
        self.send(Request::post(object_name, path, params, data), 0)
            .await
    }

    /// Send a request, recovering once from an expired API key.
    ///
    /// `retry_count` is the number of re-authentications already spent on
    /// this request; only a request at zero is replayed.
    pub async fn send(&mut self, request: Request, retry_count: u32) -> Result<Outcome> {
        let mut retry_count = retry_count;

        loop {
            self.ensure_authenticated(&request.object_name).await?;

            let err = match self.dispatch(&request).await {
                Err(ApiError::Pardot(err)) if err.is_invalid_credentials() && !request.is_login() => {
                    err
                }
                other => return other,
            };

            if retry_count != 0 {
                error!(
                    "API key rejected again for {} after re-authentication",
                    request.object_name
                );
                return Err(err.into());
            }

            warn!("API key rejected for {}, re-authenticating", request.object_name);
            self.api_key.clear();
            if !self.authenticate().await? {
                return Err(err.into());
            }
            retry_count += 1;
        }
    }

    /// Issue one HTTP request and classify the response. No retries.
    async fn dispatch(&self, request: &Request) -> Result<Outcome> {
        let url = request.url(&self.base_url, self.version);
        debug!("HTTP {} request to: {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        builder = builder.query(&request.query());

        if let Some(key) = self.api_key.get() {
            trace!("Request headers:");
            trace!(
                "  Authorization: Pardot api_key={}, user_key={}",
                mask_secret(key),
                mask_secret(self.credentials.user_key())
            );
            builder = builder.header(
                AUTHORIZATION,
                authorization_header(key, self.credentials.user_key()),
            );
        }

        if let Some(data) = &request.data {
            trace!("Request body fields: {:?}", data.iter().map(|(k, _)| k).collect::<Vec<_>>());
            builder = builder.form(data);
        }

        let response = builder.send().await.map_err(|e| {
            error!("{} request failed: {:?}", request.method, e);
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Turn an HTTP response into an outcome or a Pardot error
    async fn handle_response(&self, response: Response) -> Result<Outcome> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(HttpError::Request)?;
        trace!("Response body: {} bytes", body.len());

        classify(content_type.as_deref(), status, &body).map_err(|e| {
            let err = ApiError::from(e);
            debug!("Response classified as error: {}", err);
            err
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| {
        error!("{} environment variable not set", name);
        ApiError::Config(format!("{} environment variable not set", name))
    })
}
