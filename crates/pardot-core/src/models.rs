use crate::errors::{CoreError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Object name of the login operation. Requests to it never require a key.
pub const LOGIN_OBJECT: &str = "login";

/// Long-lived account credentials used to obtain API keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
    user_key: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            user_key: user_key.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// Form body for the login call
    pub fn login_form(&self) -> Params {
        Params::new()
            .with("email", &self.email)
            .with("password", &self.password)
            .with("user_key", &self.user_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .field("user_key", &self.user_key)
            .finish()
    }
}

/// The short-lived API key held by a client.
///
/// A key can only be stored into an absent cell. Replacing a key means
/// clearing it first, so at most one key is ever current.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum ApiKey {
    #[default]
    Absent,
    Present(String),
}

impl ApiKey {
    pub fn is_present(&self) -> bool {
        matches!(self, ApiKey::Present(_))
    }

    pub fn get(&self) -> Option<&str> {
        match self {
            ApiKey::Present(key) => Some(key),
            ApiKey::Absent => None,
        }
    }

    /// Move from absent to present.
    pub fn store(&mut self, key: impl Into<String>) -> Result<()> {
        if self.is_present() {
            return Err(CoreError::KeyAlreadyPresent);
        }
        let key = key.into();
        if key.is_empty() {
            return Err(CoreError::InvalidInput("API key must not be empty".to_string()));
        }
        *self = ApiKey::Present(key);
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = ApiKey::Absent;
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Absent => write!(f, "Absent"),
            ApiKey::Present(_) => write!(f, "Present(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Query or form parameters, kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add the `format=json` entry every request carries.
    pub fn with_json_format(mut self) -> Self {
        self.insert("format", "json");
        self
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Description of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub object_name: String,
    pub path: Option<String>,
    pub params: Params,
    pub data: Option<Params>,
}

impl Request {
    pub fn get(object_name: impl Into<String>, path: Option<&str>, params: Params) -> Self {
        Self {
            method: Method::Get,
            object_name: object_name.into(),
            path: path.map(str::to_string),
            params,
            data: None,
        }
    }

    pub fn post(
        object_name: impl Into<String>,
        path: Option<&str>,
        params: Params,
        data: Option<Params>,
    ) -> Self {
        Self {
            method: Method::Post,
            object_name: object_name.into(),
            path: path.map(str::to_string),
            params,
            data,
        }
    }

    /// Login request carrying the credentials as its form body
    pub fn login(credentials: &Credentials) -> Self {
        Self::post(LOGIN_OBJECT, None, Params::new(), Some(credentials.login_form()))
    }

    pub fn is_login(&self) -> bool {
        self.object_name == LOGIN_OBJECT
    }

    /// `<base>/api/<object>/version/<version><path>`, joined verbatim.
    pub fn url(&self, base_url: &str, version: u32) -> String {
        let full = format!("{}/api/{}/version/{}", base_url, self.object_name, version);
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", full, path),
            _ => full,
        }
    }

    /// Parameters as sent on the wire, with `format=json` applied.
    pub fn query(&self) -> Params {
        self.params.clone().with_json_format()
    }
}

/// What a successful call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Decoded JSON body
    Json(Value),
    /// Status code of a response that carried no JSON
    Status(u16),
}

impl Outcome {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Outcome::Json(value) => Some(value),
            Outcome::Status(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Outcome::Json(value) => Some(value),
            Outcome::Status(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Status(code) => Some(*code),
            Outcome::Json(_) => None,
        }
    }

    /// Unwrap the `result` envelope list queries return.
    pub fn into_result(self) -> Option<Value> {
        match self {
            Outcome::Json(Value::Object(mut map)) => map.remove("result"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_key_lifecycle() {
        let mut key = ApiKey::default();
        assert!(!key.is_present());
        assert_eq!(key.get(), None);

        key.store("abc123").unwrap();
        assert_eq!(key.get(), Some("abc123"));

        // present -> present is not allowed
        assert!(matches!(key.store("def456"), Err(CoreError::KeyAlreadyPresent)));
        assert_eq!(key.get(), Some("abc123"));

        key.clear();
        assert!(!key.is_present());
        key.store("def456").unwrap();
        assert_eq!(key.get(), Some("def456"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut key = ApiKey::Absent;
        assert!(key.store("").is_err());
        assert!(!key.is_present());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::new("me@example.com", "hunter2", "ukey");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("me@example.com"));

        let key = ApiKey::Present("abc123".to_string());
        assert_eq!(format!("{:?}", key), "Present(..)");
    }

    #[test]
    fn test_url_construction() {
        let request = Request::get("prospect", Some("/do/read/id/5"), Params::new());
        assert_eq!(
            request.url("https://pi.pardot.com", 3),
            "https://pi.pardot.com/api/prospect/version/3/do/read/id/5"
        );

        let request = Request::get("visit", None, Params::new());
        assert_eq!(
            request.url("https://pi.pardot.com", 4),
            "https://pi.pardot.com/api/visit/version/4"
        );
    }

    #[test]
    fn test_query_always_has_json_format() {
        let request = Request::get("prospect", None, Params::from([("format", "xml"), ("id", "5")]));
        let query = request.query();

        assert_eq!(query.get("format"), Some("json"));
        assert_eq!(query.get("id"), Some("5"));
        // the stored params are left untouched
        assert_eq!(request.params.get("format"), Some("xml"));
    }

    #[test]
    fn test_login_request() {
        let creds = Credentials::new("me@example.com", "hunter2", "ukey");
        let request = Request::login(&creds);

        assert!(request.is_login());
        assert_eq!(request.method, Method::Post);
        let data = request.data.unwrap();
        assert_eq!(data.get("email"), Some("me@example.com"));
        assert_eq!(data.get("password"), Some("hunter2"));
        assert_eq!(data.get("user_key"), Some("ukey"));
    }

    #[test]
    fn test_outcome_result_envelope() {
        let outcome = Outcome::Json(json!({"result": {"total_results": 0}}));
        assert_eq!(outcome.into_result(), Some(json!({"total_results": 0})));

        assert_eq!(Outcome::Status(204).into_result(), None);
        assert_eq!(Outcome::Status(204).status(), Some(204));
    }
}
