use crate::config::Config;
use crate::errors::Result;
use pardot_api::{Pardot, PardotApiClient};

/// Build a client from the default configuration (`~/.pardot/config.ini`,
/// environment and `.env`).
pub fn connect() -> Result<Pardot> {
    let config = Config::new()?;
    connect_with(&config)
}

/// Build a client from an already loaded configuration
pub fn connect_with(config: &Config) -> Result<Pardot> {
    let client = PardotApiClient::from_config(config)?;
    Ok(Pardot::from_client(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConfigError, PardotError};
    use std::io::Write;

    #[test]
    fn test_connect_with_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[auth]\nemail = me@example.com\npassword = hunter2\nuser_key = ukey\n\n[api]\nbase_url = http://localhost:8080\nversion = 4\n"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        let mut pardot = connect_with(&config).unwrap();

        let client = pardot.client();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.version(), 4);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_connect_with_bad_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[auth]\nemail = me@example.com\npassword = hunter2\nuser_key = ukey\n\n[api]\nbase_url = not a url\n"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(matches!(connect_with(&config), Err(PardotError::Api(_))));
    }

    #[test]
    fn test_connect_without_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("config.ini")).unwrap();

        assert!(matches!(
            connect_with(&config),
            Err(PardotError::Config(ConfigError::MissingField(_)))
        ));
    }
}
