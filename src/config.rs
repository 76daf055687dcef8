use crate::errors::{ConfigError, PardotError, Result};
use log::debug;
use pardot_api::{ApiConfig, Credentials};
use std::fs;
use std::path::{Path, PathBuf};

const AUTH_SECTION: &str = "auth";
const API_SECTION: &str = "api";

/// Configuration manager for the Pardot client
///
/// Values come from `~/.pardot/config.ini`:
///
/// ```ini
/// [auth]
/// email = me@example.com
/// password = secret
/// user_key = 0123456789abcdef
///
/// [api]
/// base_url = https://pi.pardot.com
/// version = 4
/// ```
///
/// `PARDOT_EMAIL`, `PARDOT_PASSWORD`, `PARDOT_USER_KEY`, `PARDOT_BASE_URL`
/// and `PARDOT_API_VERSION` take precedence over the file.
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    data: ini::Ini,
}

impl Config {
    /// Load the default config file, reading `.env` first
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::load_from(get_config_dir()?.join("config.ini"))
    }

    /// Load from an explicit path. A missing file yields an empty config.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();

        let data = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            ini::Ini::load_from_file(&config_path)
                .map_err(|e| ConfigError::IniError(e.to_string()))?
        } else {
            debug!("No config at {}, starting empty", config_path.display());
            ini::Ini::new()
        };

        Ok(Config { config_path, data })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Save the configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
            }
        }

        self.data
            .write_to_file(&self.config_path)
            .map_err(|e| ConfigError::IniError(e.to_string()))?;
        Ok(())
    }

    /// Get a configuration value from the file only
    pub fn get_value(&self, section: &str, key: &str) -> Option<String> {
        self.data
            .get_from(Some(section), key)
            .map(|s| s.to_string())
    }

    /// Set a configuration value
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) {
        self.data.with_section(Some(section)).set(key, value);
    }

    /// Remove a configuration value
    pub fn unset_value(&mut self, section: &str, key: &str) {
        if let Some(section_map) = self.data.section_mut(Some(section)) {
            section_map.remove(key);
        }
    }

    pub fn get_email(&self) -> Option<String> {
        self.lookup("PARDOT_EMAIL", AUTH_SECTION, "email")
    }

    pub fn get_password(&self) -> Option<String> {
        self.lookup("PARDOT_PASSWORD", AUTH_SECTION, "password")
    }

    pub fn get_user_key(&self) -> Option<String> {
        self.lookup("PARDOT_USER_KEY", AUTH_SECTION, "user_key")
    }

    /// Store credentials in the `[auth]` section
    pub fn set_credentials(&mut self, credentials: &Credentials) {
        self.set_value(AUTH_SECTION, "email", credentials.email());
        self.set_value(AUTH_SECTION, "password", credentials.password());
        self.set_value(AUTH_SECTION, "user_key", credentials.user_key());
    }

    /// All three credential fields, or the first one missing
    pub fn credentials(&self) -> Result<Credentials> {
        let email = self
            .get_email()
            .ok_or_else(|| ConfigError::MissingField("auth.email".to_string()))?;
        let password = self
            .get_password()
            .ok_or_else(|| ConfigError::MissingField("auth.password".to_string()))?;
        let user_key = self
            .get_user_key()
            .ok_or_else(|| ConfigError::MissingField("auth.user_key".to_string()))?;

        Ok(Credentials::new(email, password, user_key))
    }

    pub fn base_url(&self) -> Option<String> {
        self.lookup("PARDOT_BASE_URL", API_SECTION, "base_url")
    }

    pub fn api_version(&self) -> Result<Option<u32>> {
        match self.lookup("PARDOT_API_VERSION", API_SECTION, "version") {
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
                ConfigError::InvalidValue {
                    field: "api.version".to_string(),
                    value: raw,
                }
                .into()
            }),
            None => Ok(None),
        }
    }

    /// Show all configuration as a formatted string, password masked
    pub fn show_config(&self) -> String {
        let mut output = String::new();

        for (section_name, section) in self.data.iter() {
            if let Some(section_name) = section_name {
                output.push_str(&format!("[{}]\n", section_name));
            }

            for (key, value) in section.iter() {
                let value = if key == "password" { "********" } else { value };
                output.push_str(&format!("{} = {}\n", key, value));
            }
            output.push('\n');
        }

        output
    }

    /// Environment first, then the file. Empty values count as unset.
    fn lookup(&self, env_name: &str, section: &str, key: &str) -> Option<String> {
        std::env::var(env_name)
            .ok()
            .or_else(|| self.get_value(section, key))
            .filter(|value| !value.trim().is_empty())
    }
}

impl ApiConfig for Config {
    type Error = PardotError;

    fn get_credentials(&self) -> Result<Credentials> {
        self.credentials()
    }

    fn get_base_url(&self) -> Result<Option<String>> {
        Ok(self.base_url())
    }

    fn get_api_version(&self) -> Result<Option<u32>> {
        self.api_version()
    }
}

/// Load configuration
pub fn load_config() -> Result<Config> {
    Config::new()
}

/// Get configuration directory path
fn get_config_dir() -> Result<PathBuf> {
    let home_dir = home::home_dir().ok_or_else(|| {
        ConfigError::DirectoryCreationFailed("Could not find home directory".to_string())
    })?;

    Ok(home_dir.join(".pardot"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_credentials_from_file() {
        let file = write_config(
            "[auth]\nemail = me@example.com\npassword = hunter2\nuser_key = ukey\n",
        );
        let config = Config::load_from(file.path()).unwrap();

        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.email(), "me@example.com");
        assert_eq!(credentials.password(), "hunter2");
        assert_eq!(credentials.user_key(), "ukey");
    }

    #[test]
    fn test_missing_field() {
        let file = write_config("[auth]\nemail = me@example.com\n");
        let config = Config::load_from(file.path()).unwrap();

        match config.get_credentials() {
            Err(PardotError::Config(ConfigError::MissingField(field))) => {
                assert_eq!(field, "auth.password")
            }
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_api_section() {
        let file = write_config("[api]\nbase_url = http://localhost:8080\nversion = 4\n");
        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.base_url().as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.api_version().unwrap(), Some(4));
    }

    #[test]
    fn test_invalid_version() {
        let file = write_config("[api]\nversion = four\n");
        let config = Config::load_from(file.path()).unwrap();

        assert!(matches!(
            config.api_version(),
            Err(PardotError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.ini")).unwrap();

        assert_eq!(config.get_value("auth", "email"), None);
        assert_eq!(config.api_version().unwrap(), None);
    }

    #[test]
    fn test_save_round_trip_and_masking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut config = Config::load_from(&path).unwrap();
        config.set_credentials(&Credentials::new("me@example.com", "hunter2", "ukey"));
        config.save().unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.get_value("auth", "user_key").as_deref(), Some("ukey"));

        let shown = reloaded.show_config();
        assert!(shown.contains("[auth]"));
        assert!(!shown.contains("hunter2"));

        let mut reloaded = reloaded;
        reloaded.unset_value("auth", "user_key");
        assert_eq!(reloaded.get_value("auth", "user_key"), None);
    }
}
