use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "hbdb.toml";
pub const DEFAULT_DATABASE_URL: &str = "postgres:///hackbright";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database: Database,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Database {
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content).wrap_err_with(|| {
            format!("cannot parse configuration file {}", file_name.display())
        })
    }

    /// Load the configuration from `file_name` if given, which must then exist,
    /// or from the default file if it is present.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Self> {
        match file_name {
            Some(file_name) => Self::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Database URL to use, the one given on the command line or through the
    /// environment taking precedence over the configuration file.
    pub fn database_url(self, overridden: Option<String>) -> String {
        overridden.unwrap_or(self.database.url)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
