use std::fs;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Process-wide settings, loaded once at startup and handed to every
/// component that talks to the database or binds a socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub db: DbConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    #[serde(default = "default_pool_size")]
    pub max_connections: u32,
}

fn default_pool_size() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load(filename: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let config = fs::read_to_string(filename.as_ref()).map_err(|_| Error::ConfigReadError)?;
        serde_yaml::from_str(&config).map_err(|_| Error::ConfigParseError)
    }
}

impl DbConfig {
    pub fn server_url(&self) -> String {
        if self.password.is_empty() {
            format!("postgres://{}@{}:{}", self.user, self.host, self.port)
        } else {
            format!(
                "postgres://{}:{}@{}:{}",
                self.user, self.password, self.host, self.port
            )
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.server_url(), self.dbname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_be_loaded() {
        let config = Config::load("../service/fixtures/config.yml").unwrap();
        assert_eq!(
            config,
            Config {
                db: DbConfig {
                    host: "localhost".to_string(),
                    port: 5432,
                    user: "postgres".to_string(),
                    password: "postgres".to_string(),
                    dbname: "orentit".to_string(),
                    max_connections: 5,
                },
                server: ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 50051,
                },
            }
        );
    }

    #[test]
    fn missing_config_should_fail_to_read() {
        assert_eq!(
            Config::load("../service/fixtures/missing.yml").unwrap_err(),
            Error::ConfigReadError
        );
    }

    #[test]
    fn db_url_should_skip_empty_password() {
        let mut db = DbConfig {
            host: "db".into(),
            port: 5432,
            user: "orentit".into(),
            password: String::new(),
            dbname: "orentit".into(),
            max_connections: 5,
        };
        assert_eq!(db.url(), "postgres://orentit@db:5432/orentit");
        db.password = "secret".into();
        assert_eq!(db.url(), "postgres://orentit:secret@db:5432/orentit");
    }
}
