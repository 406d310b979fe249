use crate::utils::error::{HelloError, Result};
use crate::utils::validation::{validate_ip_addr, validate_non_empty_string, validate_range, Validate};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// 雙堆疊，IPv4 與 IPv6 都接受
pub const DEFAULT_HOST: &str = "::";
pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings for `hello-server`.
///
/// Loaded from the `[server]` table of a TOML file; any key left out keeps
/// its default (`[::]:8080`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| HelloError::ConfigFileError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.server)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = validate_ip_addr("host", &self.host)?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_ip_addr("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
