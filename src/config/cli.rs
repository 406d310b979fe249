use crate::config::server::ServerConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hello-server")]
#[command(about = "A minimal HTTP hello service")]
pub struct ServerArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl ServerArgs {
    /// Config file values first, then command-line overrides, then validation.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = ServerArgs::try_parse_from(["hello-server"]).unwrap();
        assert_eq!(args.resolve().unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args =
            ServerArgs::try_parse_from(["hello-server", "--host", "127.0.0.1", "-p", "9000"])
                .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_port_zero_rejected() {
        let args = ServerArgs::try_parse_from(["hello-server", "--port", "0"]).unwrap();
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args =
            ServerArgs::try_parse_from(["hello-server", "--config", "/nonexistent/hello.toml"])
                .unwrap();
        assert!(matches!(
            args.resolve(),
            Err(crate::utils::error::HelloError::ConfigFileError { .. })
        ));
    }
}
