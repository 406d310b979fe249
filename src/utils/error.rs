use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileError {
        path: String,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

impl HelloError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::IoError(e) => format!("無法寫入輸出: {}", e),
            HelloError::ConfigFileError { path, .. } => {
                format!("無法讀取設定檔 '{}'", path)
            }
            HelloError::ConfigParseError(e) => format!("設定檔格式錯誤: {}", e),
            HelloError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("設定值 {} = '{}' 無效: {}", field, value, reason),
            HelloError::BindError { addr, .. } => format!("無法監聽 {}", addr),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::IoError(_) => "Check that standard output is open and writable",
            HelloError::ConfigFileError { .. } => {
                "Make sure the file exists and is readable"
            }
            HelloError::ConfigParseError(_) => {
                "Make sure the file is valid TOML with a [server] table"
            }
            HelloError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or override it on the command line"
            }
            HelloError::BindError { .. } => {
                "Choose a different --port or stop the process holding the address"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = HelloError::InvalidConfigValueError {
            field: "port".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 65535".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for field 'port': Value must be between 1 and 65535"
        );
        assert!(err.user_friendly_message().contains("port"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HelloError = io.into();
        assert!(matches!(err, HelloError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
