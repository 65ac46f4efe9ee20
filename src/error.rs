use thiserror::Error;

use crate::domain::error::LedgerError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameId;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::MissingField {
            field: "server.host",
        };
        assert_eq!(err.to_string(), "missing required field: server.host");

        let err = ConfigError::InvalidValue {
            field: "server.port",
            reason: "must be non-zero".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for server.port: must be non-zero"
        );
    }

    #[test]
    fn ledger_errors_are_transparent() {
        let err: Error = LedgerError::GameNotFound {
            game_id: GameId::new(3),
        }
        .into();
        assert_eq!(err.to_string(), "game 3 not found");
    }
}
