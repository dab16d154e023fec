//! Structured solver errors, replacing the teacher's ad hoc `Box<dyn Error>`
//! returns with a `thiserror`-derived enum callers can match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LbmError {
    #[error("settings file not found: {0}")]
    SettingsNotFound(String),

    #[error("failed to parse settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported lattice model: {0}")]
    UnsupportedModel(String),

    #[error("invalid thread count {0}, falling back to hardware max")]
    InvalidThreadCount(usize),

    #[error("failed to build thread pool: {0}")]
    ThreadPoolBuild(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_carries_the_reason() {
        let err = LbmError::InvalidConfig("nx must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: nx must be positive");
    }
}
