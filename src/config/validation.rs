//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, known log levels)
//! - Check the RPC URL and that the chain ID belongs to the named network
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: KitConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::KitConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &KitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let chain = &config.blockchain;
    match url::Url::parse(&chain.rpc_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "blockchain.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "blockchain.rpc_url",
            format!("invalid URL '{}': {}", chain.rpc_url, e),
        )),
    }

    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "blockchain.rpc_timeout_secs",
            "must be greater than 0",
        ));
    }

    let expected = chain.network.chain_id().0;
    if chain.chain_id != expected {
        errors.push(ValidationError::new(
            "blockchain.chain_id",
            format!(
                "{} does not match network '{}' (expected {})",
                chain.chain_id, chain.network, expected
            ),
        ));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "logging.level",
            format!("unknown level '{}'", config.logging.level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::Network;
    use crate::config::schema::BlockchainConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&KitConfig::default()).is_ok());
    }

    #[test]
    fn test_testnet_config_is_valid() {
        let config = KitConfig {
            blockchain: BlockchainConfig::for_network(Network::Testnet),
            ..KitConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = KitConfig::default();
        config.blockchain.rpc_url = "ws://localhost:8546".to_string();
        config.blockchain.rpc_timeout_secs = 0;
        config.blockchain.chain_id = 1;
        config.logging.level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "blockchain.rpc_url",
                "blockchain.rpc_timeout_secs",
                "blockchain.chain_id",
                "logging.level",
            ]
        );
        assert!(errors[0].to_string().contains("unsupported scheme 'ws'"));
    }

    #[test]
    fn test_unparsable_url() {
        let mut config = KitConfig::default();
        config.blockchain.rpc_url = "no scheme here".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("invalid URL"));
    }

    #[test]
    fn test_level_case_insensitive() {
        let mut config = KitConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
