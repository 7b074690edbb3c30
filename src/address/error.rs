//! Address codec errors.

use thiserror::Error;

/// Errors raised by address validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input matches neither the native nor the hex shape expected by the call.
    #[error("Invalid address format: '{0}'")]
    InvalidAddressFormat(String),

    /// Native address is well-shaped but its checksum does not match its data.
    #[error("Checksum mismatch for address '{0}'")]
    ChecksumMismatch(String),
}

impl AddressError {
    /// The offending input string.
    pub fn input(&self) -> &str {
        match self {
            AddressError::InvalidAddressFormat(s) | AddressError::ChecksumMismatch(s) => s,
        }
    }
}

/// Result type for address operations.
pub type AddressResult<T> = Result<T, AddressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressError::InvalidAddressFormat("io1abc".to_string());
        assert_eq!(err.to_string(), "Invalid address format: 'io1abc'");

        let err = AddressError::ChecksumMismatch("io1xyz".to_string());
        assert!(err.to_string().contains("Checksum mismatch"));
        assert_eq!(err.input(), "io1xyz");
    }
}
