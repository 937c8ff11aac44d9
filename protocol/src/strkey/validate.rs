//! Address and seed validation.
//!
//! The `validate_*` functions are the real interface: they return the decoded
//! key or a structured error saying what was wrong. The `is_valid_*`
//! predicates are thin wrappers for form fields and other places that only
//! need a yes/no.

use super::codec::{decode_32, StrKeyError};
use super::version::VersionByte;
use thiserror::Error;

/// A validation failure, with the codec error that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is not a valid account address.
    #[error("invalid address: {0}")]
    InvalidAddress(#[source] StrKeyError),

    /// The text is not a valid secret seed.
    #[error("invalid seed: {0}")]
    InvalidSeed(#[source] StrKeyError),
}

impl ValidationError {
    /// The underlying codec error.
    pub fn strkey_error(&self) -> &StrKeyError {
        match self {
            ValidationError::InvalidAddress(e) | ValidationError::InvalidSeed(e) => e,
        }
    }
}

/// Decode an account address (`G...`) into its 32-byte public key.
pub fn validate_address(address: &str) -> Result<[u8; 32], ValidationError> {
    decode_32(VersionByte::AccountId, address).map_err(ValidationError::InvalidAddress)
}

/// Decode a secret seed (`S...`) into its 32 raw bytes.
pub fn validate_seed(seed: &str) -> Result<[u8; 32], ValidationError> {
    decode_32(VersionByte::Seed, seed).map_err(ValidationError::InvalidSeed)
}

/// `true` if `address` is a well-formed account address.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

/// `true` if `seed` is a well-formed secret seed.
pub fn is_valid_seed(seed: &str) -> bool {
    validate_seed(seed).is_ok()
}

/// `true` if `text` is either a valid address or a valid seed.
pub fn is_valid_address_or_seed(text: &str) -> bool {
    is_valid_address(text) || is_valid_seed(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strkey::encode;

    fn address() -> String {
        encode(VersionByte::AccountId, &[0x11; 32]).unwrap()
    }

    fn seed() -> String {
        encode(VersionByte::Seed, &[0x22; 32]).unwrap()
    }

    #[test]
    fn validate_address_returns_key() {
        assert_eq!(validate_address(&address()).unwrap(), [0x11; 32]);
    }

    #[test]
    fn validate_seed_returns_bytes() {
        assert_eq!(validate_seed(&seed()).unwrap(), [0x22; 32]);
    }

    #[test]
    fn seed_is_not_an_address() {
        let err = validate_address(&seed()).unwrap_err();
        assert!(matches!(
            err.strkey_error(),
            StrKeyError::VersionMismatch { .. }
        ));
        assert!(err.to_string().starts_with("invalid address"));
    }

    #[test]
    fn address_is_not_a_seed() {
        let err = validate_seed(&address()).unwrap_err();
        assert!(err.to_string().starts_with("invalid seed"));
    }

    #[test]
    fn address_or_seed() {
        assert!(is_valid_address_or_seed(&address()));
        assert!(is_valid_address_or_seed(&seed()));
        assert!(!is_valid_address_or_seed("not a key"));
        assert!(!is_valid_address_or_seed(""));

        let mut truncated = address();
        truncated.pop();
        assert!(!is_valid_address_or_seed(&truncated));
    }

    #[test]
    fn predicates_agree_with_validators() {
        assert!(is_valid_address(&address()));
        assert!(!is_valid_address(&seed()));
        assert!(is_valid_seed(&seed()));
        assert!(!is_valid_seed(&address()));
    }
}
