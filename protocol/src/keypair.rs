//! # Keypairs
//!
//! Ed25519 keypairs as the network sees them: a secret seed (`S...`) and the
//! account address (`G...`) derived from it.
//!
//! This module only derives and encodes keys. It has no signing API;
//! building and signing transactions belongs to a full SDK, not to a
//! validation helper.
//!
//! Key bytes are never logged. `Debug` prints the address only.

use crate::strkey::{AccountId, Seed, ValidationError};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading a keypair.
#[derive(Debug, Error)]
pub enum KeypairError {
    /// The seed string did not decode.
    #[error(transparent)]
    InvalidSeed(#[from] ValidationError),

    /// The hex secret was malformed or not 32 bytes.
    #[error("invalid secret key bytes: wrong length or not hex")]
    InvalidSecretKey,
}

/// An account keypair.
///
/// # Examples
///
/// ```
/// use microledger::keypair::Keypair;
/// use microledger::strkey::is_valid_address;
///
/// let kp = Keypair::random();
/// assert!(is_valid_address(&kp.address().to_string()));
///
/// let restored = Keypair::from_seed_str(&kp.seed().to_strkey()).unwrap();
/// assert_eq!(restored.address(), kp.address());
/// ```
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Rebuild the keypair a seed describes.
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed.as_bytes()),
        }
    }

    /// Parse an `S...` string and rebuild its keypair.
    pub fn from_seed_str(seed: &str) -> Result<Self, KeypairError> {
        let seed: Seed = seed.parse()?;
        Ok(Self::from_seed(&seed))
    }

    /// Load a keypair from a hex-encoded 32-byte secret.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeypairError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeypairError::InvalidSecretKey)?;
        let secret: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeypairError::InvalidSecretKey)?;
        Ok(Self::from_seed(&Seed::from_bytes(secret)))
    }

    /// The account address for this keypair.
    pub fn address(&self) -> AccountId {
        AccountId::from_bytes(self.public_key_bytes())
    }

    /// The secret seed. Handle with care.
    pub fn seed(&self) -> Seed {
        Seed::from_bytes(self.signing_key.to_bytes())
    }

    /// Raw Ed25519 public key.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

impl PartialEq for Keypair {
    /// Compared by public key; secret bytes are never compared directly.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for Keypair {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strkey::{is_valid_address, is_valid_seed};

    #[test]
    fn random_keypairs_differ() {
        assert_ne!(Keypair::random().address(), Keypair::random().address());
    }

    #[test]
    fn seed_string_roundtrip() {
        let kp = Keypair::random();
        let seed = kp.seed().to_strkey();
        assert!(is_valid_seed(&seed));
        assert_eq!(Keypair::from_seed_str(&seed).unwrap(), kp);
    }

    #[test]
    fn address_is_valid_strkey() {
        let kp = Keypair::from_seed(&Seed::from_bytes([1u8; 32]));
        let addr = kp.address().to_string();
        assert!(addr.starts_with('G'));
        assert!(is_valid_address(&addr));
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = Seed::from_bytes([42u8; 32]);
        assert_eq!(
            Keypair::from_seed(&seed).address(),
            Keypair::from_seed(&seed).address()
        );
    }

    #[test]
    fn address_is_not_a_seed() {
        let kp = Keypair::random();
        let err = Keypair::from_seed_str(&kp.address().to_string()).unwrap_err();
        assert!(matches!(err, KeypairError::InvalidSeed(_)));
    }

    #[test]
    fn from_hex_matches_from_seed() {
        let kp = Keypair::from_hex(&hex::encode([8u8; 32])).unwrap();
        assert_eq!(kp, Keypair::from_seed(&Seed::from_bytes([8u8; 32])));
        assert!(matches!(
            Keypair::from_hex("abcd"),
            Err(KeypairError::InvalidSecretKey)
        ));
    }

    #[test]
    fn debug_does_not_leak_seed() {
        let kp = Keypair::random();
        let dbg = format!("{kp:?}");
        assert!(!dbg.contains(&kp.seed().to_strkey()));
        assert!(dbg.contains(&kp.address().to_string()));
    }
}
