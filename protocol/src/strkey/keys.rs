//! Typed wrappers for decoded account IDs and seeds.
//!
//! Once a string has been through the codec there is no reason to keep
//! passing it around as a `&str`. [`AccountId`] and [`Seed`] hold the raw
//! 32 bytes and re-encode on demand.

use super::codec::encode;
use super::validate::{validate_address, validate_seed, ValidationError};
use super::version::VersionByte;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// A public account identifier (`G...`).
///
/// # Examples
///
/// ```
/// use microledger::strkey::AccountId;
///
/// let id = AccountId::from_bytes([0u8; 32]);
/// let text = id.to_string();
/// assert_eq!(text.parse::<AccountId>().unwrap(), id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Wrap raw Ed25519 public key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The `G...` form.
    pub fn to_strkey(&self) -> String {
        encode_32(VersionByte::AccountId, &self.0)
    }
}

impl FromStr for AccountId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_address(s).map(Self)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_strkey())
    }
}

impl Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_strkey())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            let key: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
                serde::de::Error::custom(format!("expected 32-byte public key, got {}", bytes.len()))
            })?;
            Ok(Self(key))
        }
    }
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// A secret seed (`S...`).
///
/// Deliberately has no `Display` and no `Serialize`: writing a seed out
/// should take an explicit call to [`Seed::to_strkey`], never a stray `{}`
/// in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Wrap raw seed bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The `S...` form. Handle with care.
    pub fn to_strkey(&self) -> String {
        encode_32(VersionByte::Seed, &self.0)
    }
}

impl FromStr for Seed {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_seed(s).map(Self)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Encode a 32-byte payload for a kind whose payload length is 32.
fn encode_32(version: VersionByte, bytes: &[u8; 32]) -> String {
    encode(version, bytes).expect("encoding a 32-byte payload should never fail")
}
