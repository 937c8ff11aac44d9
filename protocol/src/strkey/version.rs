//! Version bytes: the one-byte tag that says what an encoded key carries.

use crate::config::{
    KEY_PAYLOAD_LENGTH, MUXED_PAYLOAD_LENGTH, VERSION_BYTE_ACCOUNT_ID, VERSION_BYTE_MUXED_ACCOUNT,
    VERSION_BYTE_PRE_AUTH_TX, VERSION_BYTE_SEED, VERSION_BYTE_SHA256_HASH,
};
use std::fmt;

/// The kinds of value a StrKey can carry.
///
/// The discriminant is the on-wire version byte, so `VersionByte::Seed as u8`
/// is exactly what ends up as the first decoded byte of an `S...` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VersionByte {
    /// Ed25519 public key (`G...`).
    AccountId = VERSION_BYTE_ACCOUNT_ID,
    /// Ed25519 public key plus a 64-bit sub-account ID (`M...`).
    MuxedAccount = VERSION_BYTE_MUXED_ACCOUNT,
    /// Ed25519 secret seed (`S...`).
    Seed = VERSION_BYTE_SEED,
    /// Hash of a pre-authorized transaction (`T...`).
    PreAuthTx = VERSION_BYTE_PRE_AUTH_TX,
    /// SHA-256 hash(x) signer (`X...`).
    Sha256Hash = VERSION_BYTE_SHA256_HASH,
}

impl VersionByte {
    /// Every known version, in tag order.
    pub const ALL: [VersionByte; 5] = [
        VersionByte::AccountId,
        VersionByte::MuxedAccount,
        VersionByte::Seed,
        VersionByte::PreAuthTx,
        VersionByte::Sha256Hash,
    ];

    /// Identify a version from its raw tag, if it is one we know.
    pub fn from_u8(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| *v as u8 == tag)
    }

    /// The raw tag value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Fixed payload length in bytes for this kind.
    pub fn payload_len(self) -> usize {
        match self {
            VersionByte::MuxedAccount => MUXED_PAYLOAD_LENGTH,
            VersionByte::AccountId
            | VersionByte::Seed
            | VersionByte::PreAuthTx
            | VersionByte::Sha256Hash => KEY_PAYLOAD_LENGTH,
        }
    }

    /// Total decoded length: tag, payload and checksum.
    pub fn raw_len(self) -> usize {
        crate::config::VERSION_BYTE_LENGTH + self.payload_len() + crate::config::CHECKSUM_LENGTH
    }

    /// Short machine-friendly name, also accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            VersionByte::AccountId => "account",
            VersionByte::MuxedAccount => "muxed-account",
            VersionByte::Seed => "seed",
            VersionByte::PreAuthTx => "pre-auth-tx",
            VersionByte::Sha256Hash => "sha256-hash",
        }
    }
}

impl fmt::Display for VersionByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for VersionByte {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown key kind: {s}"))
    }
}
