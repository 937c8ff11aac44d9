//! # Assets
//!
//! The network has one native asset (lumens) and any number of credit assets,
//! each identified by a short code and the account that issued it. Codes of
//! up to four characters are `AlphaNum4`; five to twelve are `AlphaNum12`.
//!
//! [`Asset::to_build_asset`] translates into the flat `{code, issuer, native}`
//! shape that transaction builders expect.

use crate::config::{ALPHANUM12_MAX_CODE_LENGTH, ALPHANUM4_MAX_CODE_LENGTH, NATIVE_ASSET_CODE};
use crate::strkey::{AccountId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from asset construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// Code is empty, too long, or contains non-alphanumeric characters.
    #[error("invalid asset code {0:?}: must be 1-12 ASCII alphanumeric characters")]
    InvalidCode(String),

    /// The issuer is not a valid account address.
    #[error("invalid asset issuer: {0}")]
    InvalidIssuer(#[from] ValidationError),
}

/// On-ledger representation class of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The native asset.
    Native,
    /// Credit asset with a 1-4 character code.
    CreditAlphanum4,
    /// Credit asset with a 5-12 character code.
    CreditAlphanum12,
}

/// An asset: native, or a credit asset identified by code and issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    /// Lumens.
    Native,
    /// An issued credit asset.
    Credit {
        /// Asset code, e.g. `USD`.
        code: String,
        /// Issuing account.
        issuer: AccountId,
    },
}

/// Flat asset description consumed by transaction builders.
///
/// For the native asset `code` and `issuer` are empty and `native` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildAsset {
    pub code: String,
    pub issuer: String,
    pub native: bool,
}

impl Asset {
    /// The native asset.
    pub fn native() -> Self {
        Asset::Native
    }

    /// A credit asset. Validates the code and parses the issuer address.
    pub fn credit(code: impl Into<String>, issuer: &str) -> Result<Self, AssetError> {
        let code = code.into();
        if code.is_empty()
            || code.len() > ALPHANUM12_MAX_CODE_LENGTH
            || !code.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(AssetError::InvalidCode(code));
        }
        let issuer = issuer.parse::<AccountId>()?;
        Ok(Asset::Credit { code, issuer })
    }

    /// `true` for lumens.
    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Which representation class this asset falls into.
    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Native => AssetType::Native,
            Asset::Credit { code, .. } if code.len() <= ALPHANUM4_MAX_CODE_LENGTH => {
                AssetType::CreditAlphanum4
            }
            Asset::Credit { .. } => AssetType::CreditAlphanum12,
        }
    }

    /// The asset code; `XLM` for the native asset.
    pub fn code(&self) -> &str {
        match self {
            Asset::Native => NATIVE_ASSET_CODE,
            Asset::Credit { code, .. } => code,
        }
    }

    /// The issuer, if this is a credit asset.
    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::Credit { issuer, .. } => Some(issuer),
        }
    }

    /// Translate into the builder's flat form.
    pub fn to_build_asset(&self) -> BuildAsset {
        match self {
            Asset::Native => BuildAsset {
                native: true,
                ..BuildAsset::default()
            },
            Asset::Credit { code, issuer } => BuildAsset {
                code: code.clone(),
                issuer: issuer.to_string(),
                native: false,
            },
        }
    }
}

impl From<&Asset> for BuildAsset {
    fn from(asset: &Asset) -> Self {
        asset.to_build_asset()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => f.write_str("native"),
            Asset::Credit { code, issuer } => write!(f, "{code}:{issuer}"),
        }
    }
}
