// Copyright (c) 2026 microledger contributors. MIT License.
// See LICENSE for details.

//! # microledger — Core Library
//!
//! A small helper layer for Stellar clients. It does the unglamorous work
//! that sits around a full SDK: checking that an address or seed is what it
//! claims to be, turning Horizon error documents into sentences, and asking
//! friendbot for test lumens.
//!
//! ## Architecture
//!
//! - **strkey** — The checksummed base32 key format. Encode, decode,
//!   validate. Pure functions, no state.
//! - **keypair** — Ed25519 keypairs and the addresses derived from them.
//! - **asset** — Native and credit assets, and their builder form.
//! - **horizon** — Problem-document formatting and the friendbot client.
//! - **config** — Version bytes, lengths, URLs.
//!
//! ## Design Philosophy
//!
//! 1. Structured errors first. Boolean predicates exist for form fields and
//!    are layered on top of the `Result`-returning validators.
//! 2. Seeds never reach a log line by accident: no `Display`, redacted `Debug`.
//! 3. No signing, no transaction building, no submission. That is the SDK's job.

pub mod asset;
pub mod config;
pub mod horizon;
pub mod keypair;
pub mod strkey;

pub use asset::{Asset, AssetType, BuildAsset};
pub use horizon::{error_string, fund_with_friendbot, FriendbotClient, HorizonError};
pub use keypair::Keypair;
pub use strkey::{
    is_valid_address, is_valid_address_or_seed, is_valid_seed, validate_address, validate_seed,
    AccountId, Seed, StrKeyError, VersionByte,
};
