//! # StrKey
//!
//! The checksummed text format used for every key a user ever sees: account
//! addresses (`G...`), secret seeds (`S...`), muxed accounts (`M...`), and
//! the two hash signer kinds (`T...`, `X...`).
//!
//! ```text
//! [version byte][payload][crc16 little-endian]  -> base32, no padding
//! ```
//!
//! The layers, bottom up:
//!
//! 1. **checksum** — CRC-16/XMODEM.
//! 2. **version** — the [`VersionByte`] tag and the payload length it implies.
//! 3. **codec** — [`encode`], [`decode`], [`decode_any`] with structured
//!    [`StrKeyError`]s.
//! 4. **validate** — `validate_address` / `validate_seed` and their boolean
//!    convenience predicates.
//! 5. **keys** — [`AccountId`] and [`Seed`] newtypes for code that wants a
//!    decoded key rather than a string.
//!
//! Everything here is a pure function of its input. No state, no locks, no
//! I/O; call it from as many threads as you like.

pub mod checksum;
pub mod codec;
pub mod keys;
pub mod validate;
pub mod version;

pub use codec::{decode, decode_32, decode_any, encode, StrKeyError};
pub use keys::{AccountId, Seed};
pub use validate::{
    is_valid_address, is_valid_address_or_seed, is_valid_seed, validate_address, validate_seed,
    ValidationError,
};
pub use version::VersionByte;
