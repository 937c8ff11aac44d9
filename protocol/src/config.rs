//! # Network Constants
//!
//! Every magic number in microledger lives here. The StrKey version bytes in
//! particular are wire-compatibility constants: they are baked into every
//! address and seed that has ever been handed out on the network, so changing
//! one silently invalidates all of them.

// ---------------------------------------------------------------------------
// StrKey Version Bytes
// ---------------------------------------------------------------------------

/// Version byte for an Ed25519 public key (account ID). Renders as `G...`.
pub const VERSION_BYTE_ACCOUNT_ID: u8 = 6 << 3;

/// Version byte for a multiplexed account (public key + 64-bit ID).
/// Renders as `M...`.
pub const VERSION_BYTE_MUXED_ACCOUNT: u8 = 12 << 3;

/// Version byte for an Ed25519 secret seed. Renders as `S...`.
pub const VERSION_BYTE_SEED: u8 = 18 << 3;

/// Version byte for a pre-authorized transaction hash signer. Renders as `T...`.
pub const VERSION_BYTE_PRE_AUTH_TX: u8 = 19 << 3;

/// Version byte for a SHA-256 hash(x) signer. Renders as `X...`.
pub const VERSION_BYTE_SHA256_HASH: u8 = 23 << 3;

// ---------------------------------------------------------------------------
// StrKey Layout
// ---------------------------------------------------------------------------

/// Length of the version prefix in decoded bytes.
pub const VERSION_BYTE_LENGTH: usize = 1;

/// Length of the trailing CRC-16 checksum in decoded bytes.
pub const CHECKSUM_LENGTH: usize = 2;

/// Payload length for keys and hashes (Ed25519 keys, SHA-256 digests).
pub const KEY_PAYLOAD_LENGTH: usize = 32;

/// Payload length for muxed accounts: 32-byte key followed by a big-endian u64.
pub const MUXED_PAYLOAD_LENGTH: usize = KEY_PAYLOAD_LENGTH + 8;

/// Encoded length of a 32-byte-payload StrKey: 35 bytes -> 56 base32 chars.
pub const ENCODED_KEY_LENGTH: usize = 56;

// ---------------------------------------------------------------------------
// Horizon Endpoints
// ---------------------------------------------------------------------------

/// Public test-network Horizon server. Friendbot only exists here.
pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";

/// Public main-network Horizon server.
pub const MAINNET_HORIZON_URL: &str = "https://horizon.stellar.org";

/// Path of the friendbot faucet relative to the Horizon base URL.
pub const FRIENDBOT_PATH: &str = "/friendbot";

/// Network passphrase of the test network.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Network passphrase of the main network.
pub const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Longest code an `AlphaNum4` credit asset may carry.
pub const ALPHANUM4_MAX_CODE_LENGTH: usize = 4;

/// Longest code any credit asset may carry (`AlphaNum12`).
pub const ALPHANUM12_MAX_CODE_LENGTH: usize = 12;

/// Code reported for the native asset.
pub const NATIVE_ASSET_CODE: &str = "XLM";

/// Value of the `lib` field on every tracing event emitted by this crate.
pub const LOG_LIB_NAME: &str = "microledger";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_bytes_render_expected_prefixes() {
        // Base32 maps the top five bits of the first byte to the first char.
        let alphabet = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
        let first = |v: u8| alphabet[(v >> 3) as usize] as char;
        assert_eq!(first(VERSION_BYTE_ACCOUNT_ID), 'G');
        assert_eq!(first(VERSION_BYTE_MUXED_ACCOUNT), 'M');
        assert_eq!(first(VERSION_BYTE_SEED), 'S');
        assert_eq!(first(VERSION_BYTE_PRE_AUTH_TX), 'T');
        assert_eq!(first(VERSION_BYTE_SHA256_HASH), 'X');
    }

    #[test]
    fn encoded_key_length_matches_layout() {
        let raw = VERSION_BYTE_LENGTH + KEY_PAYLOAD_LENGTH + CHECKSUM_LENGTH;
        assert_eq!(raw * 8 / 5, ENCODED_KEY_LENGTH);
    }
}
