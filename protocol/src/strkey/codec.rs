//! Encoding and decoding of StrKey strings.
//!
//! ```text
//! version_byte (1) || payload (32 or 40) || crc16_le(version || payload) (2)
//!     -> RFC 4648 base32, uppercase, no padding
//! ```
//!
//! Decoding is strict: lowercase text, padding characters, and non-zero
//! trailing bits are all rejected, so every payload has exactly one valid
//! string form. Two strings that decode to the same key are always equal.

use super::checksum::{checksum_bytes, crc16};
use super::version::VersionByte;
use crate::config::{CHECKSUM_LENGTH, VERSION_BYTE_LENGTH};
use data_encoding::BASE32_NOPAD;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by the StrKey codec.
///
/// None of these are retried or recovered internally. Whether a bad string is
/// a hard failure or a soft "please retype that" is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    /// The text is not canonical base32, or decodes to the wrong number of bytes.
    #[error("invalid strkey format: {0}")]
    InvalidFormat(String),

    /// The trailing checksum does not match the version byte and payload.
    #[error("checksum mismatch: computed {computed:#06x}, found {found:#06x}")]
    ChecksumMismatch {
        /// Checksum computed over the decoded version byte and payload.
        computed: u16,
        /// Checksum carried by the string.
        found: u16,
    },

    /// The string is intact but carries a different kind of key.
    #[error("version byte mismatch: expected {expected} ({:#04x}), found {found:#04x}", .expected.as_u8())]
    VersionMismatch {
        /// The kind the caller asked for.
        expected: VersionByte,
        /// The raw tag found in the string.
        found: u8,
    },

    /// Encode was handed a payload of the wrong size for its version.
    #[error("invalid payload length for {version}: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// The version being encoded.
        version: VersionByte,
        /// Required payload length.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// The version byte is not one this codec knows about.
    #[error("unknown version byte: {0:#04x}")]
    UnknownVersionByte(u8),
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode `payload` as a StrKey of the given kind.
///
/// # Examples
///
/// ```
/// use microledger::strkey::{decode, encode, VersionByte};
///
/// let text = encode(VersionByte::AccountId, &[0u8; 32]).unwrap();
/// assert!(text.starts_with('G'));
/// assert_eq!(decode(VersionByte::AccountId, &text).unwrap(), vec![0u8; 32]);
/// ```
pub fn encode(version: VersionByte, payload: &[u8]) -> Result<String, StrKeyError> {
    if payload.len() != version.payload_len() {
        return Err(StrKeyError::InvalidLength {
            version,
            expected: version.payload_len(),
            got: payload.len(),
        });
    }

    let mut raw = Vec::with_capacity(version.raw_len());
    raw.push(version.as_u8());
    raw.extend_from_slice(payload);
    let checksum = checksum_bytes(&raw);
    raw.extend_from_slice(&checksum);

    Ok(BASE32_NOPAD.encode(&raw))
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode `text`, requiring it to carry a key of kind `expected`.
///
/// Checks are applied in a fixed order: base32 validity, total length for
/// the expected kind, checksum, then version byte. A corrupted string is
/// therefore reported as a checksum failure even if the corruption happened
/// to land on the version byte.
pub fn decode(expected: VersionByte, text: &str) -> Result<Vec<u8>, StrKeyError> {
    let raw = decode_base32(text)?;

    if raw.len() != expected.raw_len() {
        return Err(StrKeyError::InvalidFormat(format!(
            "expected {} decoded bytes for {}, got {}",
            expected.raw_len(),
            expected,
            raw.len()
        )));
    }

    let (tag, payload) = split_checked(&raw)?;

    if tag != expected.as_u8() {
        return Err(StrKeyError::VersionMismatch {
            expected,
            found: tag,
        });
    }

    Ok(payload.to_vec())
}

/// Decode `text` as whichever kind its version byte names.
pub fn decode_any(text: &str) -> Result<(VersionByte, Vec<u8>), StrKeyError> {
    let raw = decode_base32(text)?;
    let tag = *raw
        .first()
        .ok_or_else(|| StrKeyError::InvalidFormat("empty input".into()))?;
    let version = VersionByte::from_u8(tag).ok_or(StrKeyError::UnknownVersionByte(tag))?;
    let payload = decode(version, text)?;
    Ok((version, payload))
}

/// Decode into a fixed 32-byte array. Convenience for the 32-byte kinds.
pub fn decode_32(expected: VersionByte, text: &str) -> Result<[u8; 32], StrKeyError> {
    let payload = decode(expected, text)?;
    payload.as_slice().try_into().map_err(|_| StrKeyError::InvalidLength {
        version: expected,
        expected: 32,
        got: payload.len(),
    })
}

fn decode_base32(text: &str) -> Result<Vec<u8>, StrKeyError> {
    if text.is_empty() {
        return Err(StrKeyError::InvalidFormat("empty input".into()));
    }
    BASE32_NOPAD
        .decode(text.as_bytes())
        .map_err(|e| StrKeyError::InvalidFormat(e.to_string()))
}

/// Verify the checksum and split off the version byte.
fn split_checked(raw: &[u8]) -> Result<(u8, &[u8]), StrKeyError> {
    if raw.len() < VERSION_BYTE_LENGTH + CHECKSUM_LENGTH {
        return Err(StrKeyError::InvalidFormat(format!(
            "{} decoded bytes is too short",
            raw.len()
        )));
    }

    let (body, claimed) = raw.split_at(raw.len() - CHECKSUM_LENGTH);
    let found = u16::from_le_bytes([claimed[0], claimed[1]]);
    let computed = crc16(body);
    if computed != found {
        return Err(StrKeyError::ChecksumMismatch { computed, found });
    }

    Ok((body[0], &body[VERSION_BYTE_LENGTH..]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload(seed: u8) -> Vec<u8> {
        (0..32u8).map(|i| i.wrapping_mul(7).wrapping_add(seed)).collect()
    }

    #[test]
    fn zero_account_matches_known_string() {
        let text = encode(VersionByte::AccountId, &[0u8; 32]).unwrap();
        assert_eq!(
            text,
            "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF"
        );
    }

    #[test]
    fn roundtrip_every_version() {
        for version in VersionByte::ALL {
            let payload: Vec<u8> = (0..version.payload_len() as u8).collect();
            let text = encode(version, &payload).unwrap();
            assert_eq!(decode(version, &text).unwrap(), payload, "{version}");
        }
    }

    #[test]
    fn encoded_key_is_56_uppercase_chars() {
        let text = encode(VersionByte::Seed, &sample_payload(3)).unwrap();
        assert_eq!(text.len(), crate::config::ENCODED_KEY_LENGTH);
        assert!(text.starts_with('S'));
        assert!(text.chars().all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
        assert!(!text.contains('='));
    }

    #[test]
    fn muxed_account_is_69_chars() {
        let text = encode(VersionByte::MuxedAccount, &[1u8; 40]).unwrap();
        assert_eq!(text.len(), 69);
        assert!(text.starts_with('M'));
    }

    #[test]
    fn encode_rejects_wrong_payload_length() {
        for len in [31, 33] {
            let err = encode(VersionByte::AccountId, &vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                StrKeyError::InvalidLength {
                    version: VersionByte::AccountId,
                    expected: 32,
                    got: len,
                }
            );
        }
    }

    #[test]
    fn empty_string_is_invalid_format() {
        assert!(matches!(
            decode(VersionByte::AccountId, ""),
            Err(StrKeyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn wrong_total_length_is_invalid_format() {
        // 40 chars of valid base32 -> 25 bytes.
        let text = BASE32_NOPAD.encode(&[0x30u8; 25]);
        assert!(matches!(
            decode(VersionByte::AccountId, &text),
            Err(StrKeyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn corrupted_last_char_is_checksum_mismatch() {
        let mut text = encode(VersionByte::AccountId, &sample_payload(9)).unwrap();
        let last = text.pop().unwrap();
        text.push(if last == 'A' { 'B' } else { 'A' });
        assert!(matches!(
            decode(VersionByte::AccountId, &text),
            Err(StrKeyError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn every_single_bit_flip_is_detected() {
        let text = encode(VersionByte::AccountId, &sample_payload(1)).unwrap();
        let raw = BASE32_NOPAD.decode(text.as_bytes()).unwrap();
        for byte in 0..raw.len() {
            for bit in 0..8 {
                let mut flipped = raw.clone();
                flipped[byte] ^= 1 << bit;
                let corrupted = BASE32_NOPAD.encode(&flipped);
                assert!(
                    matches!(
                        decode(VersionByte::AccountId, &corrupted),
                        Err(StrKeyError::ChecksumMismatch { .. })
                    ),
                    "flip at byte {byte} bit {bit} went undetected"
                );
            }
        }
    }

    #[test]
    fn seed_decoded_as_account_is_version_mismatch() {
        let seed = encode(VersionByte::Seed, &sample_payload(5)).unwrap();
        let err = decode(VersionByte::AccountId, &seed).unwrap_err();
        assert_eq!(
            err,
            StrKeyError::VersionMismatch {
                expected: VersionByte::AccountId,
                found: VersionByte::Seed.as_u8(),
            }
        );
    }

    #[test]
    fn lowercase_is_rejected() {
        let text = encode(VersionByte::AccountId, &sample_payload(2)).unwrap();
        assert!(matches!(
            decode(VersionByte::AccountId, &text.to_lowercase()),
            Err(StrKeyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn padding_is_rejected() {
        let text = encode(VersionByte::MuxedAccount, &[9u8; 40]).unwrap();
        let padded = format!("{text}===");
        assert!(matches!(
            decode(VersionByte::MuxedAccount, &padded),
            Err(StrKeyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn non_canonical_trailing_bits_are_rejected() {
        // 69 chars carry 345 bits for 344 bits of data; the spare bit must be 0.
        let text = encode(VersionByte::MuxedAccount, &[0u8; 40]).unwrap();
        let mut chars: Vec<char> = text.chars().collect();
        let last = chars.pop().unwrap();
        let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
        let idx = alphabet.find(last).unwrap();
        chars.push(alphabet.as_bytes()[idx ^ 1] as char);
        let tampered: String = chars.into_iter().collect();
        assert!(matches!(
            decode(VersionByte::MuxedAccount, &tampered),
            Err(StrKeyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn decode_any_identifies_kind() {
        let payload = sample_payload(4);
        let text = encode(VersionByte::PreAuthTx, &payload).unwrap();
        let (version, decoded) = decode_any(&text).unwrap();
        assert_eq!(version, VersionByte::PreAuthTx);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn decode_any_rejects_unknown_tag() {
        let mut raw = vec![0x08u8];
        raw.extend_from_slice(&[0u8; 32]);
        let checksum = checksum_bytes(&raw);
        raw.extend_from_slice(&checksum);
        let text = BASE32_NOPAD.encode(&raw);
        assert_eq!(decode_any(&text), Err(StrKeyError::UnknownVersionByte(0x08)));
    }

    #[test]
    fn decode_32_returns_array() {
        let payload = sample_payload(6);
        let text = encode(VersionByte::Sha256Hash, &payload).unwrap();
        let arr = decode_32(VersionByte::Sha256Hash, &text).unwrap();
        assert_eq!(arr.to_vec(), payload);
    }
}
