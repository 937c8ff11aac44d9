//! CRC-16/XMODEM checksum guarding StrKey strings against typos.
//!
//! Polynomial 0x1021, initial value 0x0000, no reflection, no final XOR.
//! The result is appended little-endian. This is an error-detecting code,
//! not a MAC: it catches fat fingers, not forgers.

use crc::{Crc, CRC_16_XMODEM};

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Compute the checksum over `data` (version byte followed by payload).
pub fn crc16(data: &[u8]) -> u16 {
    XMODEM.checksum(data)
}

/// Checksum in the byte order it is stored on the wire.
pub fn checksum_bytes(data: &[u8]) -> [u8; 2] {
    crc16(data).to_le_bytes()
}
