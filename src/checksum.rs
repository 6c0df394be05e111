//! CRC-32 over walked octets
//!
//! The standard reflected CRC-32 (polynomial `0xEDB88320`, initial value and
//! final xor `0xFFFFFFFF`), fed one octet at a time the way the walk visits
//! them. Messages can be sealed with their checksum as 8 lowercase hex digits
//! and verified again on the other end.

use thiserror::Error;

pub const POLYNOMIAL: u32 = 0xedb8_8320;

/// Width of a checksum rendered as hex
pub const HEX_WIDTH: usize = 8;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut rem = i as u32;
        let mut bit = 0;
        while bit < 8 {
            rem = if rem & 1 != 0 {
                (rem >> 1) ^ POLYNOMIAL
            } else {
                rem >> 1
            };
            bit += 1;
        }
        table[i] = rem;
        i += 1;
    }
    table
}

/// Incremental CRC-32 state
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Crc32 { state: !0 }
    }

    pub fn update_byte(&mut self, octet: u8) {
        let index = ((self.state ^ u32::from(octet)) & 0xff) as usize;
        self.state = (self.state >> 8) ^ TABLE[index];
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &octet in bytes {
            self.update_byte(octet);
        }
    }

    pub fn finish(&self) -> u32 {
        !self.state
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(bytes);
    crc.finish()
}

pub fn to_hex(crc: u32) -> String {
    format!("{:0width$x}", crc, width = HEX_WIDTH)
}

/// Append the message's checksum to it
pub fn seal(message: &str) -> String {
    let mut framed = String::with_capacity(message.len() + HEX_WIDTH);
    framed.push_str(message);
    framed.push_str(&to_hex(crc32(message.as_bytes())));
    framed
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("message of {len} bytes is too short to carry a checksum")]
    TooShort { len: usize },

    #[error("trailing checksum is not 8 hex digits")]
    Malformed,

    #[error("checksum mismatch: given {given}, computed {computed}")]
    Mismatch { given: String, computed: String },
}

/// Check a sealed message and return its payload
pub fn verify(framed: &str) -> Result<&str, ChecksumError> {
    let len = framed.len();
    if len < HEX_WIDTH {
        return Err(ChecksumError::TooShort { len });
    }

    let split = len - HEX_WIDTH;
    if !framed.is_char_boundary(split) {
        return Err(ChecksumError::Malformed);
    }
    let (payload, given) = framed.split_at(split);
    if !given.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ChecksumError::Malformed);
    }

    let computed = to_hex(crc32(payload.as_bytes()));
    if !given.eq_ignore_ascii_case(&computed) {
        return Err(ChecksumError::Mismatch {
            given: given.to_string(),
            computed,
        });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414f_a339
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut crc = Crc32::new();
        for octet in b"123456789" {
            crc.update_byte(*octet);
        }
        assert_eq!(crc.finish(), crc32(b"123456789"));
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(to_hex(0), "00000000");
        assert_eq!(to_hex(0x414f_a339), "414fa339");
    }

    #[test]
    fn test_seal_then_verify() {
        let framed = seal("move e2e4");
        assert_eq!(framed.len(), "move e2e4".len() + HEX_WIDTH);
        assert_eq!(verify(&framed), Ok("move e2e4"));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let mut framed = seal("move e2e4");
        framed.replace_range(0..1, "n");
        assert!(matches!(
            verify(&framed),
            Err(ChecksumError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_short_and_malformed() {
        assert_eq!(verify("abc"), Err(ChecksumError::TooShort { len: 3 }));
        assert_eq!(verify("hello, world!"), Err(ChecksumError::Malformed));
    }
}
