//! Mixed-endian GUID encoding and decoding.
//!
//! Microsoft stores 16-byte GUIDs with the first three fields little-endian
//! and the rest in document order, so `AABBCCDD-EEFF-GGHH-IIJJ-KKLLMMNNOOPP`
//! lives on disk as `DD CC BB AA FF EE HH GG II JJ KK LL MM NN OO PP`.
//! [`Guid`] wraps the on-disk form; [`std::fmt::Display`] and
//! [`std::str::FromStr`] perform the byte reordering.

use crate::error::Error;
use bytes::{Buf, BufMut};
use std::{fmt, str::FromStr};

// Hex-pair offset in the canonical string for each on-disk byte.
const TEXT_OFFSETS: [usize; 16] = [6, 4, 2, 0, 11, 9, 16, 14, 19, 21, 24, 26, 28, 30, 32, 34];

// Hyphen positions in the canonical string.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A 16-byte GUID in its on-disk byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid([u8; 16]);

impl Guid {
    /// Encoded length in bytes.
    pub const LENGTH: usize = 16;

    /// Wraps an on-disk byte sequence; anything but 16 bytes is an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// The on-disk byte sequence.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Reads a GUID from the buffer, consuming 16 bytes.
    pub fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        if buf.remaining() < Self::LENGTH {
            return Err(Error::InvalidLength(buf.remaining()));
        }
        let mut bytes = [0u8; 16];
        buf.copy_to_slice(&mut bytes);
        Ok(Self(bytes))
    }

    /// Writes the on-disk byte sequence to the buffer.
    pub fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self.0);
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15]
        )
    }
}

impl FromStr for Guid {
    type Err = Error;

    /// Parses the canonical `8-4-4-4-12` form. Uppercase is canonical;
    /// lowercase hex digits are accepted.
    fn from_str(s: &str) -> Result<Self, Error> {
        fn digit(c: u8) -> Result<u8, Error> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                other => Err(Error::InvalidFormat(
                    "guid",
                    format!("invalid hex character {:?}", other as char),
                )),
            }
        }

        let raw = s.as_bytes();
        if raw.len() != 36 {
            return Err(Error::InvalidFormat(
                "guid",
                format!("expected 36 characters, found {}", raw.len()),
            ));
        }
        for &pos in &HYPHENS {
            if raw[pos] != b'-' {
                return Err(Error::InvalidFormat(
                    "guid",
                    format!("expected '-' at position {pos}"),
                ));
            }
        }

        let mut bytes = [0u8; 16];
        for (byte, &offset) in bytes.iter_mut().zip(&TEXT_OFFSETS) {
            *byte = (digit(raw[offset])? << 4) | digit(raw[offset + 1])?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_display() {
        // Test case 0: the field reordering, byte by byte
        let guid = Guid::from_bytes(&[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
            0x0F, 0x10,
        ])
        .unwrap();
        assert_eq!(guid.to_string(), "04030201-0605-0807-090A-0B0C0D0E0F10");

        // Test case 1: the ASF header object GUID as stored on disk
        let guid = Guid::from_bytes(&[
            0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62,
            0xCE, 0x6C,
        ])
        .unwrap();
        assert_eq!(guid.to_string(), "75B22630-668E-11CF-A6D9-00AA0062CE6C");
    }

    #[test]
    fn test_parse() {
        // Test case 0: canonical uppercase
        let guid: Guid = "75B22630-668E-11CF-A6D9-00AA0062CE6C".parse().unwrap();
        assert_eq!(
            guid.as_bytes(),
            &[
                0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00,
                0x62, 0xCE, 0x6C
            ]
        );

        // Test case 1: lowercase is accepted
        let lower: Guid = "75b22630-668e-11cf-a6d9-00aa0062ce6c".parse().unwrap();
        assert_eq!(lower, guid);

        // Test case 2: wrong length
        assert!(matches!(
            "75B22630".parse::<Guid>(),
            Err(Error::InvalidFormat("guid", _))
        ));

        // Test case 3: a hyphen out of place
        assert!(matches!(
            "75B226300668E-11CF-A6D9-00AA0062CE6C".parse::<Guid>(),
            Err(Error::InvalidFormat("guid", _))
        ));

        // Test case 4: a non-hex digit
        assert!(matches!(
            "75B22630-668G-11CF-A6D9-00AA0062CE6C".parse::<Guid>(),
            Err(Error::InvalidFormat("guid", _))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..500 {
            let bytes: [u8; 16] = rng.gen();
            let guid = Guid::from_bytes(&bytes).unwrap();
            let parsed: Guid = guid.to_string().parse().unwrap();
            assert_eq!(parsed.as_bytes(), &bytes);
        }
    }

    #[test]
    fn test_buffer_accessors() {
        // Test case 0: write then read is the identity
        let guid = Guid::from_bytes(&[0xAB; 16]).unwrap();
        let mut buf = Vec::new();
        guid.write(&mut buf);
        assert_eq!(buf.len(), Guid::LENGTH);
        assert_eq!(Guid::read(&mut &buf[..]).unwrap(), guid);

        // Test case 1: a short buffer is rejected
        assert!(matches!(
            Guid::read(&mut &[0u8; 15][..]),
            Err(Error::InvalidLength(15))
        ));

        // Test case 2: from_bytes length check
        assert!(matches!(
            Guid::from_bytes(&[0u8; 17]),
            Err(Error::InvalidLength(17))
        ));
    }
}
