//! Fixed-width integer encoding and decoding.
//!
//! Each interpretation gets its own entry points per endianness:
//!
//! - unsigned ([`write_be`]/[`decode_be`] and the `_le` pair)
//! - synchsafe, 7 usable bits per byte with the top bit always clear
//!   ([`write_synchsafe_be`]/[`decode_synchsafe_be`] and the `_le` pair)
//! - signed two's complement, at most 4 bytes
//!   ([`write_signed_be`]/[`decode_signed_be`] and the `_le` pair)
//!
//! Keeping the combinations as separate functions makes the nonsensical
//! ones (a signed synchsafe integer) unrepresentable. Little-endian is
//! big-endian over the byte-reversed sequence throughout.
//!
//! Encoders emit the minimal byte count for the value, padded to
//! `min_bytes`. Decoders take the byte slice whose length is the width;
//! callers manage framing.

use crate::error::Error;
use bytes::BufMut;
use std::fmt;

const DATA_BITS_MASK: u8 = 0x7F;

/// Byte ordering of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Returns the byte order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

// Emitted width: the minimal byte count for the value, padded to min_bytes.
fn unsigned_width(value: u64, min_bytes: usize) -> usize {
    let data_bits = 64 - value.leading_zeros() as usize;
    data_bits.div_ceil(8).max(min_bytes)
}

fn synchsafe_width(value: u64, min_bytes: usize) -> usize {
    let data_bits = 64 - value.leading_zeros() as usize;
    data_bits.div_ceil(7).max(min_bytes)
}

// Minimal two's-complement width in bytes (1..=4).
fn signed_width(value: i32) -> usize {
    let mut width = 1;
    while width < 4 {
        let bits = 8 * width - 1;
        let min = -(1i64 << bits);
        let max = (1i64 << bits) - 1;
        if i64::from(value) >= min && i64::from(value) <= max {
            break;
        }
        width += 1;
    }
    width
}

/// Encodes an unsigned integer big-endian, zero-padded to `min_bytes`.
///
/// A zero value with `min_bytes == 0` emits nothing.
pub fn write_be(value: u64, min_bytes: usize, buf: &mut impl BufMut) {
    let width = unsigned_width(value, min_bytes);
    for i in (0..width).rev() {
        buf.put_u8(if i >= 8 { 0 } else { (value >> (8 * i)) as u8 });
    }
}

/// Encodes an unsigned integer little-endian, zero-padded to `min_bytes`.
pub fn write_le(value: u64, min_bytes: usize, buf: &mut impl BufMut) {
    let width = unsigned_width(value, min_bytes);
    for i in 0..width {
        buf.put_u8(if i >= 8 { 0 } else { (value >> (8 * i)) as u8 });
    }
}

/// Decodes a big-endian unsigned integer from the whole slice.
///
/// The empty slice decodes to 0; more than 8 bytes is an error.
pub fn decode_be(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > 8 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut value = 0u64;
    for &byte in bytes {
        value = (value << 8) | u64::from(byte);
    }
    Ok(value)
}

/// Decodes a little-endian unsigned integer from the whole slice.
pub fn decode_le(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > 8 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut value = 0u64;
    for &byte in bytes.iter().rev() {
        value = (value << 8) | u64::from(byte);
    }
    Ok(value)
}

/// Encodes an unsigned integer big-endian at 7 bits per byte, the top bit
/// of every output byte clear.
pub fn write_synchsafe_be(value: u64, min_bytes: usize, buf: &mut impl BufMut) {
    let width = synchsafe_width(value, min_bytes);
    for i in (0..width).rev() {
        buf.put_u8(if 7 * i >= 64 {
            0
        } else {
            (value >> (7 * i)) as u8 & DATA_BITS_MASK
        });
    }
}

/// Encodes an unsigned integer little-endian at 7 bits per byte.
pub fn write_synchsafe_le(value: u64, min_bytes: usize, buf: &mut impl BufMut) {
    let width = synchsafe_width(value, min_bytes);
    for i in 0..width {
        buf.put_u8(if 7 * i >= 64 {
            0
        } else {
            (value >> (7 * i)) as u8 & DATA_BITS_MASK
        });
    }
}

/// Decodes a big-endian synchsafe integer from the whole slice.
///
/// The top bit of each byte is masked off, per the format. At most 10
/// bytes; data bits beyond 64 positions are an error.
pub fn decode_synchsafe_be(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > 10 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut value = 0u64;
    for &byte in bytes {
        if value >> 57 != 0 {
            return Err(Error::ValueOutOfRange(
                "synchsafe data exceeds 64 bits".into(),
            ));
        }
        value = (value << 7) | u64::from(byte & DATA_BITS_MASK);
    }
    Ok(value)
}

/// Decodes a little-endian synchsafe integer from the whole slice.
pub fn decode_synchsafe_le(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > 10 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut value = 0u64;
    for &byte in bytes.iter().rev() {
        if value >> 57 != 0 {
            return Err(Error::ValueOutOfRange(
                "synchsafe data exceeds 64 bits".into(),
            ));
        }
        value = (value << 7) | u64::from(byte & DATA_BITS_MASK);
    }
    Ok(value)
}

/// Encodes a signed integer big-endian as two's complement, sign-extended
/// to `min_bytes`.
///
/// The format carries signed values in at most 4 bytes; a larger
/// `min_bytes` is an error.
pub fn write_signed_be(value: i32, min_bytes: usize, buf: &mut impl BufMut) -> Result<(), Error> {
    if min_bytes > 4 {
        return Err(Error::ValueOutOfRange(format!(
            "signed width {min_bytes} exceeds 4 bytes"
        )));
    }
    let width = signed_width(value).max(min_bytes);
    let bytes = value.to_be_bytes();
    buf.put_slice(&bytes[4 - width..]);
    Ok(())
}

/// Encodes a signed integer little-endian as two's complement.
pub fn write_signed_le(value: i32, min_bytes: usize, buf: &mut impl BufMut) -> Result<(), Error> {
    if min_bytes > 4 {
        return Err(Error::ValueOutOfRange(format!(
            "signed width {min_bytes} exceeds 4 bytes"
        )));
    }
    let width = signed_width(value).max(min_bytes);
    let bytes = value.to_le_bytes();
    buf.put_slice(&bytes[..width]);
    Ok(())
}

/// Decodes a big-endian two's-complement integer from the whole slice.
///
/// The top bit of the slice's full width is the sign. The empty slice
/// decodes to 0; more than 4 bytes is an error.
pub fn decode_signed_be(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.len() > 4 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    if bytes.is_empty() {
        return Ok(0);
    }
    let mut value = 0u32;
    for &byte in bytes {
        value = (value << 8) | u32::from(byte);
    }
    let bits = 8 * bytes.len();
    if bits < 32 && value >> (bits - 1) != 0 {
        value |= u32::MAX << bits;
    }
    Ok(value as i32)
}

/// Decodes a little-endian two's-complement integer from the whole slice.
pub fn decode_signed_le(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.len() > 4 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut reversed = [0u8; 4];
    let width = bytes.len();
    for (i, &byte) in bytes.iter().enumerate() {
        reversed[width - 1 - i] = byte;
    }
    decode_signed_be(&reversed[..width])
}

/// Writes exactly `width` low-order bytes of `value`, low byte first.
///
/// High bytes beyond `width` are dropped. The inverse is [`decode_le`].
pub fn pack_le(value: u64, width: usize, buf: &mut impl BufMut) {
    for i in 0..width {
        buf.put_u8(if i >= 8 { 0 } else { (value >> (8 * i)) as u8 });
    }
}
