//! Floating-point encoding and decoding.
//!
//! Two unrelated formats live here:
//!
//! - A 6-byte decimal-exponent format: 2 bytes of `sign | 15-bit base-10
//!   exponent` followed by a 4-byte fraction scaled to `2^31 - 1`, all low
//!   byte first. The format is lossy by design (decimal exponent, 31-bit
//!   fraction) and that lossiness is part of its contract.
//! - IEEE-754 binary32/binary64, decoded from first principles rather than
//!   through a hardware reinterpretation, and encoded through explicit
//!   binary-point helpers ([`expand_binary_point`],
//!   [`BinaryPoint::normalize`]).
//!
//! IEEE decode returns the tagged [`Float`] so that NaN and the infinities
//! are distinguishable results, never errors and never silently coerced
//! numbers.

use crate::error::Error;
use bytes::BufMut;

/// Encoded length of the decimal float format.
pub const DECIMAL_LEN: usize = 6;

const SIGN_BIT: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x7FFF;
const FRACTION_SCALE: u32 = 0x7FFF_FFFF;

/// Cap on the binary-point expansion of a fractional part.
pub const MAX_FRACTION_BITS: usize = 128;

/// Result of an IEEE-754 decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float {
    /// An ordinary value, including signed zero and subnormals.
    Finite(f64),
    PosInfinity,
    NegInfinity,
    /// Not a number. Carried as a variant so callers can never mistake it
    /// for a comparable value.
    NaN,
}

impl Float {
    /// Collapses into the native representation, mapping the special
    /// variants to their `f64` counterparts.
    pub fn to_f64(self) -> f64 {
        match self {
            Float::Finite(value) => value,
            Float::PosInfinity => f64::INFINITY,
            Float::NegInfinity => f64::NEG_INFINITY,
            Float::NaN => f64::NAN,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Float::NaN)
    }
}

/// Encodes a finite value in the 6-byte decimal float format.
///
/// The exponent is `1 + floor(log10(|value|))`; the remaining fraction in
/// `[0.1, 1)` is scaled to 31 bits by truncation. Zero encodes as six zero
/// bytes. Non-finite inputs produce an unspecified (but non-panicking)
/// encoding; the format has no representation for them.
pub fn write_decimal(value: f64, buf: &mut impl BufMut) {
    if value == 0.0 {
        buf.put_bytes(0, DECIMAL_LEN);
        return;
    }
    let sign = if value < 0.0 { SIGN_BIT } else { 0 };
    let magnitude = value.abs();
    let exponent = 1 + magnitude.log10().floor() as i32;
    let fraction = (magnitude / 10f64.powi(exponent) * f64::from(FRACTION_SCALE)).floor() as u32;
    buf.put_u16_le(sign | (exponent as u16 & EXPONENT_MASK));
    buf.put_u32_le(fraction);
}

/// Decodes a 6-byte decimal float.
///
/// The 15-bit exponent field is two's complement, so values below 1.0
/// survive the round trip.
pub fn decode_decimal(bytes: &[u8]) -> Result<f64, Error> {
    if bytes.len() != DECIMAL_LEN {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let header = u16::from_le_bytes([bytes[0], bytes[1]]);
    let fraction = u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
    let sign = if header & SIGN_BIT != 0 { -1.0 } else { 1.0 };
    let raw = header & EXPONENT_MASK;
    let exponent = if raw & 0x4000 != 0 {
        i32::from(raw) - 0x8000
    } else {
        i32::from(raw)
    };
    Ok(sign * 10f64.powi(exponent) * f64::from(fraction) / f64::from(FRACTION_SCALE))
}

/// Decodes a big-endian IEEE-754 value: 4 bytes as binary32, 8 bytes as
/// binary64. Any other length is an error.
///
/// The fraction field is evaluated as the exact rational
/// `fraction / (2^fraction_bits - 1)` — both operands are exactly
/// representable, so the result is a single correctly-rounded division.
/// That denominator makes the decode roughly single-precision-equivalent
/// to a hardware reinterpretation, not bit-identical to it.
pub fn decode_ieee_be(bytes: &[u8]) -> Result<Float, Error> {
    let (exponent_bits, fraction_bits) = match bytes.len() {
        4 => (8u32, 23u32),
        8 => (11, 52),
        found => return Err(Error::InvalidLength(found)),
    };
    let mut word = 0u64;
    for &byte in bytes {
        word = (word << 8) | u64::from(byte);
    }

    let total_bits = 8 * bytes.len() as u32;
    let negative = (word >> (total_bits - 1)) & 1 == 1;
    let exponent = (word >> fraction_bits) & ((1 << exponent_bits) - 1);
    let fraction = word & ((1 << fraction_bits) - 1);

    let exponent_max = (1u64 << exponent_bits) - 1;
    let bias = (1i32 << (exponent_bits - 1)) - 1;
    let fraction_value = fraction as f64 / (((1u64 << fraction_bits) - 1) as f64);

    if exponent == exponent_max && fraction != 0 {
        return Ok(Float::NaN);
    }
    if exponent == exponent_max {
        return Ok(if negative {
            Float::NegInfinity
        } else {
            Float::PosInfinity
        });
    }
    let magnitude = if exponent == 0 && fraction == 0 {
        0.0
    } else if exponent == 0 {
        // subnormal
        2f64.powi(-(bias - 1)) * fraction_value
    } else {
        2f64.powi(exponent as i32 - bias) * (1.0 + fraction_value)
    };
    Ok(Float::Finite(if negative { -magnitude } else { magnitude }))
}

/// Decodes a little-endian IEEE-754 value: big-endian decode over the
/// byte-reversed sequence.
pub fn decode_ieee_le(bytes: &[u8]) -> Result<Float, Error> {
    let mut reversed = bytes.to_vec();
    reversed.reverse();
    decode_ieee_be(&reversed)
}

/// A finite number split at the binary point: up to 128 integer bits and
/// up to [`MAX_FRACTION_BITS`] fraction bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPoint {
    negative: bool,
    integer: u128,
    fraction: u128,
    fraction_len: usize,
}

/// A binary-point number in `1.mantissa × 2^exponent` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub negative: bool,
    /// The bits after the leading 1, truncated or zero-padded to the
    /// width requested from [`BinaryPoint::normalize`].
    pub mantissa: u128,
    pub exponent: i32,
}

/// Expands a finite value into its binary-point form: the integer part is
/// truncated off, then the fractional remainder is repeatedly doubled,
/// emitting one fraction bit per step up to [`MAX_FRACTION_BITS`].
pub fn expand_binary_point(value: f64) -> Result<BinaryPoint, Error> {
    if !value.is_finite() {
        return Err(Error::ValueOutOfRange(format!(
            "{value} has no binary-point form"
        )));
    }
    let magnitude = value.abs();
    if magnitude >= 2f64.powi(128) {
        return Err(Error::ValueOutOfRange(format!(
            "integer part of {value} exceeds 128 bits"
        )));
    }
    let integer = magnitude.trunc() as u128;
    let mut remainder = magnitude.fract();
    let mut fraction = 0u128;
    let mut fraction_len = 0;
    while remainder != 0.0 && fraction_len < MAX_FRACTION_BITS {
        remainder *= 2.0;
        fraction = (fraction << 1) | remainder.trunc() as u128;
        remainder = remainder.fract();
        fraction_len += 1;
    }
    Ok(BinaryPoint {
        negative: value.is_sign_negative(),
        integer,
        fraction,
        fraction_len,
    })
}

impl BinaryPoint {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer(&self) -> u128 {
        self.integer
    }

    /// The fraction bits, most significant first, as the low
    /// `fraction_len` bits of the returned value.
    pub fn fraction(&self) -> u128 {
        self.fraction
    }

    pub fn fraction_len(&self) -> usize {
        self.fraction_len
    }

    /// Shifts to `1.mantissa × 2^exponent` form, keeping `mantissa_bits`
    /// bits after the leading 1 (truncated, or zero-padded on the right).
    ///
    /// Zero normalizes to a zero mantissa with exponent 0.
    pub fn normalize(self, mantissa_bits: usize) -> Normalized {
        if self.integer == 0 && self.fraction == 0 {
            return Normalized {
                negative: self.negative,
                mantissa: 0,
                exponent: 0,
            };
        }
        let mut mantissa = 0u128;
        let exponent;
        if self.integer != 0 {
            // The leading 1 is in the integer part: mantissa bits are the
            // remaining integer bits followed by the fraction bits.
            let int_bits = 128 - self.integer.leading_zeros() as usize;
            exponent = (int_bits - 1) as i32;
            for i in 0..mantissa_bits {
                let bit = if i < int_bits - 1 {
                    (self.integer >> (int_bits - 2 - i)) & 1
                } else {
                    let j = i - (int_bits - 1);
                    if j < self.fraction_len {
                        (self.fraction >> (self.fraction_len - 1 - j)) & 1
                    } else {
                        0
                    }
                };
                mantissa = (mantissa << 1) | bit;
            }
        } else {
            // The leading 1 is some number of places past the point.
            let significant = 128 - self.fraction.leading_zeros() as usize;
            let skipped = self.fraction_len - significant;
            exponent = -(skipped as i32 + 1);
            for i in 0..mantissa_bits {
                let bit = if i + 2 <= significant {
                    (self.fraction >> (significant - 2 - i)) & 1
                } else {
                    0
                };
                mantissa = (mantissa << 1) | bit;
            }
        }
        Normalized {
            negative: self.negative,
            mantissa,
            exponent,
        }
    }
}

// Assembles the bit pattern for a normal-range value, NaN, an infinity, or
// signed zero. Values whose biased exponent leaves the normal range, or
// whose leading 1 falls beyond the 128-bit expansion window, are an error;
// the mantissa is truncated, never rounded.
fn ieee_bits(value: f64, exponent_bits: u32, fraction_bits: u32) -> Result<u64, Error> {
    let exponent_max = (1u64 << exponent_bits) - 1;
    let bias = (1i64 << (exponent_bits - 1)) - 1;
    let sign_shift = exponent_bits + fraction_bits;
    let sign = u64::from(value.is_sign_negative());

    if value.is_nan() {
        // canonical quiet NaN
        return Ok((exponent_max << fraction_bits) | (1u64 << (fraction_bits - 1)));
    }
    if value.is_infinite() {
        return Ok((sign << sign_shift) | (exponent_max << fraction_bits));
    }
    if value == 0.0 {
        return Ok(sign << sign_shift);
    }

    let point = expand_binary_point(value)?;
    if point.integer() == 0 && point.fraction() == 0 {
        // The leading 1 falls beyond the expansion window, so there is no
        // mantissa to normalize.
        return Err(Error::ValueOutOfRange(format!(
            "{value} is below the {MAX_FRACTION_BITS}-bit expansion window"
        )));
    }
    let normalized = point.normalize(fraction_bits as usize);
    let biased = i64::from(normalized.exponent) + bias;
    if biased <= 0 || biased as u64 >= exponent_max {
        return Err(Error::ValueOutOfRange(format!(
            "exponent {} does not fit {exponent_bits} bits",
            normalized.exponent
        )));
    }
    Ok((sign << sign_shift) | ((biased as u64) << fraction_bits) | normalized.mantissa as u64)
}

/// Encodes a value as big-endian IEEE-754 binary32.
pub fn write_ieee32_be(value: f64, buf: &mut impl BufMut) -> Result<(), Error> {
    let bits = ieee_bits(value, 8, 23)?;
    buf.put_u32(bits as u32);
    Ok(())
}

/// Encodes a value as little-endian IEEE-754 binary32.
pub fn write_ieee32_le(value: f64, buf: &mut impl BufMut) -> Result<(), Error> {
    let bits = ieee_bits(value, 8, 23)?;
    buf.put_u32_le(bits as u32);
    Ok(())
}

/// Encodes a value as big-endian IEEE-754 binary64.
pub fn write_ieee64_be(value: f64, buf: &mut impl BufMut) -> Result<(), Error> {
    let bits = ieee_bits(value, 11, 52)?;
    buf.put_u64(bits);
    Ok(())
}

/// Encodes a value as little-endian IEEE-754 binary64.
pub fn write_ieee64_le(value: f64, buf: &mut impl BufMut) -> Result<(), Error> {
    let bits = ieee_bits(value, 11, 52)?;
    buf.put_u64_le(bits);
    Ok(())
}
