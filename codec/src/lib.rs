//! Convert between raw bytes and numeric or textual forms.
//!
//! # Overview
//!
//! A collection of deterministic, stateless conversions for code that needs
//! exact control over byte order, bit width, and non-standard numeric
//! encodings — tag readers, chunked media containers, and other file-format
//! parsers that frame their own fields and hand the raw bytes here.
//!
//! Everything is a pure function (or a thin newtype over one): no I/O, no
//! retained state, and every operation is safe to call from any number of
//! threads.
//!
//! # What's included
//!
//! - Fixed-width integers in either byte order, plus the synchsafe
//!   (7-bits-per-byte) and signed two's-complement interpretations
//!   ([`endian`])
//! - IEEE-754 binary32/binary64 decode built from first principles, with
//!   NaN and the infinities surfaced as tagged results, and a lossy 6-byte
//!   decimal-exponent float format ([`float`])
//! - Mixed-endian GUIDs and their canonical hyphenated form ([`guid`])
//! - Textual bit-strings ([`bits`]), carry-propagating bitwise arithmetic
//!   ([`arith`]), and diagnostic byte dumpers ([`dump`])
//!
//! # Example
//!
//! ```
//! use byteform_codec::{endian, float::{self, Float}, guid::Guid};
//!
//! // An ID3v2.4 frame size is synchsafe: 7 usable bits per byte.
//! let mut size = Vec::new();
//! endian::write_synchsafe_be(255, 4, &mut size);
//! assert_eq!(size, [0x00, 0x00, 0x01, 0x7F]);
//! assert_eq!(endian::decode_synchsafe_be(&size)?, 255);
//!
//! // An ASF object header starts with a mixed-endian GUID.
//! let header: Guid = "75B22630-668E-11CF-A6D9-00AA0062CE6C".parse()?;
//! assert_eq!(&header.as_bytes()[..4], &[0x30, 0x26, 0xB2, 0x75][..]);
//!
//! // IEEE-754 decode keeps special values distinguishable from numbers.
//! assert_eq!(
//!     float::decode_ieee_be(&[0x3F, 0x80, 0x00, 0x00])?,
//!     Float::Finite(1.0)
//! );
//! assert!(float::decode_ieee_be(&[0x7F, 0xC0, 0x00, 0x00])?.is_nan());
//! # Ok::<(), byteform_codec::Error>(())
//! ```

pub mod arith;
pub mod bits;
pub mod dump;
pub mod endian;
pub mod error;
pub mod float;
pub mod guid;

// Re-export main types
pub use error::Error;
pub use float::Float;
pub use guid::Guid;
