#![no_main]

use arbitrary::Arbitrary;
use byteform_codec::{bits, endian, float, guid::Guid};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    value: u64,
    signed: i32,
    min_bytes: u8,
    float_bits: u64,
    bytes: Vec<u8>,
}

fn roundtrip_unsigned(value: u64, min_bytes: usize) {
    let mut buf = Vec::new();
    endian::write_be(value, min_bytes, &mut buf);
    assert_eq!(
        endian::decode_be(&buf).expect("Failed to decode a successfully encoded input!"),
        value
    );

    let mut buf = Vec::new();
    endian::write_le(value, min_bytes, &mut buf);
    assert_eq!(
        endian::decode_le(&buf).expect("Failed to decode a successfully encoded input!"),
        value
    );
}

fn roundtrip_synchsafe(value: u64, min_bytes: usize) {
    let mut buf = Vec::new();
    endian::write_synchsafe_be(value, min_bytes, &mut buf);
    assert!(buf.iter().all(|byte| byte & 0x80 == 0));
    assert_eq!(
        endian::decode_synchsafe_be(&buf).expect("Failed to decode a synchsafe encoding!"),
        value
    );

    let mut buf = Vec::new();
    endian::write_synchsafe_le(value, min_bytes, &mut buf);
    assert_eq!(
        endian::decode_synchsafe_le(&buf).expect("Failed to decode a synchsafe encoding!"),
        value
    );
}

fn roundtrip_signed(value: i32, min_bytes: usize) {
    let mut buf = Vec::new();
    endian::write_signed_be(value, min_bytes, &mut buf).expect("width is within bounds");
    assert_eq!(
        endian::decode_signed_be(&buf).expect("Failed to decode a signed encoding!"),
        value
    );

    let mut buf = Vec::new();
    endian::write_signed_le(value, min_bytes, &mut buf).expect("width is within bounds");
    assert_eq!(
        endian::decode_signed_le(&buf).expect("Failed to decode a signed encoding!"),
        value
    );
}

fn roundtrip_bits(value: u64, bytes: &[u8]) {
    assert_eq!(
        bits::bits_to_u64(&bits::u64_to_bits(value)).expect("minimal bit-string must decode"),
        value
    );
    assert_eq!(
        bits::bits_to_bytes(&bits::bytes_to_bits(bytes)).expect("byte bit-string must decode"),
        bytes
    );
}

fn roundtrip_guid(bytes: &[u8]) {
    let Ok(guid) = Guid::from_bytes(bytes) else {
        return;
    };
    let parsed: Guid = guid
        .to_string()
        .parse()
        .expect("Failed to parse a rendered GUID!");
    assert_eq!(parsed, guid);
}

fn roundtrip_floats(float_bits: u64) {
    let value = f64::from_bits(float_bits);
    if value.is_finite() {
        let mut buf = Vec::new();
        float::write_decimal(value, &mut buf);
        float::decode_decimal(&buf).expect("6-byte encoding must decode");
    }

    let mut buf = Vec::new();
    if float::write_ieee64_be(value, &mut buf).is_ok() {
        float::decode_ieee_be(&buf).expect("binary64 encoding must decode");
    }
}

// Decoders must reject or decode arbitrary input, never panic.
fn decode_arbitrary(bytes: &[u8]) {
    let _ = endian::decode_be(bytes);
    let _ = endian::decode_le(bytes);
    let _ = endian::decode_synchsafe_be(bytes);
    let _ = endian::decode_synchsafe_le(bytes);
    let _ = endian::decode_signed_be(bytes);
    let _ = endian::decode_signed_le(bytes);
    let _ = float::decode_ieee_be(bytes);
    let _ = float::decode_ieee_le(bytes);
    let _ = float::decode_decimal(bytes);
    let _ = Guid::from_bytes(bytes);
}

fuzz_target!(|input: Input| {
    roundtrip_unsigned(input.value, usize::from(input.min_bytes % 9));
    roundtrip_synchsafe(input.value, usize::from(input.min_bytes % 11));
    roundtrip_signed(input.signed, usize::from(input.min_bytes % 5));
    roundtrip_bits(input.value, &input.bytes);
    roundtrip_guid(&input.bytes);
    roundtrip_floats(input.float_bits);
    decode_arbitrary(&input.bytes);
});
