//! Base58 encoding and decoding.
//!
//! Uses the Bitcoin alphabet (excludes 0, O, I, l to avoid confusion).
//! Leading zero bytes are significant and map 1:1 to leading '1'
//! characters, so every buffer round-trips exactly.

#![forbid(unsafe_code)]

use chainlab_core::{Error, Result};

/// Base58 alphabet (Bitcoin style), digit value = index.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Look up the digit value of a Base58 character.
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET.iter().position(|&a| a == c as u8).map(|i| i as u8)
}

/// Encode bytes to a Base58 string.
///
/// Empty input encodes to the empty string. Encoding is total; every
/// byte value is valid input.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    // Upper bound on output digits: log(256)/log(58) ≈ 1.37 per byte
    let size = (data.len() * 138 / 100) + 1;
    let mut digits = vec![0u8; size];

    // Multiply-accumulate in base 58, most-significant byte first
    for &byte in data {
        let mut carry = byte as u32;
        for digit in digits.iter_mut().rev() {
            carry += (*digit as u32) * 256;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
    }

    // The buffer was over-allocated; skip the zero digits at the front
    let first_nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());

    let mut result = String::with_capacity(leading_zeros + digits.len() - first_nonzero);
    for _ in 0..leading_zeros {
        result.push('1');
    }
    for &digit in &digits[first_nonzero..] {
        result.push(ALPHABET[digit as usize] as char);
    }
    result
}

/// Decode a Base58 string back into bytes.
///
/// Empty input decodes to an empty buffer. Fails with
/// [`Error::InvalidCharacter`] on the first character outside the
/// alphabet; no partial buffer is returned.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let leading_ones = text.bytes().take_while(|&b| b == b'1').count();

    // Upper bound on output bytes: log(58)/log(256) ≈ 0.733 per char
    let size = (text.len() * 733 / 1000) + 1;
    let mut bytes = vec![0u8; size];

    // Multiply-accumulate in base 256, most-significant digit first
    for c in text.chars() {
        let value = digit_value(c).ok_or(Error::InvalidCharacter(c))?;
        let mut carry = value as u32;
        for byte in bytes.iter_mut().rev() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        debug_assert_eq!(carry, 0, "decode buffer sized too small");
    }

    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());

    let mut result = vec![0u8; leading_ones];
    result.extend_from_slice(&bytes[first_nonzero..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_zero() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(encode(&[0, 0, 0, 1]), "1112");
        assert_eq!(decode("1112").unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_leading_zero_count_preserved() {
        // Two leading zero bytes give exactly two leading '1' chars
        let encoded = encode(&[0x00, 0x00, 0x01]);
        assert!(encoded.starts_with("11"));
        assert!(!encoded.starts_with("111"));
        assert_eq!(&encoded[2..], encode(&[0x01]));
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(decode("2NEpo7TZRRrLZSi2U").unwrap(), b"Hello World!");
    }

    #[test]
    fn test_known_address_vector() {
        // Version byte + hash160 + checksum of a well-known P2PKH address
        let raw = hex::decode("00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31c7f18fe8").unwrap();
        assert_eq!(encode(&raw), "1PMycacnJaSqwwJqjawXBEHAN95N4LdYkG");
        assert_eq!(decode("1PMycacnJaSqwwJqjawXBEHAN95N4LdYkG").unwrap(), raw);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for c in ['0', 'O', 'I', 'l'] {
            let err = decode(&c.to_string()).unwrap_err();
            assert_eq!(err, chainlab_core::Error::InvalidCharacter(c));
        }
        assert_eq!(
            decode("0OIl").unwrap_err(),
            chainlab_core::Error::InvalidCharacter('0')
        );
        // Non-ASCII must not panic the lookup
        assert!(decode("2NEpo7TZé").is_err());
    }

    #[test]
    fn test_roundtrip_bytes() {
        let cases: &[&[u8]] = &[
            b"a",
            b"abc",
            b"Hello World!",
            &[0],
            &[0, 0, 0],
            &[0, 0, 0, 1, 2, 3],
            &[0xff; 32],
            &[0x00, 0xff, 0x00, 0xff],
        ];
        for data in cases {
            assert_eq!(decode(&encode(data)).unwrap(), *data, "data {:?}", data);
        }
    }

    #[test]
    fn test_roundtrip_strings() {
        // Valid strings with no leading-'1' ambiguity re-encode exactly
        for s in ["2", "z", "11", "1z", "JxF12TrwUP45BMd", "2NEpo7TZRRrLZSi2U"] {
            assert_eq!(encode(&decode(s).unwrap()), s);
        }
    }

    #[test]
    fn test_against_bs58_crate() {
        let cases: &[&[u8]] = &[
            b"",
            b"a",
            b"abc",
            b"Hello World!",
            &[0],
            &[0, 0, 0],
            &[0, 0, 0, 1, 2, 3],
            &[0xff; 32],
            &[0x00, 0xff, 0x00, 0xff],
        ];
        for data in cases {
            let ours = encode(data);
            let reference = bs58::encode(data).into_string();
            assert_eq!(ours, reference, "mismatch for data {:?}", data);
        }
    }
}
