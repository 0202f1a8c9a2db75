//! The hex string form of a message.
//!
//! Scripts on the node side hand messages around as strings of uppercase hex digit pairs,
//! two characters per byte, with the same layout as the binary form.
//!
//! ```
//! use nibpack::prelude::*;
//!
//! let hex = encode_hex(&[Value::from(1), Value::Nil]).unwrap();
//! assert_eq!(hex, "021201000000");
//!
//! assert_eq!(decode_hex(&hex).unwrap(), vec![Value::Int(1), Value::Nil]);
//! ```

use crate::{encoding::Ser, errors::*, Value};

/// Formats bytes as uppercase hex digit pairs.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    bytes
        .iter()
        .for_each(|b| s.push_str(&format!("{:02X}", b)));
    s
}

/// Parses hex digit pairs, either case, back into bytes.
///
/// # Errors
///
/// Returns [`DecodingError::InvalidHex`] at the first non-hex character, or at the last
/// position when the number of digits is odd.
pub fn from_hex(s: &str) -> Result<Vec<u8>, DecodingError> {
    let digits = s.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(DecodingError::InvalidHex {
            position: digits.len() - 1,
        });
    }

    let digit = |position: usize| -> Result<u8, DecodingError> {
        (digits[position] as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(DecodingError::InvalidHex { position })
    };

    (0..digits.len())
        .step_by(2)
        .map(|i| -> Result<u8, DecodingError> { Ok(digit(i)? << 4 | digit(i + 1)?) })
        .collect()
}

/// Encodes values straight into the hex string form.
pub fn encode_hex<T: Ser>(values: &[T]) -> Result<String, EncodingError> {
    crate::encode_full(values).map(|bs| to_hex(&bs))
}

/// Decodes a message from its hex string form.
pub fn decode_hex(s: &str) -> Result<Vec<Value>, DecodingError> {
    crate::decode_full(from_hex(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_pairs() {
        assert_eq!(to_hex(&[0x04, 0x13, 0xab, 0x00]), "0413AB00");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn either_case() {
        assert_eq!(from_hex("0413ab00").unwrap(), vec![0x04, 0x13, 0xab, 0x00]);
        assert_eq!(from_hex("0413AB00").unwrap(), vec![0x04, 0x13, 0xab, 0x00]);
        assert!(from_hex("").unwrap().is_empty());
    }

    #[test]
    fn bad_digits() {
        assert_eq!(
            from_hex("04G3"),
            Err(DecodingError::InvalidHex { position: 2 })
        );
        assert_eq!(
            from_hex("041"),
            Err(DecodingError::InvalidHex { position: 2 })
        );
        // multi-byte characters are never digits
        assert_eq!(
            from_hex("0é0"),
            Err(DecodingError::InvalidHex { position: 1 })
        );
    }

    #[test]
    fn scenario() {
        let vs = vec![
            Value::from(3),
            Value::from(true),
            Value::from("ab"),
            Value::Nil,
        ];
        let hex = encode_hex(&vs).unwrap();
        assert_eq!(hex, "0413420300000001616200");
        assert_eq!(decode_hex(&hex).unwrap(), vs);
    }

    #[test]
    fn hex_errors_surface() {
        assert_eq!(
            decode_hex("01"),
            Err(DecodingError::TruncatedInput {
                needed: 1,
                available: 0
            })
        );
        assert!(encode_hex(&[Value::from("\u{2603}")]).is_err());
    }
}
