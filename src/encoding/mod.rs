//! # nibpack binary encoder and decoder
//!
//! Encode and decode functions for packed value lists.
//!
//! # Example
//!
//! ```
//! use nibpack::prelude::*;
//!
//! // a reading from a sensor node
//! let reading = vec![Value::from(20), Value::from("ok")];
//!
//! // and we've encoded it
//! let enc_full = encode_full(&reading).unwrap();
//!
//! // let's encode it a different way too
//!
//! // create a buffer
//! let out: &mut Vec<u8> = &mut Vec::new();
//!
//! // and we've encoded it a different way
//! encode(&reading, out).unwrap();
//!
//! // but they are equivalent
//! assert_eq!(*out, enc_full);
//!
//! // Note: decoding returns a `Result`
//! let dec = decode_full(&enc_full).unwrap();
//!
//! // success!
//! assert_eq!(dec, reading);
//! ```

use crate::{errors::*, float, Value};
use bytes::Bytes;
use tracing::{debug, trace};

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
pub mod tags;
use tags::*;
pub use tags::Tag;
mod constants;
use constants::*;

/// Encode values into their binary representation, storing output in `out`.
///
/// # Arguments
///
/// * `values: &[T]` - The values to be encoded, in message order.
/// * `out: &mut S` - A mutable reference to a [`Serializer`] where the encoder output
///   will be stored.
///
/// # Errors
///
/// Fails when more than 255 values are given, when an integer does not fit in 32 bits,
/// or when text holds a character outside U+0001 to U+00FF. Every value is checked before
/// anything is written, so `out` is untouched on failure.
///
/// # Example
///
/// ```
/// use nibpack::prelude::*;
///
/// // output buffer
/// let out: &mut Vec<u8> = &mut Vec::new();
///
/// // encode values
/// encode(&[Value::Nil], out).unwrap();
///
/// assert_eq!(*out, vec![0x01, 0x20]);
/// ```
pub fn encode<T: Ser, S: Serializer>(values: &[T], out: &mut S) -> Result<(), EncodingError> {
    if values.len() > MAX_VALUES {
        return Err(EncodingError::CapacityExceeded {
            count: values.len(),
        });
    }

    for (index, v) in values.iter().enumerate() {
        v.check(index)?;
    }

    let tags: Vec<Tag> = values.iter().map(Ser::tag).collect();
    out.put_u8(values.len() as u8);
    out.put_slice(&pack_tags(&tags));

    for (index, v) in values.iter().enumerate() {
        v.ser(index, out)?;
    }
    Ok(())
}

/// Encodes values into a vector of bytes.
///
/// # Example
///
/// ```
/// use nibpack::prelude::*;
///
/// let enc = encode_full(&[Value::from(3), Value::from(true), Value::from("ab"), Value::Nil])
///     .unwrap();
///
/// assert_eq!(enc, vec![0x04, 0x13, 0x42, 3, 0, 0, 0, 0x01, 0x61, 0x62, 0x00]);
/// ```
pub fn encode_full<T: Ser>(values: &[T]) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::new();
    encode(values, &mut out)?;
    trace!(values = values.len(), bytes = out.len(), "encoded message");
    Ok(out)
}

/// Tries to decode one message from `data`.
///
/// Exactly the bytes of the message are consumed; anything following it stays in `data`.
///
/// # Example
///
/// ```
/// use nibpack::{encoding::MessageBytes, prelude::*};
///
/// let data = &mut MessageBytes::from(vec![0x01, 0x30, 0x01, 0xaa]);
///
/// assert_eq!(decode(data).unwrap(), vec![Value::Bool(true)]);
/// assert_eq!(data.remaining(), 1);
/// ```
pub fn decode<D: Deserializer>(data: &mut D) -> Result<Vec<Value>, DecodingError> {
    let count = data.read_count()?;
    let tags = data.read_tags(count)?;

    let mut values = Vec::with_capacity(count);
    for (index, tag) in tags.into_iter().enumerate() {
        values.push(data.read_value(index, tag)?);
    }
    Ok(values)
}

/// Decodes a buffer into values, returns an error if decoding fails.
///
/// Bytes after the end of the message are ignored.
///
/// # Example
///
/// ```
/// use nibpack::prelude::*;
///
/// let dec = decode_full(&[0x02, 0x42, 0x61, 0x62, 0x00]).unwrap();
///
/// assert_eq!(dec, vec![Value::from("ab"), Value::Nil]);
/// ```
pub fn decode_full<B: AsRef<[u8]>>(bs: B) -> Result<Vec<Value>, DecodingError> {
    let bs = bs.as_ref();
    let data = &mut MessageBytes::from(Bytes::copy_from_slice(bs));

    match decode(data) {
        Ok(values) => {
            if data.remaining() > 0 {
                debug!(trailing = data.remaining(), "ignoring bytes after message");
            }
            trace!(values = values.len(), bytes = bs.len(), "decoded message");
            Ok(values)
        }
        Err(e) => {
            debug!(error = %e, bytes = bs.len(), "failed to decode message");
            Err(e)
        }
    }
}

/// Decodes only the first value of a message.
///
/// Returns the first value together with a message holding the remaining values, or
/// `None` in place of that message when there were no others. An empty message gives
/// `Ok(None)`. The whole message is validated before anything is returned, and the
/// remaining payloads are copied over unchanged.
///
/// # Example
///
/// ```
/// use nibpack::prelude::*;
///
/// let enc = encode_full(&[Value::from("cmd"), Value::from(1), Value::from(2)]).unwrap();
///
/// let (first, rest) = decode_first(&enc).unwrap().unwrap();
/// assert_eq!(first, Value::from("cmd"));
///
/// let rest = rest.unwrap();
/// assert_eq!(rest, encode_full(&[Value::from(1), Value::from(2)]).unwrap());
/// ```
pub fn decode_first<B: AsRef<[u8]>>(
    bs: B,
) -> Result<Option<(Value, Option<Vec<u8>>)>, DecodingError> {
    let data = &mut MessageBytes::from(Bytes::copy_from_slice(bs.as_ref()));

    let count = data.read_count()?;
    let tags = data.read_tags(count)?;

    let (first_tag, rest_tags) = match tags.split_first() {
        Some(split) => split,
        None => return Ok(None),
    };

    let first = data.read_value(0, *first_tag)?;
    let rest_start = data.clone();
    for (index, tag) in rest_tags.iter().enumerate() {
        data.read_value(index + 1, *tag)?;
    }

    if rest_tags.is_empty() {
        return Ok(Some((first, None)));
    }

    let payload_len = rest_start.remaining() - data.remaining();
    let mut rest = Vec::with_capacity(1 + packed_len(rest_tags.len()) + payload_len);
    rest.put_u8(rest_tags.len() as u8);
    rest.put_slice(&pack_tags(rest_tags));
    rest.put_slice(&rest_start[..payload_len]);
    Ok(Some((first, Some(rest))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Vec<Value> {
        vec![
            Value::from(3),
            Value::from(true),
            Value::from("ab"),
            Value::Nil,
        ]
    }

    #[test]
    fn scenario_layout() {
        let out = encode_full(&values()).unwrap();

        // header
        assert_eq!(out[0], 0x04);
        // tags
        assert_eq!(out[1..3], [0x13, 0x42]);
        // int 3
        assert_eq!(out[3..7], [3, 0, 0, 0]);
        // true
        assert_eq!(out[7], 0x01);
        // "ab"
        assert_eq!(out[8..], [0x61, 0x62, 0x00]);
        assert_eq!(out.len(), 11);

        assert_eq!(decode_full(&out).unwrap(), values());
    }

    #[test]
    fn empty_message() {
        let out = encode_full::<Value>(&[]).unwrap();
        assert_eq!(out, vec![0x00]);
        assert!(decode_full(&out).unwrap().is_empty());
    }

    #[test]
    fn float_layout() {
        let out = encode_full(&[Value::Float(1.0)]).unwrap();
        assert_eq!(out, vec![0x01, 0x00, 0, 0, 0b1000_0000, 0b0011_1111]);

        let out = encode_full(&[Value::Float(-0.0)]).unwrap();
        assert_eq!(out[2..], [0, 0, 0, 0b1_000_0000]);
    }

    #[test]
    fn negative_int_layout() {
        let out = encode_full(&[Value::Int(-1)]).unwrap();
        assert_eq!(out, vec![0x01, 0x10, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(decode_full(&out).unwrap(), vec![Value::Int(-1)]);
    }

    #[test]
    fn capacity() {
        let many = vec![Value::Nil; 255];
        let out = encode_full(&many).unwrap();
        assert_eq!(out.len(), 1 + 128);
        assert_eq!(out[0], 255);
        assert_eq!(decode_full(&out).unwrap().len(), 255);

        let too_many = vec![Value::Nil; 256];
        assert_eq!(
            encode_full(&too_many),
            Err(EncodingError::CapacityExceeded { count: 256 })
        );
    }

    #[test]
    fn encode_errors_carry_position() {
        let vs = vec![Value::Nil, Value::Int(i64::max_value())];
        assert_eq!(
            encode_full(&vs),
            Err(EncodingError::IntegerOutOfRange {
                index: 1,
                value: i64::max_value()
            })
        );

        let vs = vec![Value::from("ok"), Value::Bool(false), Value::from("日本")];
        assert_eq!(
            encode_full(&vs),
            Err(EncodingError::UnsupportedCharacter {
                index: 2,
                character: '日'
            })
        );
    }

    #[test]
    fn failed_encode_leaves_output_alone() {
        let out: &mut Vec<u8> = &mut Vec::new();
        assert_eq!(
            encode(&[Value::from(1), Value::Int(1 << 40)], out),
            Err(EncodingError::IntegerOutOfRange {
                index: 1,
                value: 1 << 40
            })
        );
        assert!(out.is_empty());

        let mut sink = bytes::BytesMut::new();
        sink.extend_from_slice(&[0xaa]);
        let vs = [Value::Nil, Value::from("ok"), Value::from("\u{20ac}")];
        assert!(encode(&vs, &mut sink).is_err());
        assert_eq!(&sink[..], &[0xaa]);
    }

    #[test]
    fn encode_by_reference() {
        let vs = values();
        let refs: Vec<&Value> = vs.iter().collect();
        assert_eq!(encode_full(&refs).unwrap(), encode_full(&vs).unwrap());
    }

    #[test]
    fn decode_errors() {
        assert_eq!(
            decode_full(Vec::<u8>::new()),
            Err(DecodingError::TruncatedInput {
                needed: 1,
                available: 0
            })
        );
        // int missing a byte
        assert_eq!(
            decode_full(&[0x01, 0x10, 1, 2, 3]),
            Err(DecodingError::TruncatedInput {
                needed: 4,
                available: 3
            })
        );
        // text without terminator
        assert_eq!(
            decode_full(&[0x02, 0x34, 0x01, 0x61]),
            Err(DecodingError::UnterminatedText { index: 1 })
        );
        // tag 5 is not a kind
        assert_eq!(
            decode_full(&[0x02, 0x25]),
            Err(DecodingError::UnknownTag { index: 1, tag: 5 })
        );
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut out = encode_full(&values()).unwrap();
        out.extend_from_slice(&[0xde, 0xad]);
        assert_eq!(decode_full(&out).unwrap(), values());
    }

    #[test]
    fn bytes_mut_output() {
        let mut out = bytes::BytesMut::new();
        encode(&values(), &mut out).unwrap();
        let frozen = out.finalize();
        assert_eq!(&frozen[..], &encode_full(&values()).unwrap()[..]);

        let data = &mut MessageBytes::from(frozen);
        assert_eq!(decode(data).unwrap(), values());
        assert_eq!(data.remaining(), 0);
    }

    #[test]
    fn first_of_many() {
        let enc = encode_full(&values()).unwrap();
        let (first, rest) = decode_first(&enc).unwrap().unwrap();
        assert_eq!(first, Value::from(3));

        let rest = rest.unwrap();
        assert_eq!(rest, encode_full(&values()[1..]).unwrap());
        assert_eq!(decode_full(&rest).unwrap(), values()[1..].to_vec());
    }

    #[test]
    fn first_of_one_and_none() {
        let enc = encode_full(&[Value::from("solo")]).unwrap();
        assert_eq!(
            decode_first(&enc).unwrap(),
            Some((Value::from("solo"), None))
        );

        assert_eq!(decode_first(&[0x00]).unwrap(), None);
    }

    #[test]
    fn first_validates_whole_message() {
        let mut enc = encode_full(&values()).unwrap();
        enc.pop();
        assert_eq!(
            decode_first(&enc),
            Err(DecodingError::UnterminatedText { index: 2 })
        );
    }
}
