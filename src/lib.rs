//! # nibpack
//!
//! nibpack is a compact, self-describing binary format for short ordered lists of
//! numbers, booleans, text and nil, small enough for constrained radio payloads such as
//! LoRaWAN uplink and downlink frames.
//!
//! # Usage
//!
//! Build a list of [`Value`]s, pack it with [`encode_full`], and unpack it on the other
//! side with [`decode_full`].
//!
//! ```
//! use nibpack::prelude::*;
//!
//! let reading = vec![Value::from(21.5f32), Value::from(3), Value::from(true), Value::Nil];
//!
//! // encode
//! let frame = encode_full(&reading).unwrap();
//!
//! // 1 header byte, 2 tag bytes, 4 + 4 + 1 payload bytes
//! assert_eq!(frame.len(), 12);
//!
//! // and decode again
//! let decoded = decode_full(&frame).unwrap();
//!
//! assert_eq!(decoded, reading);
//! ```
//!
//! # Values
//!
//! ## Numbers
//!
//! Numbers are either 32-bit floats or 32-bit signed integers. Typed Rust numbers keep
//! their kind; a generic number (an `f64` coming from a script or a JSON document) is
//! classified by [`Value::from_number`]: whole numbers within `i32` range become
//! integers, everything else becomes a float.
//!
//! ```
//! use nibpack::prelude::*;
//!
//! assert_eq!(Value::from_number(12.0), Value::Int(12));
//! assert_eq!(Value::from_number(12.5), Value::Float(12.5));
//! assert_eq!(Value::from_number(1e10), Value::Float(1e10));
//! ```
//!
//! [`Value::Int`] holds an `i64` so that out-of-range integers can be expressed and are
//! rejected by the encoder instead of being truncated.
//!
//! ## Text
//!
//! Text is a sequence of Latin-1 characters, U+0001 to U+00FF. Anything beyond that fails
//! to encode, and so does U+0000, since a zero byte ends the text on the wire.
//!
//! ```
//! use nibpack::prelude::*;
//!
//! assert!(encode_full(&[Value::from("café")]).is_ok());
//! assert!(encode_full(&[Value::from("€")]).is_err());
//! ```
//!
//! # Format
//!
//! This section describes the binary format.
//!
//! ## Layout
//!
//! | Header        | Tags                  | Payload                     |
//! | ---           | ---                   | ---                         |
//! | count, 1 byte | `ceil(count / 2)` bytes | one payload per value, in order |
//!
//! A message holds at most 255 values.
//!
//! ## Tags
//!
//! Every value has a 4-bit tag. Tags are packed two per byte, the first in the high
//! nibble. When the count is odd the low nibble of the last tag byte is padding and is
//! ignored by readers.
//!
//! | Tag    | Kind  | Payload                             |
//! | ---    | ---   | ---                                 |
//! | `0000` | float | 4 bytes, IEEE 754 binary32, little endian |
//! | `0001` | int   | 4 bytes, two's complement, little endian |
//! | `0010` | nil   | none                                |
//! | `0011` | bool  | 1 byte, `0x01` or `0x00`            |
//! | `0100` | text  | the character codes, then `0x00`    |
//!
//! There is no length field for text; it ends at the first zero byte.
//!
//! ## Example
//!
//! `[3, true, "ab", nil]` packs as:
//!
//! ```text
//! 04          count
//! 13 42       tags: int bool, text nil
//! 03 00 00 00 int 3
//! 01          true
//! 61 62 00    "ab"
//! ```

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[macro_use]
mod util;

pub mod encoding;
pub mod errors;
pub mod float;
pub mod hex;
pub mod prelude;

pub use encoding::{decode, decode_first, decode_full, encode, encode_full};
pub use errors::*;
pub use hex::{decode_hex, encode_hex};

use encoding::tags::Tag;
use num_traits::ToPrimitive;

#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// [`Value`] and its variants.
///
/// # Example
///
/// ```
/// use nibpack::prelude::*;
///
/// let b = Value::Bool(true);
///
/// let val = match b {
///     Value::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Value {
    /// Single precision float.
    Float(f32),
    /// Integer. Only values within `i32` range can be encoded.
    Int(i64),
    /// Nil. Corresponds to [`None`].
    Nil,
    /// Boolean.
    Bool(bool),
    /// Latin-1 text.
    Text(String),
}

use Value::*;

impl Value {
    /// Classifies a generic number: a whole number within `i32` range is an [`Int`],
    /// anything else (including NaN and the infinities) is a [`Float`].
    ///
    /// # Example
    ///
    /// ```
    /// use nibpack::Value;
    ///
    /// assert_eq!(Value::from_number(-7.0), Value::Int(-7));
    /// assert_eq!(Value::from_number(0.25), Value::Float(0.25));
    /// ```
    pub fn from_number(n: f64) -> Value {
        if n.fract() == 0.0 {
            if let Some(i) = n.to_i32() {
                return Int(i as i64);
            }
        }
        Float(n as f32)
    }

    /// The tag this value is packed under.
    pub fn tag(&self) -> Tag {
        match self {
            Float(_) => Tag::Float,
            Int(_) => Tag::Int,
            Nil => Tag::Nil,
            Bool(_) => Tag::Bool,
            Text(_) => Tag::Text,
        }
    }

    /// Indicates whether a value is [`Nil`].
    ///
    /// # Example
    ///
    /// ```
    /// use nibpack::Value::Nil;
    ///
    /// assert!(Nil.is_nil());
    /// ```
    pub fn is_nil(&self) -> bool {
        match self {
            Nil => true,
            _ => false,
        }
    }

    /// Tries to convert a value to a [`bool`].
    /// This will return a [`ConversionError`] if the value is not a [`Bool`].
    pub fn to_bool(&self) -> Result<bool, ConversionError> {
        match self {
            Bool(b) => Ok(*b),
            _ => Err(ConversionError::new("Value is not `Bool`")),
        }
    }

    /// Tries to convert a value to an integer.
    /// This will return a [`ConversionError`] if the value is not an [`Int`].
    pub fn to_int(&self) -> Result<i64, ConversionError> {
        match self {
            Int(i) => Ok(*i),
            _ => Err(ConversionError::new("Value is not `Int`")),
        }
    }

    /// Tries to convert a value to a float.
    /// This will return a [`ConversionError`] if the value is not a [`Float`].
    pub fn to_float(&self) -> Result<f32, ConversionError> {
        match self {
            Float(f) => Ok(*f),
            _ => Err(ConversionError::new("Value is not `Float`")),
        }
    }

    /// Tries to borrow a value as text.
    /// This will return a [`ConversionError`] if the value is not [`Text`].
    ///
    /// # Example
    ///
    /// ```
    /// use nibpack::Value;
    ///
    /// let t = Value::from("on");
    ///
    /// assert_eq!(t.to_text().unwrap(), "on");
    /// assert!(Value::Nil.to_text().is_err());
    /// ```
    pub fn to_text(&self) -> Result<&str, ConversionError> {
        match self {
            Text(s) => Ok(s),
            _ => Err(ConversionError::new("Value is not `Text`")),
        }
    }

    /// Consumes a value, converting it into a [`String`].
    /// This will return a [`ConversionError`] if the value is not [`Text`].
    pub fn into_text(self) -> Result<String, ConversionError> {
        match self {
            Text(s) => Ok(s),
            _ => Err(ConversionError::new("Value is not `Text`")),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Float(x) => write!(f, "{}", x),
            Int(i) => write!(f, "{}", i),
            Nil => write!(f, "NIL"),
            Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Text(s) => write!(f, "{:?}", s),
        }
    }
}

from_fn!(Value, bool, Bool);
from_fn!(Value, f32, Float);
from_fn!(Value, f64, Value::from_number);
from_fn!(Value, i64, Int);
from_fn!(Value, String, Text);
from_fn!(Value, char, |c: char| Text(c.to_string()));
from_fn!(Value, (), |_| Nil);

from_as!(Value, i8, i64);
from_as!(Value, i16, i64);
from_as!(Value, i32, i64);
from_as!(Value, u8, i64);
from_as!(Value, u16, i64);
from_as!(Value, u32, i64);

impl From<&str> for Value {
    fn from(s: &str) -> Value { Text(s.to_string()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Value {
        match o {
            Some(t) => t.into(),
            None => Nil,
        }
    }
}
