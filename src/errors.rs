use failure::Fail;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when a list of values cannot be packed.
pub enum EncodingError {
    /// The header is a single byte, so a message holds at most 255 values.
    #[fail(display = "cannot pack {} values, at most 255 fit in a message", count)]
    CapacityExceeded {
        /// Number of values that were given.
        count: usize,
    },
    /// An integer value does not fit in 32 bits signed.
    #[fail(
        display = "value {} is the integer {}, which does not fit in 32 bits",
        index, value
    )]
    IntegerOutOfRange {
        /// Position of the offending value.
        index: usize,
        /// The integer itself.
        value: i64,
    },
    /// Text may only hold non-zero characters in the Latin-1 range.
    #[fail(
        display = "value {} contains {:?}, text is restricted to U+0001..=U+00FF",
        index, character
    )]
    UnsupportedCharacter {
        /// Position of the offending value.
        index: usize,
        /// The first character that cannot be packed.
        character: char,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when decoding fails.
pub enum DecodingError {
    /// The buffer ended before a header, tag byte or fixed-width payload was complete.
    #[fail(
        display = "tried to read {} bytes from buffer of size {}",
        needed, available
    )]
    TruncatedInput {
        /// Bytes required by the read that failed.
        needed: usize,
        /// Bytes that were left in the buffer.
        available: usize,
    },
    /// A text field reached the end of the buffer without a zero terminator.
    #[fail(display = "text value {} has no terminating zero byte", index)]
    UnterminatedText {
        /// Position of the text value.
        index: usize,
    },
    /// A tag nibble outside the five known kinds.
    #[fail(display = "found unknown tag {:#x} for value {}", tag, index)]
    UnknownTag {
        /// Position of the value carrying the tag.
        index: usize,
        /// The raw nibble.
        tag: u8,
    },
    /// A hex-encoded message held an odd number of digits or a non-hex character.
    #[fail(display = "invalid hex digit at position {}", position)]
    InvalidHex {
        /// Character offset of the bad digit.
        position: usize,
    },
}

#[derive(Debug, Clone, Default)]
/// An error encountered when a [`Value`](crate::Value) is not of the requested kind.
pub struct ConversionError(pub String);

impl ConversionError {
    /// Creates a new `ConversionError`
    ///
    /// # Arguments
    ///
    /// * `s: & str` - The message associated with the error.
    pub fn new(s: &str) -> Self { ConversionError(s.to_string()) }
}

impl Fail for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Conversion failed with error: {error}", error = self.0)
    }
}
