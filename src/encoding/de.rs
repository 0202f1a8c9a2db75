use super::*;
use std::{convert::TryFrom, ops::Deref};

/// A read cursor over an encoded message.
///
/// Reads consume from the front; whatever a completed [`decode`] leaves behind is not
/// part of the message.
#[derive(Clone, Debug, Default)]
pub struct MessageBytes(Bytes);

impl Deref for MessageBytes {
    type Target = Bytes;
    fn deref(&self) -> &Bytes { &self.0 }
}

impl From<Bytes> for MessageBytes {
    fn from(b: Bytes) -> Self { MessageBytes(b) }
}

impl From<Vec<u8>> for MessageBytes {
    fn from(v: Vec<u8>) -> Self { MessageBytes(Bytes::from(v)) }
}

impl From<&'static [u8]> for MessageBytes {
    fn from(s: &'static [u8]) -> Self { MessageBytes(Bytes::from_static(s)) }
}

impl MessageBytes {
    /// Number of bytes not read yet.
    pub fn remaining(&self) -> usize { self.0.len() }

    #[inline]
    fn take_byte(&mut self) -> Result<u8, DecodingError> {
        let bs = self.read_many(1)?;
        Ok(bs[0])
    }

    #[inline]
    fn read_many(&mut self, len: usize) -> Result<Bytes, DecodingError> {
        if self.0.len() >= len {
            Ok(self.0.split_to(len))
        } else {
            Err(DecodingError::TruncatedInput {
                needed: len,
                available: self.0.len(),
            })
        }
    }

    #[inline]
    fn read_word(&mut self) -> Result<[u8; WORD_LEN], DecodingError> {
        let bs = self.read_many(WORD_LEN)?;
        let mut word = [0u8; WORD_LEN];
        word.copy_from_slice(&bs);
        Ok(word)
    }

    /// Reads up to the next zero byte, consuming the terminator but not returning it.
    #[inline]
    fn read_terminated(&mut self, index: usize) -> Result<Bytes, DecodingError> {
        match self.0.iter().position(|b| *b == TEXT_END) {
            Some(end) => {
                let mut text = self.0.split_to(end + 1);
                text.truncate(end);
                Ok(text)
            }
            None => Err(DecodingError::UnterminatedText { index }),
        }
    }
}

/// Sources a message can be decoded from.
pub trait Deserializer {
    /// Read the header byte.
    fn read_count(&mut self) -> Result<usize, DecodingError>;

    /// Read the tag section for `count` values.
    ///
    /// # Errors
    ///
    /// Fails if the section is shorter than `count` tags need, or if a tag is not one of
    /// the five known kinds.
    fn read_tags(&mut self, count: usize) -> Result<Tags, DecodingError>;

    /// Read an [`f32`].
    fn read_f32(&mut self) -> Result<f32, DecodingError>;

    /// Read an [`i32`].
    fn read_i32(&mut self) -> Result<i32, DecodingError>;

    /// Read a [`bool`]. Any non-zero byte is `true`.
    fn read_bool(&mut self) -> Result<bool, DecodingError>;

    /// Read zero-terminated Latin-1 text. `index` is only used to build errors.
    fn read_text(&mut self, index: usize) -> Result<String, DecodingError>;

    /// Read the payload announced by `tag`.
    fn read_value(&mut self, index: usize, tag: Tag) -> Result<Value, DecodingError> {
        match tag {
            Tag::Float => self.read_f32().map(Value::Float),
            Tag::Int => self.read_i32().map(|i| Value::Int(i as i64)),
            Tag::Nil => Ok(Value::Nil),
            Tag::Bool => self.read_bool().map(Value::Bool),
            Tag::Text => self.read_text(index).map(Value::Text),
        }
    }
}

impl Deserializer for MessageBytes {
    #[inline]
    fn read_count(&mut self) -> Result<usize, DecodingError> {
        self.take_byte().map(|b| b as usize)
    }

    fn read_tags(&mut self, count: usize) -> Result<Tags, DecodingError> {
        let packed = self.read_many(packed_len(count))?;
        unpack_nibbles(&packed, count)
            .into_iter()
            .enumerate()
            .map(|(index, nibble)| {
                Tag::try_from(nibble).map_err(|tag| DecodingError::UnknownTag { index, tag })
            })
            .collect()
    }

    #[inline]
    fn read_f32(&mut self) -> Result<f32, DecodingError> {
        let word = self.read_word()?;
        Ok(float::from_bits(u32::from_le_bytes(word)))
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32, DecodingError> {
        let word = self.read_word()?;
        Ok(i32::from_le_bytes(word))
    }

    #[inline]
    fn read_bool(&mut self) -> Result<bool, DecodingError> {
        self.take_byte().map(|b| b != BOOL_FALSE)
    }

    #[inline]
    fn read_text(&mut self, index: usize) -> Result<String, DecodingError> {
        let text = self.read_terminated(index)?;
        // Latin-1 code points coincide with the first 256 chars
        Ok(text.iter().map(|b| *b as char).collect())
    }
}
