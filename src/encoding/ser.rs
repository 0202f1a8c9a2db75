use super::*;
use bytes::BytesMut;
use std::convert::TryFrom;

/// A byte sink the encoder writes into.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

/// Convenience methods for [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Add an [`i32`] to the output value, little endian.
    ///
    /// # Arguments
    ///
    /// * `i: i32`  - The value to be added.
    fn put_i32(&mut self, i: i32);

    /// Add an [`f32`] to the output value as its binary32 pattern, little endian.
    ///
    /// # Arguments
    ///
    /// * `f: f32` - The value to be added.
    fn put_f32(&mut self, f: f32);

    /// Add a [`bool`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `b: bool` - The value to be added.
    fn put_bool(&mut self, b: bool);

    /// Add zero-terminated Latin-1 text to the output value.
    ///
    /// Returns the first character outside U+0001..=U+00FF, in which case the characters
    /// before it have already been written. U+0000 is refused because it would end the
    /// text early.
    ///
    /// # Arguments
    ///
    /// * `s: &str` - The value to be added.
    fn put_latin1(&mut self, s: &str) -> Result<(), char>;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl Serializer for BytesMut {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) { bytes::BufMut::put_u8(self, u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self.freeze() }
}

impl<S: Serializer> SerializerExt for S {
    fn put_i32(&mut self, i: i32) { self.put_slice(&i32::to_le_bytes(i)) }

    fn put_f32(&mut self, f: f32) { self.put_slice(&u32::to_le_bytes(float::to_bits(f))) }

    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(BOOL_TRUE)
        } else {
            self.put_u8(BOOL_FALSE)
        }
    }

    fn put_latin1(&mut self, s: &str) -> Result<(), char> {
        for c in s.chars() {
            if !is_latin1(c) {
                return Err(c);
            }
            self.put_u8(c as u8);
        }
        self.put_u8(TEXT_END);
        Ok(())
    }
}

/// Non-zero and at most U+00FF.
#[inline]
fn is_latin1(c: char) -> bool { c != TEXT_END as char && (c as u32) <= 0xff }

/// A value that can be packed.
pub trait Ser {
    /// The tag announcing this value in the tag section.
    fn tag(&self) -> Tag;

    /// Check that the payload can be written, without writing anything.
    fn check(&self, index: usize) -> Result<(), EncodingError>;

    /// Write the payload. `index` is the value's position in the message and is only
    /// used to build errors.
    fn ser<S: Serializer>(&self, index: usize, s: &mut S) -> Result<(), EncodingError>;
}

impl Ser for Value {
    fn tag(&self) -> Tag { Value::tag(self) }

    fn check(&self, index: usize) -> Result<(), EncodingError> {
        match self {
            Value::Int(i) => i32::try_from(*i)
                .map(|_| ())
                .map_err(|_| EncodingError::IntegerOutOfRange { index, value: *i }),
            Value::Text(t) => match t.chars().find(|c| !is_latin1(*c)) {
                Some(character) => Err(EncodingError::UnsupportedCharacter { index, character }),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn ser<S: Serializer>(&self, index: usize, s: &mut S) -> Result<(), EncodingError> {
        match self {
            Value::Float(f) => s.put_f32(*f),
            Value::Int(i) => {
                let i = i32::try_from(*i)
                    .map_err(|_| EncodingError::IntegerOutOfRange { index, value: *i })?;
                s.put_i32(i)
            }
            Value::Nil => {}
            Value::Bool(b) => s.put_bool(*b),
            Value::Text(t) => s
                .put_latin1(t)
                .map_err(|character| EncodingError::UnsupportedCharacter { index, character })?,
        }
        Ok(())
    }
}

impl<T: Ser> Ser for &T {
    fn tag(&self) -> Tag { (*self).tag() }

    fn check(&self, index: usize) -> Result<(), EncodingError> { (*self).check(index) }

    fn ser<S: Serializer>(&self, index: usize, s: &mut S) -> Result<(), EncodingError> {
        (*self).ser(index, s)
    }
}
