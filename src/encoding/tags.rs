//! Type tags and their two-per-byte packing.

use super::constants::*;
use smallvec::SmallVec;
use std::{convert::TryFrom, iter::once};

/// Packed tag bytes. A full message needs 128, typical radio frames far fewer.
pub type TagBytes = SmallVec<[u8; 16]>;

/// Unpacked nibbles, one per value.
pub type Nibbles = SmallVec<[u8; 32]>;

/// Decoded tags, one per value.
pub type Tags = SmallVec<[Tag; 32]>;

/// The kind of a packed value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum Tag {
    /// 32-bit float, 4 bytes.
    Float,
    /// 32-bit signed integer, 4 bytes.
    Int,
    /// Nil, no payload.
    Nil,
    /// Boolean, 1 byte.
    Bool,
    /// Zero-terminated Latin-1 text.
    Text,
}

impl Tag {
    /// The 4-bit code written on the wire.
    pub fn nibble(self) -> u8 {
        match self {
            Tag::Float => TAG_FLOAT,
            Tag::Int => TAG_INT,
            Tag::Nil => TAG_NIL,
            Tag::Bool => TAG_BOOL,
            Tag::Text => TAG_TEXT,
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(nibble: u8) -> Result<Tag, u8> {
        match nibble {
            TAG_FLOAT => Ok(Tag::Float),
            TAG_INT => Ok(Tag::Int),
            TAG_NIL => Ok(Tag::Nil),
            TAG_BOOL => Ok(Tag::Bool),
            TAG_TEXT => Ok(Tag::Text),
            unknown => Err(unknown),
        }
    }
}

/// Number of bytes needed to hold `count` tags.
#[inline]
pub fn packed_len(count: usize) -> usize { (count + TAGS_PER_BYTE - 1) / TAGS_PER_BYTE }

/// Packs 4-bit tags two per byte, first in the high nibble.
///
/// An odd count leaves a zero low nibble in the final byte. Only the low four bits of
/// each input are used.
///
/// # Example
///
/// ```
/// use nibpack::encoding::tags::pack_nibbles;
///
/// assert_eq!(pack_nibbles(&[1, 3, 4]).as_slice(), &[0x13, 0x40]);
/// ```
pub fn pack_nibbles(nibbles: &[u8]) -> TagBytes {
    nibbles
        .chunks(TAGS_PER_BYTE)
        .map(|pair| {
            let high = (pair[0] & MASK_LOW) << TAG_BITS;
            let low = pair.get(1).map_or(0, |n| n & MASK_LOW);
            high | low
        })
        .collect()
}

/// Unpacks `count` tags from packed bytes, high nibble first.
///
/// The padding nibble of an odd count is never returned. If `bytes` runs out early the
/// result is shorter than `count`; callers check the length of the tag section first.
///
/// # Example
///
/// ```
/// use nibpack::encoding::tags::unpack_nibbles;
///
/// // the trailing 0xf is padding
/// assert_eq!(unpack_nibbles(&[0x13, 0x4f], 3).as_slice(), &[1, 3, 4]);
/// ```
pub fn unpack_nibbles(bytes: &[u8], count: usize) -> Nibbles {
    bytes
        .iter()
        .flat_map(|byte| once((byte & MASK_HIGH) >> TAG_BITS).chain(once(byte & MASK_LOW)))
        .take(count)
        .collect()
}

/// Packs typed tags.
pub fn pack_tags(tags: &[Tag]) -> TagBytes {
    let nibbles: Nibbles = tags.iter().map(|t| t.nibble()).collect();
    pack_nibbles(&nibbles)
}
