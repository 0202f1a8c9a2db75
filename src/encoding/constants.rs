/// Float tag, 0x0
pub(crate) const TAG_FLOAT: u8 = 0b0000;
/// Integer tag, 0x1
pub(crate) const TAG_INT: u8 = 0b0001;
/// Nil tag, 0x2
pub(crate) const TAG_NIL: u8 = 0b0010;
/// Bool tag, 0x3
pub(crate) const TAG_BOOL: u8 = 0b0011;
/// Text tag, 0x4
pub(crate) const TAG_TEXT: u8 = 0b0100;

/// 0xf0
pub(crate) const MASK_HIGH: u8 = 0b1111_0000;
/// 0x0f
pub(crate) const MASK_LOW: u8 = 0b0000_1111;
/// Bits per tag.
pub(crate) const TAG_BITS: u32 = 4;
/// Tags sharing one byte.
pub(crate) const TAGS_PER_BYTE: usize = 2;

/// Largest number of values a one-byte header can count.
pub(crate) const MAX_VALUES: usize = u8::max_value() as usize;

/// `true` payload.
pub(crate) const BOOL_TRUE: u8 = 0x01;
/// `false` payload.
pub(crate) const BOOL_FALSE: u8 = 0x00;
/// Text terminator.
pub(crate) const TEXT_END: u8 = 0x00;

/// Payload width of floats and integers.
pub(crate) const WORD_LEN: usize = 4;
