pub use crate::{
    encoding::{decode, decode_first, decode_full, encode, encode_full, Tag},
    errors::*,
    hex::{decode_hex, encode_hex},
    Value,
};
pub use bytes::Bytes;
pub use std::convert::TryFrom;
