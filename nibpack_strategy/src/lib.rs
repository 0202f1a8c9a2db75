use nibpack::Value;
use proptest::{num::f32 as float, prelude::*};

/// arbitrary float for use with proptest, NaN payloads included
pub fn arb_float() -> impl Strategy<Value = f32> {
    float::POSITIVE
        | float::NEGATIVE
        | float::NORMAL
        | float::SUBNORMAL
        | float::ZERO
        | float::INFINITE
        | float::QUIET_NAN
        | float::SIGNALING_NAN
}

/// arbitrary Latin-1 text for use with proptest, U+0001 to U+00FF
pub fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(1u8..=255, 0..24)
        .prop_map(|codes| codes.into_iter().map(char::from).collect())
}

/// arbitrary encodable value for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        arb_float().prop_map(Value::Float),
        arb_text().prop_map(Value::Text),
    ]
}

/// arbitrary message, at most 255 values
pub fn arb_message() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_value(), 0..=255)
}

/// Compares value lists, floats by bit pattern.
pub fn same_values(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
            (x, y) => x == y,
        })
}
