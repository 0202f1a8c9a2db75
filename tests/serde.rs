#![cfg(feature = "serde")]

use nibpack::prelude::*;

#[test]
fn json_forwarding() {
    let vs = decode_full(&[0x04, 0x13, 0x42, 3, 0, 0, 0, 0x01, 0x61, 0x62, 0x00]).unwrap();

    let json = serde_json::to_string(&vs).unwrap();
    assert_eq!(json, r#"[{"Int":3},{"Bool":true},{"Text":"ab"},"Nil"]"#);

    let back: Vec<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vs);
}
