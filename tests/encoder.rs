use nibpack::{encoding::MessageBytes, prelude::*};
use nibpack_strategy::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode(vs in arb_message()) {
        let enc = encode_full(&vs).unwrap();

        let dec = decode_full(&enc);

        match dec {
            Ok(ref dec) if same_values(dec, &vs) => {}
            _ => panic!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{:?}\n", vs, enc, dec),
        }
    }

    #[test]
    fn consumes_exactly_the_message(vs in arb_message(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
        let enc = encode_full(&vs).unwrap();
        let mut buf = enc;
        buf.extend_from_slice(&tail);
        let data = &mut MessageBytes::from(buf);

        let dec = decode(data).unwrap();
        prop_assert!(same_values(&dec, &vs));
        prop_assert_eq!(data.remaining(), tail.len());
    }

    #[test]
    fn first_and_rest(vs in arb_message()) {
        let enc = encode_full(&vs).unwrap();

        match decode_first(&enc).unwrap() {
            None => prop_assert!(vs.is_empty()),
            Some((first, rest)) => {
                prop_assert!(same_values(&[first], &vs[..1]));
                match rest {
                    None => prop_assert_eq!(vs.len(), 1),
                    Some(rest) => {
                        prop_assert_eq!(&rest, &encode_full(&vs[1..]).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn hex_form(vs in arb_message()) {
        let hex = encode_hex(&vs).unwrap();
        prop_assert_eq!(hex.len(), encode_full(&vs).unwrap().len() * 2);
        prop_assert!(same_values(&decode_hex(&hex).unwrap(), &vs));
        prop_assert!(same_values(&decode_hex(&hex.to_lowercase()).unwrap(), &vs));
    }
}
