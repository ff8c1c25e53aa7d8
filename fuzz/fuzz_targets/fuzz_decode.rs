#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsoncursor::{Value, decode, encode};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value as SerdeValue};

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// JSON whitespace, plus a few Unicode spaces the decoder must reject.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"\r\n",
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || seed.is_multiple_of(10) {
        let mut written = append_whitespace(data, max_size);
        written += append_value(&mut data[written..], size.max(16), max_size - written);
        written += append_whitespace(&mut data[written..], max_size - written);
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 0‒N whitespace code-points to `buf`, never exceeding `limit`
/// bytes. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(0..=limit.min(4));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = if with_rng(|rng| rng.random::<bool>()) {
        serde_json::to_vec_pretty(&value.0)
    } else {
        serde_json::to_vec(&value.0)
    }
    .expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(SerdeValue);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => SerdeValue::Null,
            1 => SerdeValue::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                SerdeValue::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => SerdeValue::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                SerdeValue::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                SerdeValue::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn all_finite(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_finite(),
        Value::Array(arr) => arr.iter().all(all_finite),
        Value::Object(map) => map.values().all(all_finite),
        _ => true,
    }
}

fn check(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    let decoded = decode(&text);

    // serde_json follows the same grammar, except that it recombines
    // surrogate escapes and stops at a shallower nesting depth.
    if !text.contains("\\u") && serde_json::from_str::<SerdeValue>(&text).is_ok() {
        assert!(decoded.is_ok(), "serde_json accepted {text:?}, decode rejected it");
    }

    let Ok(value) = decoded else {
        return;
    };
    if !all_finite(&value) {
        return;
    }
    for pretty in [false, true] {
        let encoded = encode(&value, pretty);
        assert_eq!(decode(&encoded).as_ref(), Ok(&value), "via {encoded:?}");
    }
}

fuzz_target!(|data: &[u8]| check(data));
