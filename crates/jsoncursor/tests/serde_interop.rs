#![allow(missing_docs)]

use jsoncursor::{Value, decode, encode};

const DOCUMENT: &str = r#"{"b":[1,2.5,"x\/y"],"a":null,"c":{"t":true}}"#;

#[test]
fn deserializes_from_serde_json_text() {
    let via_serde: Value = serde_json::from_str(DOCUMENT).unwrap();
    assert_eq!(via_serde, decode(DOCUMENT).unwrap());
}

#[test]
fn deserializes_from_serde_json_value() {
    let json = serde_json::json!({"n": -3, "u": 7_u64, "f": 0.25, "s": "s", "l": [null]});
    let v: Value = serde_json::from_value(json).unwrap();
    assert_eq!(v, decode(r#"{"n":-3,"u":7,"f":0.25,"s":"s","l":[null]}"#).unwrap());
}

#[test]
fn serializes_into_serde_json() {
    let v = decode(DOCUMENT).unwrap();
    let text = serde_json::to_string(&v).unwrap();
    assert_eq!(decode(&text), Ok(v.clone()));

    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["c"]["t"], serde_json::Value::Bool(true));
    assert_eq!(json["b"][1].as_f64(), Some(2.5));
    assert!(json["a"].is_null());
}

#[test]
fn both_encoders_agree_on_structure() {
    let v = decode(DOCUMENT).unwrap();
    let ours: serde_json::Value = serde_json::from_str(&encode(&v, true)).unwrap();
    let theirs = serde_json::to_value(&v).unwrap();
    assert_eq!(ours["b"][0].as_f64(), theirs["b"][0].as_f64());
    assert_eq!(ours["b"][2], theirs["b"][2]);
    assert_eq!(ours["c"], theirs["c"]);
}
