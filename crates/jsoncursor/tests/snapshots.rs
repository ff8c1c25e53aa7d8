#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use jsoncursor::{Map, Value, decode, encode};

fn fixture() -> Value {
    let mut a = Map::new();
    a.insert("g".into(), Value::Object(Map::new()));
    a.insert("h".into(), Value::from(""));
    a.insert("i".into(), Value::Null);

    let mut root = Map::new();
    root.insert("f".into(), Value::Null);
    root.insert("e".into(), Value::from(false));
    root.insert("d".into(), Value::from(2.23));
    root.insert("c".into(), Value::from("c"));
    root.insert(
        "b".into(),
        Value::Array(vec![Value::Array(vec![]), Value::from(true), Value::from(10)]),
    );
    root.insert("a".into(), Value::Object(a));
    Value::Object(root)
}

#[test]
fn snapshot_compact() {
    insta::assert_snapshot!(encode(&fixture(), false), @r#"{"a":{"g":{},"h":"","i":null},"b":[[],true,10],"c":"c","d":2.23,"e":false,"f":null}"#);
}

// Tabs are shown as two spaces so the inline snapshot stays readable.
#[test]
fn snapshot_pretty() {
    insta::assert_snapshot!(encode(&fixture(), true).replace('\t', "  "), @r#"
    {
      "a": {
        "g": {},
        "h": "",
        "i": null
      },
      "b": [
        [],
        true,
        10
      ],
      "c": "c",
      "d": 2.23,
      "e": false,
      "f": null
    }
    "#);
}

#[test]
fn snapshot_decoded_tree() {
    let v = decode(r#" [1, "x", null, {"k": true, "j": -0.5e1}] "#).unwrap();
    insta::assert_snapshot!(format!("{v:?}"), @r#"Array([Number(1.0), String("x"), Null, Object({"j": Number(-5.0), "k": Boolean(true)})])"#);
}

#[test]
fn snapshot_plain_projection() {
    let v = decode(r#"{"list":[1,null],"off":false,"none":null}"#).unwrap();
    insta::assert_snapshot!(format!("{:?}", v.to_plain()), @r#"Some(Map({"list": Some(List([Some(Number(1.0)), None])), "none": None, "off": Some(Bool(false))}))"#);
}
