//! A backtrackable positional cursor and a strict JSON codec built on it.
//!
//! - [`Cursor`] walks any slice forward and backward with clamped, total
//!   operations and snapshots by copy.
//! - [`decode`] parses exactly one JSON value into a [`Value`] tree, failing
//!   closed with [`DecodeError::InvalidInput`].
//! - [`encode`] writes a [`Value`] back out, compact or tab-indented, with
//!   object members in a deterministic order.
//!
//! ```rust
//! use jsoncursor::{Value, decode, encode};
//!
//! let v = decode(r#"{"b": [1, 2.5], "a": null}"#).unwrap();
//! assert_eq!(v.get("b").and_then(|b| b.get_index(1)), Some(&Value::Number(2.5)));
//! assert_eq!(encode(&v, false), r#"{"a":null,"b":[1,2.5]}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

mod cursor;
mod decoder;
mod encoder;
mod error;
mod options;
mod plain;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use decoder::{decode, decode_with_options};
pub use encoder::{encode, encode_with_options, write_value};
pub use error::DecodeError;
pub use options::{DecodeOptions, EncodeOptions};
pub use plain::{Plain, PlainList, PlainMap};
pub use value::{Array, Map, Value};
