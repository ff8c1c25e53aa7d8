//! Projection of [`Value`] trees into untagged native containers.
//!
//! Some callers would rather not match on [`Value`]. [`Plain`] keeps only the
//! shapes that carry data; `null` becomes `None` wherever it appears, so
//! object members and array elements are `Option<Plain>`.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::value::Value;

/// Object members after projection. A `None` member was `null`.
pub type PlainMap = BTreeMap<String, Option<Plain>>;
/// Array elements after projection. A `None` element was `null`.
pub type PlainList = Vec<Option<Plain>>;

/// A JSON value without a `null` case.
#[derive(Clone, Debug, PartialEq)]
pub enum Plain {
    /// Object members.
    Map(PlainMap),
    /// Array elements.
    List(PlainList),
    /// String contents.
    String(String),
    /// A number.
    Number(f64),
    /// A boolean.
    Bool(bool),
}

impl Value {
    /// Recursively projects this value. Returns `None` for `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsoncursor::{Plain, decode};
    ///
    /// let v = decode(r#"[1, null, "x"]"#).unwrap();
    /// assert_eq!(
    ///     v.to_plain(),
    ///     Some(Plain::List(vec![
    ///         Some(Plain::Number(1.0)),
    ///         None,
    ///         Some(Plain::String("x".into())),
    ///     ]))
    /// );
    /// ```
    #[must_use]
    pub fn to_plain(&self) -> Option<Plain> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(Plain::Bool(*b)),
            Value::Number(n) => Some(Plain::Number(*n)),
            Value::String(s) => Some(Plain::String(s.clone())),
            Value::Array(_) => self.to_list().map(Plain::List),
            Value::Object(_) => self.to_map().map(Plain::Map),
        }
    }

    /// Projects the members if this is an object.
    ///
    /// A member whose value is `null` keeps its key and maps to `None`. A
    /// dictionary-style projection that assigns "no value" would delete the
    /// key instead; here the member count always matches the object.
    #[must_use]
    pub fn to_map(&self) -> Option<PlainMap> {
        let map = self.as_object()?;
        Some(map.iter().map(|(k, v)| (k.clone(), v.to_plain())).collect())
    }

    /// Projects the elements if this is an array.
    #[must_use]
    pub fn to_list(&self) -> Option<PlainList> {
        let arr = self.as_array()?;
        Some(arr.iter().map(Value::to_plain).collect())
    }

    /// Rebuilds a value from a projection, mapping `None` back to `null`.
    #[must_use]
    pub fn from_plain(plain: Option<Plain>) -> Self {
        plain.map_or(Value::Null, Value::from)
    }
}

impl From<Plain> for Value {
    fn from(plain: Plain) -> Self {
        match plain {
            Plain::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_plain(v)))
                    .collect(),
            ),
            Plain::List(list) => Value::Array(list.into_iter().map(Value::from_plain).collect()),
            Plain::String(s) => Value::String(s),
            Plain::Number(n) => Value::Number(n),
            Plain::Bool(b) => Value::Boolean(b),
        }
    }
}
