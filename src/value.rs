//! The value model accepted by the parameter encoder.

use indexmap::IndexMap;
use serde::ser::{self, SerializeMap, SerializeSeq};

use crate::error::Result;

use std::borrow::Cow;

/// An ordered map of object members.
pub type Map = IndexMap<String, Value>;

/// A parameter value, already reduced to JSON-like primitives, lists and
/// maps.
///
/// Objects preserve the insertion order of their members, which determines
/// the order of the entries the encoder produces for them.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Renders the value as the text of a single query parameter part.
    ///
    /// Strings are returned verbatim, numbers and booleans use their
    /// canonical form, `Null` becomes the empty string and nested lists or
    /// objects are written as compact JSON.
    ///
    /// Non-finite floats (`NaN`, `inf`) are treated as `Null`: they render
    /// as the empty string here and as `null` inside nested JSON.
    pub fn to_param_string(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Int(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Value::UInt(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Value::Float(v) if !v.is_finite() => Cow::Borrowed(""),
            Value::Float(v) => Cow::Owned(ryu::Buffer::new().format(*v).to_owned()),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            // serializing a `Value` to JSON has no failure path: every map
            // key is a string and non-finite floats are written as `null`
            Value::List(_) | Value::Object(_) => {
                Cow::Owned(serde_json::to_string(self).unwrap_or_default())
            }
        }
    }
}

/// Reduces any serializable type to a [`Value`].
///
/// ```
/// use openapi_qs::Value;
///
/// let value = openapi_qs::to_value(&vec![3, 4, 5]).unwrap();
/// assert_eq!(value, Value::from(vec![3, 4, 5]));
/// ```
pub fn to_value<T: ser::Serialize + ?Sized>(input: &T) -> Result<Value> {
    Ok(serde_json::to_value(input)?.into())
}

impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::UInt(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

macro_rules! from_int {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

from_int!(Int => i8, i16, i32, i64);
from_int!(UInt => u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Object(v)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
