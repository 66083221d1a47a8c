//! The insert target the style encoders write into.

use indexmap::IndexMap;

use crate::Value;

use std::borrow::Cow;
use std::fmt;

/// The value half of a query entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Left for the transport layer to escape when the URL is assembled.
    Raw(Value),
    /// Already percent-encoded by a style routine; written verbatim.
    Encoded(String),
}

impl ParamValue {
    /// The text of this entry before any transport-level escaping.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Raw(value) => value.to_param_string(),
            ParamValue::Encoded(s) => Cow::Borrowed(s.as_str()),
        }
    }

    pub fn is_encoded(&self) -> bool {
        matches!(self, ParamValue::Encoded(_))
    }

    /// The raw value, if escaping was deferred.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            ParamValue::Raw(value) => Some(value),
            ParamValue::Encoded(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl PartialEq<str> for ParamValue {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == other
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == *other
    }
}

/// An ordered collection of query entries for one request.
///
/// Writing a key that is already present replaces its value and keeps the
/// key in its original position, so the last write to a key wins.
///
/// ```
/// use openapi_qs::{QueryParams, Style, Value};
///
/// let mut params = QueryParams::new();
/// params.encode("id", &Value::from(vec![3, 4, 5]), Style::PipeDelimited, false);
/// params.encode("q", &Value::from("red shoes"), Style::Form, true);
/// assert_eq!(params.to_query_string(), "id=3|4|5&q=red+shoes");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    entries: IndexMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) -> Option<ParamValue> {
        self.entries.insert(key.into(), value)
    }

    /// Inserts a value whose escaping is deferred to URL assembly.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<ParamValue> {
        self.insert(key, ParamValue::Raw(value.into()))
    }

    /// Inserts an already percent-encoded value.
    pub fn insert_encoded(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<ParamValue> {
        self.insert(key, ParamValue::Encoded(value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParamValue> {
        self.entries.iter()
    }

    /// Joins the entries into a querystring with the default [`Config`](crate::Config).
    pub fn to_query_string(&self) -> String {
        crate::Config::default().serialize_params(self)
    }

    /// Like [`to_query_string`](Self::to_query_string), prefixed with `?`
    /// unless there are no entries.
    pub fn to_url_suffix(&self) -> String {
        crate::Config::default()
            .question_mark(true)
            .serialize_params(self)
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, ParamValue);
    type IntoIter = indexmap::map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl std::ops::Index<&str> for QueryParams {
    type Output = ParamValue;

    fn index(&self, key: &str) -> &ParamValue {
        &self.entries[key]
    }
}
