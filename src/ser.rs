//! Serialization of a single parameter into query entries.
//!
//! Each style routine takes the parameter name, its [`Value`] and the
//! `explode` flag, and inserts zero or more entries into a
//! [`QueryParams`]. Entries that a routine percent-encodes itself are
//! stored as [`ParamValue::Encoded`](crate::ParamValue::Encoded); all
//! others are stored as [`ParamValue::Raw`](crate::ParamValue::Raw) and
//! escaped only when the querystring is assembled.

pub(crate) mod encode;

use encode::{encode_plus, encode_strict};

use crate::error::Result;
use crate::params::QueryParams;
use crate::style::Style;
use crate::value::Value;

use std::borrow::Cow;

/// Encodes `value` as the query parameter `name`.
///
/// ```
/// use openapi_qs::{QueryParams, Style, Value};
///
/// let filter: Value = [("a", Value::from(1)), ("c", Value::from(vec![7, 8]))]
///     .into_iter()
///     .collect();
///
/// let mut params = QueryParams::new();
/// openapi_qs::encode(&mut params, "filter", &filter, Style::DeepObject, true);
/// assert_eq!(params.to_query_string(), "filter[a]=1&filter[c][0]=7&filter[c][1]=8");
/// ```
pub fn encode(params: &mut QueryParams, name: &str, value: &Value, style: Style, explode: bool) {
    tracing::trace!(param = name, %style, explode, "encoding query parameter");
    match style {
        Style::Form => encode_form(params, name, value, explode),
        Style::SpaceDelimited => encode_space_delimited(params, name, value, explode),
        Style::PipeDelimited => encode_pipe_delimited(params, name, value, explode),
        Style::DeepObject => encode_deep_object(params, name, value, explode),
    }
}

/// Like [`encode`], for callers that carry the style as an OpenAPI token.
///
/// An unrecognised token is rejected with [`Error::UnsupportedStyle`](crate::Error::UnsupportedStyle)
/// before `params` is touched.
pub fn encode_str(
    params: &mut QueryParams,
    name: &str,
    value: &Value,
    style: &str,
    explode: bool,
) -> Result<()> {
    let style = style.parse::<Style>().inspect_err(|err| {
        tracing::debug!(param = name, %err, "rejecting query parameter");
    })?;
    encode(params, name, value, style, explode);
    Ok(())
}

/// `form` style.
///
/// | value   | explode | entries                               |
/// |---------|---------|---------------------------------------|
/// | list    | false   | `name=3,4,5`                          |
/// | object  | true    | `role=admin&scope=site` (name dropped) |
/// | object  | false   | `name=role,admin,scope,site`          |
/// | other   | any     | `name` => value, unescaped            |
///
/// An exploded list is stored whole under `name`; writing one entry per
/// element is left to whoever turns the entries into a URL (see
/// [`Config::array_format`](crate::Config::array_format)). Do not
/// expand it here: a repeated key would overwrite itself in `params`.
pub fn encode_form(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    match value {
        Value::List(items) if !explode => {
            let joined = join(items.iter(), ",");
            params.insert_encoded(name, encode_plus(&joined));
        }
        Value::Object(map) if explode => {
            for (key, member) in map {
                params.insert_encoded(key.as_str(), encode_plus(&member.to_param_string()));
            }
        }
        Value::Object(map) => {
            let joined = map
                .iter()
                .flat_map(|(k, v)| [Cow::Borrowed(k.as_str()), v.to_param_string()])
                .collect::<Vec<_>>()
                .join(",");
            params.insert_encoded(name, encode_plus(&joined));
        }
        _ => {
            params.insert_raw(name, value.clone());
        }
    }
}

/// `spaceDelimited` style: `name=3%204%205` for a non-exploded list,
/// `form` for everything else.
pub fn encode_space_delimited(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    encode_delimited(params, name, value, explode, " ");
}

/// `pipeDelimited` style: `name=3|4|5` for a non-exploded list, `form`
/// for everything else.
pub fn encode_pipe_delimited(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    encode_delimited(params, name, value, explode, "|");
}

fn encode_delimited(
    params: &mut QueryParams,
    name: &str,
    value: &Value,
    explode: bool,
    delimiter: &str,
) {
    match value {
        Value::List(items) if !explode => {
            let joined = join(items.iter(), delimiter);
            params.insert_encoded(name, encode_strict(&joined));
        }
        _ => encode_form(params, name, value, explode),
    }
}

/// `deepObject` style.
///
/// Objects are walked recursively, addressing members as `name[key]`
/// and list elements as `name[key][0]`. Member names are escaped with
/// the `%20` rule so that a bracket inside one cannot be read as
/// addressing (`a]b` becomes `name[a%5Db]`). Leaves are stored unescaped and
/// empty lists or objects produce no entries. Anything other than an
/// object falls back to `form`. `explode` does not change the output.
pub fn encode_deep_object(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    match value {
        Value::Object(_) => push_nested(params, name, value),
        _ => encode_form(params, name, value, explode),
    }
}

fn push_nested(params: &mut QueryParams, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (member, inner) in map {
                push_nested(params, &format!("{key}[{}]", encode_strict(member)), inner);
            }
        }
        Value::List(items) => {
            for (idx, inner) in items.iter().enumerate() {
                push_nested(params, &format!("{key}[{idx}]"), inner);
            }
        }
        leaf => {
            params.insert_raw(key, leaf.clone());
        }
    }
}

fn join<'a>(items: impl Iterator<Item = &'a Value>, delimiter: &str) -> String {
    items
        .map(|item| item.to_param_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

impl QueryParams {
    /// See [`encode`].
    pub fn encode(&mut self, name: &str, value: &Value, style: Style, explode: bool) -> &mut Self {
        encode(self, name, value, style, explode);
        self
    }

    /// Encodes with `explode = true`, the OpenAPI default for query
    /// parameters.
    pub fn encode_default(&mut self, name: &str, value: &Value, style: Style) -> &mut Self {
        self.encode(name, value, style, true)
    }

    /// See [`encode_str`].
    pub fn encode_str(
        &mut self,
        name: &str,
        value: &Value,
        style: &str,
        explode: bool,
    ) -> Result<&mut Self> {
        encode_str(self, name, value, style, explode)?;
        Ok(self)
    }

    /// Reduces a serializable value with [`to_value`](crate::to_value)
    /// and encodes it.
    ///
    /// ```
    /// use openapi_qs::{QueryParams, Style};
    /// use std::collections::BTreeMap;
    ///
    /// let mut filter = BTreeMap::new();
    /// filter.insert("role", "admin");
    ///
    /// let mut params = QueryParams::new();
    /// params.encode_serialize("id", &filter, Style::Form, false).unwrap();
    /// assert_eq!(params["id"], "role,admin");
    /// ```
    pub fn encode_serialize<T>(
        &mut self,
        name: &str,
        value: &T,
        style: Style,
        explode: bool,
    ) -> Result<&mut Self>
    where
        T: serde::Serialize + ?Sized,
    {
        let value = crate::to_value(value)?;
        Ok(self.encode(name, &value, style, explode))
    }
}
