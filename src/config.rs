use crate::params::{ParamValue, QueryParams};
use crate::ser::encode::{encode_key, encode_value};
use crate::Value;

/// Configuration for assembling a [`QueryParams`] into a querystring.
///
/// The style encoders are not configurable. `Config` only shapes the
/// transport-level step that joins entries with `&` and escapes the ones
/// whose escaping was deferred.
///
/// ## Deferred lists
///
/// `form` with `explode = true` stores a list verbatim under its name.
/// When the querystring is assembled, such a list is written once per
/// element, as selected by [`ArrayFormat`].
///
/// ```
/// use openapi_qs::{ArrayFormat, Config, QueryParams, Style, Value};
///
/// let mut params = QueryParams::new();
/// params.encode("id", &Value::from(vec![3, 4]), Style::Form, true);
///
/// assert_eq!(Config::new().serialize_params(&params), "id=3&id=4");
/// let config = Config::new().array_format(ArrayFormat::Indexed);
/// assert_eq!(config.serialize_params(&params), "id[0]=3&id[1]=4");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Config {
    use_form_encoding: bool,
    array_format: ArrayFormat,
    question_mark: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Use the `a[0]=1&a[1]=2` format.
    Indexed,
    /// Use the `a[]=1&a[]=2` format.
    EmptyIndexed,
    /// Use the `a=1&a=2` format.
    #[default]
    Unindexed,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            use_form_encoding: cfg!(feature = "default_to_form_encoding"),
            array_format: ArrayFormat::Unindexed,
            question_mark: false,
        }
    }

    /// By default, deferred entries are escaped with query-string encoding,
    /// as defined in [WHATWG](https://url.spec.whatwg.org/#query-percent-encode-set),
    /// writing spaces as `+` and leaving square brackets in keys alone.
    /// A `%` in a key is kept as well, since `deepObject` member names are
    /// already escaped when the key is built (`{ f: { "a]b": 1 } }` is
    /// written as `f[a%5Db]=1`).
    ///
    /// To use the stricter `application/x-www-form-urlencoded` encoding
    /// instead, set this to `true`. Alternatively, you can use the
    /// `default_to_form_encoding` Cargo feature to set this to `true` by default.
    ///
    /// With form encoding, keys are percent-encoded in full, so escaped
    /// member names get encoded _twice_.
    ///
    /// e.g. `{ f: { "a]b": 1 } }` will be encoded as `f%5Ba%255Db%5D=1`
    ///
    /// Entry values already encoded by a style are never escaped again.
    pub const fn use_form_encoding(mut self, use_form_encoding: bool) -> Self {
        self.use_form_encoding = use_form_encoding;
        self
    }

    /// Specifies how deferred lists are written. The default is
    /// `Unindexed`, which repeats the key for every element.
    pub const fn array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Prefix a non-empty querystring with `?`.
    pub const fn question_mark(mut self, question_mark: bool) -> Self {
        self.question_mark = question_mark;
        self
    }

    /// Joins `params` into a querystring using this `Config`.
    pub fn serialize_params(self, params: &QueryParams) -> String {
        // initialize the buffer with 128 bytes
        let mut buffer = String::with_capacity(128);
        for (key, value) in params {
            match value {
                ParamValue::Encoded(encoded) => {
                    self.write_pair(&mut buffer, &encode_key(key, self.use_form_encoding), encoded);
                }
                ParamValue::Raw(Value::List(items)) => {
                    for (idx, item) in items.iter().enumerate() {
                        let key = match self.array_format {
                            ArrayFormat::Indexed => format!("{key}[{idx}]"),
                            ArrayFormat::EmptyIndexed => format!("{key}[]"),
                            ArrayFormat::Unindexed => key.clone(),
                        };
                        self.write_raw(&mut buffer, &key, item);
                    }
                }
                ParamValue::Raw(raw) => self.write_raw(&mut buffer, key, raw),
            }
        }
        if self.question_mark && !buffer.is_empty() {
            buffer.insert(0, '?');
        }
        buffer
    }

    fn write_raw(self, buffer: &mut String, key: &str, value: &Value) {
        let text = value.to_param_string();
        self.write_pair(
            buffer,
            &encode_key(key, self.use_form_encoding),
            &encode_value(&text, self.use_form_encoding),
        );
    }

    fn write_pair(self, buffer: &mut String, key: &str, value: &str) {
        if !buffer.is_empty() {
            buffer.push('&');
        }
        buffer.push_str(key);
        buffer.push('=');
        buffer.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_have_no_question_mark() {
        let params = QueryParams::new();
        assert_eq!(Config::new().question_mark(true).serialize_params(&params), "");
    }

    #[test]
    fn encoded_values_are_not_escaped_twice() {
        let mut params = QueryParams::new();
        params.insert_encoded("id", "3%204%205");
        params.insert_raw("q", "3 4%");
        assert_eq!(
            Config::new()
                .use_form_encoding(false)
                .question_mark(true)
                .serialize_params(&params),
            "?id=3%204%205&q=3+4%25"
        );
    }

    #[test]
    fn empty_deferred_list_writes_nothing() {
        let mut params = QueryParams::new();
        params.insert_raw("id", Vec::<u8>::new());
        params.insert_raw("x", Value::Null);
        assert_eq!(Config::new().serialize_params(&params), "x=");
    }

    #[test]
    fn form_encoding_escapes_brackets_and_spaces() {
        let mut params = QueryParams::new();
        params.insert_raw("f[a]", "b c");
        let config = Config::new().use_form_encoding(true);
        assert_eq!(config.serialize_params(&params), "f%5Ba%5D=b%20c");

        let mut params = QueryParams::new();
        params.insert_raw("f[a%5Db]", 1);
        assert_eq!(config.serialize_params(&params), "f%5Ba%255Db%5D=1");
    }

    #[test]
    fn empty_indexed_lists() {
        let mut params = QueryParams::new();
        params.insert_raw("t", vec!["a", "b"]);
        let config = Config::new()
            .use_form_encoding(false)
            .array_format(ArrayFormat::EmptyIndexed);
        assert_eq!(config.serialize_params(&params), "t[]=a&t[]=b");
    }
}
