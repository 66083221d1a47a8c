//! OpenAPI 3 query parameter serialization.
//!
//! OpenAPI describes how a list or object query parameter is written with
//! a `style` and an `explode` flag. This crate turns a [`Value`] into the
//! query entries for one parameter, following the
//! [serialization rules](https://swagger.io/docs/specification/v3_0/serialization/#query-parameters)
//! for the four query styles:
//!
//! | style            | explode | `[3, 4, 5]`      | `{"role": "admin", "scope": "site"}` |
//! |------------------|---------|------------------|--------------------------------------|
//! | `form`           | true    | `id=3&id=4&id=5` | `role=admin&scope=site`              |
//! | `form`           | false   | `id=3,4,5`       | `id=role,admin,scope,site`           |
//! | `spaceDelimited` | false   | `id=3%204%205`   | as `form`                            |
//! | `pipeDelimited`  | false   | `id=3\|4\|5`     | as `form`                            |
//! | `deepObject`     | any     | as `form`        | `id[role]=admin&id[scope]=site`      |
//!
//! The exploded `form` list is stored as a single entry holding the whole
//! list; it is only written once per element when the entries are joined
//! into a querystring.
//!
//! ## Usage
//!
//! A request builder creates one [`QueryParams`], encodes each declared
//! parameter into it in turn and finally joins the entries. A later write
//! to a key replaces an earlier one.
//!
//! ```
//! use openapi_qs::{QueryParams, Style, Value};
//!
//! let role: Value = [("role", "admin"), ("scope", "site")].into_iter().collect();
//!
//! let mut params = QueryParams::new();
//! params
//!     .encode("id", &Value::from(vec![3, 4, 5]), Style::SpaceDelimited, false)
//!     .encode("user", &role, Style::DeepObject, true)
//!     .encode("q", &Value::from("red shoes"), Style::Form, true);
//!
//! assert_eq!(
//!     params.to_url_suffix(),
//!     "?id=3%204%205&user[role]=admin&user[scope]=site&q=red+shoes"
//! );
//! ```
//!
//! Styles coming from a generated client as plain strings go through
//! [`encode_str`], which rejects unknown tokens without touching the
//! parameters:
//!
//! ```
//! use openapi_qs::{Error, QueryParams, Value};
//!
//! let mut params = QueryParams::new();
//! let err = params.encode_str("id", &Value::from(1), "matrix", true).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedStyle(_)));
//! assert!(params.is_empty());
//! ```

mod config;
mod error;
mod params;
mod ser;
mod style;
mod value;

#[doc(inline)]
pub use config::{ArrayFormat, Config};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use params::{ParamValue, QueryParams};
#[doc(inline)]
pub use ser::{
    encode, encode_deep_object, encode_form, encode_pipe_delimited, encode_space_delimited,
    encode_str,
};
#[doc(inline)]
pub use style::Style;
#[doc(inline)]
pub use value::{Map, Value, to_value};
