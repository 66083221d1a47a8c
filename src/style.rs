use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// OpenAPI 3 serialization style for a query parameter.
///
/// See the [OpenAPI 3.0 serialization guide](https://swagger.io/docs/specification/v3_0/serialization/#query-parameters).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// `id=3,4,5`, or `role=admin&scope=site` for exploded objects.
    #[default]
    Form,
    /// `id=3%204%205`
    SpaceDelimited,
    /// `id=3|4|5`
    PipeDelimited,
    /// `id[role]=admin&id[scope]=site`
    DeepObject,
}

impl Style {
    /// The token used for this style in an OpenAPI document.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Form => "form",
            Style::SpaceDelimited => "spaceDelimited",
            Style::PipeDelimited => "pipeDelimited",
            Style::DeepObject => "deepObject",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "form" => Ok(Style::Form),
            "spaceDelimited" => Ok(Style::SpaceDelimited),
            "pipeDelimited" => Ok(Style::PipeDelimited),
            "deepObject" => Ok(Style::DeepObject),
            other => Err(Error::unsupported_style(other)),
        }
    }
}
