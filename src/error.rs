use std::fmt;

/// Error type for `openapi_qs`.
#[derive(Debug)]
pub enum Error {
    /// The style token is not one of `form`, `spaceDelimited`,
    /// `pipeDelimited` or `deepObject`.
    UnsupportedStyle(String),
    /// A typed value could not be reduced to a [`Value`](crate::Value).
    Json(serde_json::Error),
}

impl Error {
    /// Generate error to show a style token was not recognised.
    pub fn unsupported_style<T>(style: T) -> Self
    where
        T: fmt::Display,
    {
        Error::UnsupportedStyle(style.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedStyle(style) => {
                write!(f, "unsupported serialization style: '{style}'")
            }
            Error::Json(e) => write!(f, "failed to convert value: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::UnsupportedStyle(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
