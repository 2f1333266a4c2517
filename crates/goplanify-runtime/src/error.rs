use std::fmt;

/// Result type for goplanify-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Domain validation or lookup error
    Types(goplanify_types::Error),

    /// Trip fetch did not complete
    FetchFailed(FetchError),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

/// Why a fetch failed.
///
/// Cloneable so every caller joined onto one in-flight fetch gets the same outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The trip source reported an error
    Source,
    /// The configured fetch timeout elapsed
    Timeout,
    /// The delivered trips break catalog invariants
    InvalidPayload,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FetchErrorKind::Source => write!(f, "{}", self.message),
            FetchErrorKind::Timeout => write!(f, "timed out: {}", self.message),
            FetchErrorKind::InvalidPayload => write!(f, "invalid payload: {}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::FetchFailed(err) => write!(f, "Fetch failed: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::FetchFailed(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<goplanify_types::Error> for Error {
    fn from(err: goplanify_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::FetchFailed(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
