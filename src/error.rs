use std::fmt;

/// Unified error type for the skip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key not found. An ordinary outcome of a lookup, not a failure.
    NotFound,
    /// Rejected configuration (see [`Options::validate`](crate::Options::validate)).
    InvalidOptions(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Not found"),
            Error::InvalidOptions(msg) => write!(f, "Invalid options: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::NotFound.to_string(), "Not found");
        assert_eq!(
            Error::InvalidOptions("limit is zero".into()).to_string(),
            "Invalid options: limit is zero"
        );
    }
}
