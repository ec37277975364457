#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A `%` that is not followed by two hex digits.
    MalformedEscape { input: String },

    /// Percent sequences that decode to bytes which are not utf-8.
    InvalidEncoding { input: String },

    InvalidLocation,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedEscape { input } => write!(f, "Malformed escape in '{input}'"),
            Error::InvalidEncoding { input } => write!(f, "Invalid utf-8 in '{input}'"),

            Error::InvalidLocation => f.write_str("Invalid Location"),
        }
    }
}

impl std::error::Error for Error {}
