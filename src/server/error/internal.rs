use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a stored password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a bearer token failed.
    #[error("Failed to encode bearer token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// A stored enum column holds a value outside its domain.
    #[error("Failed to parse {column} value '{value}': {reason}")]
    ParseStoredValue {
        /// Name of the column that was read
        column: &'static str,
        /// The stored string
        value: String,
        /// Parser message
        reason: String,
    },

    /// A JSON sub-document column does not match its expected shape.
    #[error("Stored {column} document is corrupt: {source}")]
    CorruptDocument {
        /// Name of the column that was read
        column: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
