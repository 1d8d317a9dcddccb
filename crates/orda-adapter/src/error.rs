/*
[INPUT]:  Error sources (identity provider, geolocation, collaborator misuse)
[OUTPUT]: Structured error types shared by every collaborator
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new collaborators or improving error messages
*/

use thiserror::Error;

/// Main error type for Orda collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Email/password pair was rejected
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Registration attempted with an email that is already taken
    #[error("An account already exists for {email}")]
    AccountExists { email: String },

    /// Credentials did not pass basic shape checks
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Operation requires a signed-in identity
    #[error("Not signed in")]
    NotSignedIn,

    /// The user refused to share their position
    #[error("Location access denied")]
    LocationDenied,

    /// Position could not be determined for another reason
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

impl AdapterError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AdapterError::Authentication { .. }
                | AdapterError::AccountExists { .. }
                | AdapterError::InvalidCredentials(_)
                | AdapterError::NotSignedIn
        )
    }

    /// Check if error came from the geolocation collaborator
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            AdapterError::LocationDenied | AdapterError::LocationUnavailable(_)
        )
    }

    /// Create an authentication error with a message
    pub fn authentication(message: impl Into<String>) -> Self {
        AdapterError::Authentication {
            message: message.into(),
        }
    }
}

/// Result type alias for collaborator operations
pub type Result<T> = std::result::Result<T, AdapterError>;
