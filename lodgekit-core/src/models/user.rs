//! New-user payload

use serde::Deserialize;

use super::ValidationError;

/// Maximum length for user-supplied text columns
const MAX_TEXT: usize = 255;

/// Payload for registering a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Opaque credential string; hashing happens upstream of this layer.
    pub password: String,
}

impl NewUser {
    /// Check the payload before it is sent to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.name.len() > MAX_TEXT {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_TEXT,
            });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "expected an address containing '@'",
            });
        }
        if self.email.len() > MAX_TEXT {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_TEXT,
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        Ok(())
    }
}
