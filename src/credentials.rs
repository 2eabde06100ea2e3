use std::fmt;

use crate::error::DemoError;

/// A non-empty username/password pair
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validate and capture a credential pair. Both fields must be non-empty.
    pub fn new(username: &str, password: &str) -> Result<Self, DemoError> {
        if username.is_empty() || password.is_empty() {
            return Err(DemoError::Validation);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The string both pipelines encrypt: `username:password`
    pub fn plaintext(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
