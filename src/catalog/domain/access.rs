use crate::shared::error::StoreError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Email and password submitted to the admin login
#[derive(Clone, PartialEq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// # Errors
    /// Returns `StoreError::Validation` if the email is missing or malformed,
    /// or if the password is missing
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into().trim().to_string();
        let password = password.into();

        if email.is_empty() {
            return Err(validation("Email is required"));
        }
        if !is_well_formed_email(&email) {
            return Err(validation("Enter a valid email"));
        }
        if password.is_empty() {
            return Err(validation("Password is required"));
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

fn validation(message: &str) -> anyhow::Error {
    StoreError::Validation {
        message: message.to_string(),
    }
    .into()
}

fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Authenticated user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a successful password sign-in
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// Role stored in the roles table, keyed by user id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub const COLUMN: &'static str = "role";

    pub fn parse(value: &str) -> Self {
        if value == "Admin" {
            Role::Admin
        } else {
            Role::Other(value.to_string())
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A session whose user holds the `Admin` role
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub user: AuthUser,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_valid() {
        let credentials = Credentials::new(" admin@intech.store ", "secret").unwrap();
        assert_eq!(credentials.email(), "admin@intech.store");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_credentials_require_email() {
        let err = Credentials::new("", "secret").unwrap_err();
        assert!(err.to_string().contains("Email is required"));
    }

    #[test]
    fn test_credentials_reject_malformed_email() {
        for email in ["admin", "admin@", "@intech.store", "admin@intech", "a b@intech.store"] {
            let err = Credentials::new(email, "secret").unwrap_err();
            assert!(err.to_string().contains("Enter a valid email"), "{}", email);
        }
    }

    #[test]
    fn test_credentials_require_password() {
        let err = Credentials::new("admin@intech.store", "").unwrap_err();
        assert!(err.to_string().contains("Password is required"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("admin@intech.store", "hunter2").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_role_parse() {
        assert!(Role::parse("Admin").is_admin());
        assert_eq!(Role::parse("Customer"), Role::Other("Customer".to_string()));
        assert!(!Role::parse("admin").is_admin());
    }
}
