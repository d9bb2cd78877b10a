use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a laptop that does not
/// exist, a rejected login and a broken backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The requested laptop has no root record
    NotFound = 1,
    /// Invalid command-line arguments, laptop ids or drafts
    InvalidArguments = 2,
    /// Application error (backend error, network error, file I/O error, etc.)
    ApplicationError = 3,
    /// Credentials rejected or the user is not an administrator
    AccessDenied = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::AccessDenied => write!(f, "Access Denied (4)"),
        }
    }
}

/// Application-specific errors for the storefront.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid laptop id: {id:?}\nReason: {reason}\n\n💡 Hint: Use the identifier shown in the catalog listing")]
    InvalidLaptopId { id: String, reason: String },

    /// Validation error for drafts, credentials and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Backend request failed: {operation}\nStatus: {status}\nDetails: {message}\n\n💡 Hint: Check the backend URL, the anon key and your network connection")]
    Backend {
        operation: String,
        status: u16,
        message: String,
    },

    #[error("The backend client has been closed\n\n💡 Hint: Create a new BackendClient for further requests")]
    ClientClosed,

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Access denied: {message}")]
    Forbidden { message: String },

    #[error("Failed to create laptop while {step}\nDetails: {details}\n\n💡 Hint: Rows written before this step are kept; remove them from the admin console before retrying")]
    CreationFailed { step: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Config { message: String, hint: String },
}

impl StoreError {
    /// Maps an error to the CLI exit code that describes it.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StoreError::AuthenticationFailed { .. } | StoreError::Forbidden { .. } => {
                ExitCode::AccessDenied
            }
            StoreError::InvalidLaptopId { .. } | StoreError::Validation { .. } => {
                ExitCode::InvalidArguments
            }
            _ => ExitCode::ApplicationError,
        }
    }
}
