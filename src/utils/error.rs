use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Embedded resource '{name}' not found (resolved as '{resolved}')")]
    ResourceNotFound { name: String, resolved: String },

    #[error("File '{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to convert value '{value}' of {source_type} to {dest_type}")]
    EnumConversionFailed {
        value: String,
        source_type: &'static str,
        dest_type: &'static str,
    },

    #[error("Unknown text encoding: {label}")]
    UnknownEncoding { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },
}

impl UtilsError {
    /// 給使用者的處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UtilsError::InvalidArgument { .. } => "Pass a non-empty value for the argument",
            UtilsError::ResourceNotFound { .. } => {
                "Run `switcher-utils resources` to list the embedded resource names"
            }
            UtilsError::FileNotFound { .. } => "Check that the path exists and points to a file",
            UtilsError::EnumConversionFailed { .. } => {
                "Make sure both enumerations declare a variant with the same name"
            }
            UtilsError::UnknownEncoding { .. } => {
                "Use a WHATWG encoding label such as utf-8, windows-1252 or gbk"
            }
            UtilsError::Io(_) => "Check file permissions and that the file is readable",
            UtilsError::Serialization(_) => "Retry without --json",
            UtilsError::Config { .. } => "Fix the settings file and try again",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            UtilsError::InvalidArgument { .. }
            | UtilsError::UnknownEncoding { .. }
            | UtilsError::Config { .. } => 2,
            UtilsError::ResourceNotFound { .. } | UtilsError::FileNotFound { .. } => 3,
            UtilsError::EnumConversionFailed { .. } => 4,
            UtilsError::Io(_) | UtilsError::Serialization(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
