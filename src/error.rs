// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Document(DocumentError),
}

/// Failure kinds when reading one of the site's JSON documents.
/// Used to pick the localized placeholder a region degrades to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document file does not exist.
    Missing,

    /// The file exists but is not valid JSON for the expected shape.
    Malformed(String),

    /// Any other I/O failure (permission denied, is a directory, ...).
    Io(String),
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::Missing => "error-document-missing",
            DocumentError::Malformed(_) => "error-document-malformed",
            DocumentError::Io(_) => "error-document-io",
        }
    }

    /// Categorizes an I/O error raised while reading a document.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DocumentError::Missing,
            _ => DocumentError::Io(err.to_string()),
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Missing => write!(f, "Document not found"),
            DocumentError::Malformed(msg) => write!(f, "Malformed document: {}", msg),
            DocumentError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Document(DocumentError::Malformed(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
