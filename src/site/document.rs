// SPDX-License-Identifier: MPL-2.0
//! Reading the site's JSON documents and the region states they produce.
//!
//! Each page region owns one document. A region that cannot be read never
//! takes the rest of the page down: it degrades to a localized placeholder.

use crate::error::{DocumentError, Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Directory under the site root holding the JSON documents.
pub const DATA_DIR: &str = "data";

/// What a page region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<T> {
    Ready(T),
    /// The document was read but had nothing to show.
    Empty { message: &'static str },
    /// The document could not be read.
    Failed {
        message: &'static str,
        cause: DocumentError,
    },
}

impl<T> Region<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Region::Ready(value) => Some(value),
            Region::Empty { .. } | Region::Failed { .. } => None,
        }
    }

    /// i18n key of the placeholder to show instead of content.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Region::Ready(_) => None,
            Region::Empty { message } | Region::Failed { message, .. } => Some(message),
        }
    }
}

/// Reads and parses `path` as JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|err| DocumentError::from_io(&err))?;
    let document = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "document loaded");
    Ok(document)
}

/// Loads one region's document and builds the region from it.
///
/// Read or parse failures turn into [`Region::Failed`] with `failed_message`
/// as the placeholder.
pub fn load_region<D, T>(
    path: &Path,
    failed_message: &'static str,
    build: impl FnOnce(D) -> Region<T>,
) -> Region<T>
where
    D: DeserializeOwned,
{
    match load_document::<D>(path) {
        Ok(document) => build(document),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "region falls back to placeholder");
            Region::Failed {
                message: failed_message,
                cause: document_cause(err),
            }
        }
    }
}

fn document_cause(err: Error) -> DocumentError {
    match err {
        Error::Document(cause) => cause,
        Error::Io(message) => DocumentError::Io(message),
        Error::Config(message) => DocumentError::Malformed(message),
    }
}

/// A JSON scalar that may be written as a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// `false` for `0` and the empty string.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Scalar::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
            Scalar::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(number) => match number.as_f64() {
                // Whole floats print like integers, so `7.0` names `player7.jpg`.
                Some(value)
                    if !number.is_i64()
                        && !number.is_u64()
                        && value.fract() == 0.0
                        && value.abs() < 1e15 =>
                {
                    write!(f, "{}", value as i64)
                }
                _ => write!(f, "{}", number),
            },
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// Returns the first set candidate, rendered as text, or `"0"`.
#[must_use]
pub fn first_set(candidates: &[Option<&Scalar>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|scalar| scalar.is_set())
        .map_or_else(|| "0".to_string(), ToString::to_string)
}

/// Returns the text if it is present and non-empty.
#[must_use]
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// Deserializes a list leniently: anything but an array becomes empty, and
/// entries that do not fit `T` are skipped.
pub fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(error = %err, "skipping malformed list entry");
                None
            }
        })
        .collect())
}

/// Deserializes a flag by truthiness: `false`, `0`, `""` and `null` are
/// false, any other value is true.
pub fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(serde_json::Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(serde_json::Value::String(text)) => !text.is_empty(),
        Some(serde_json::Value::Array(_) | serde_json::Value::Object(_)) => true,
    })
}

/// Resolves an asset reference from a document against the site root.
///
/// Absolute paths and URLs are kept as written.
#[must_use]
pub fn resolve_asset(site_root: &Path, reference: &str) -> String {
    if reference.contains("://") || Path::new(reference).is_absolute() {
        reference.to_string()
    } else {
        site_root.join(reference).to_string_lossy().into_owned()
    }
}
