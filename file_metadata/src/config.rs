//! Environment-driven settings shared by the functions and scripts.

use std::env;
use std::path::PathBuf;

use crate::get_metadata::ReaderOptions;

pub const DEFAULT_TABLE_NAME: &str = "FileMetadata";
pub const DEFAULT_BUCKET_NAME: &str = "success-guaranteed";
pub const DEFAULT_BUCKET_REGION: &str = "us-east-1";
pub const DEFAULT_UPLOAD_FILE: &str = "Fierce.jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub table_name: String,
    pub bucket_name: String,
    pub bucket_region: String,
    pub upload_file: PathBuf,
    pub upload_key: String,
    pub allow_any_origin: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from `lookup`, falling back to the defaults for unset
    /// or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let upload_file = get("UPLOAD_FILE").unwrap_or_else(|| DEFAULT_UPLOAD_FILE.to_string());
        let upload_key = get("UPLOAD_KEY").unwrap_or_else(|| upload_file.clone());
        let allow_any_origin = get("ALLOW_ANY_ORIGIN")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self {
            table_name: get("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            bucket_name: get("BUCKET_NAME").unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string()),
            bucket_region: get("BUCKET_REGION")
                .unwrap_or_else(|| DEFAULT_BUCKET_REGION.to_string()),
            upload_file: PathBuf::from(upload_file),
            upload_key,
            allow_any_origin,
        }
    }

    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            allow_any_origin: self.allow_any_origin,
        }
    }
}
