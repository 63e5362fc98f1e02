//! Loading [`BaseOptions`] from TOML or JSON.
//!
//! Missing fields fall back to their defaults, so an empty document is the
//! same as `BaseOptions::builder().build()`. Delegate semantics are not checked.
//!
//! ```toml
//! [compute_settings]
//! delegate = "nnapi"
//!
//! [compute_settings.nnapi_settings]
//! accelerator_name = "google-edgetpu"
//! execution_preference = "sustained_speed"
//! ```

use std::path::Path;

use crate::base_options::BaseOptions;
use crate::error::{Result, TaskError};

impl BaseOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a `.toml` or `.json` file, picked by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let options = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(TaskError::UnsupportedFormat(path.display().to_string())),
        };

        log::info!(
            "Loaded base options from {} (delegate: {})",
            path.display(),
            options.compute_settings().delegate()
        );
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
