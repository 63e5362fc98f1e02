//! Task-level options: where the model comes from, and how to run it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::base_options::BaseOptions;
use crate::error::{Result, TaskError};

/// A model source, either on disk or already in memory.
///
/// Only describes the model; nothing is opened here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content: Option<Vec<u8>>,
}

impl ExternalFile {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            file_name: Some(path.as_ref().to_path_buf()),
            file_content: None,
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: None,
            file_content: Some(bytes.into()),
        }
    }

    /// True when neither a path nor bytes were given
    pub fn is_empty(&self) -> bool {
        self.file_name.is_none() && self.file_content.is_none()
    }
}

/// Options a task API is created from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskOptions {
    base_options: BaseOptions,

    /// Plain model file, run with `base_options`
    #[serde(skip_serializing_if = "Option::is_none")]
    model_file: Option<ExternalFile>,

    /// Legacy slot for a model that carries its own metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    model_file_with_metadata: Option<ExternalFile>,
}

impl TaskOptions {
    pub fn builder() -> TaskOptionsBuilder {
        TaskOptionsBuilder::default()
    }

    pub fn base_options(&self) -> &BaseOptions {
        &self.base_options
    }

    pub fn model_file(&self) -> Option<&ExternalFile> {
        self.model_file.as_ref()
    }

    pub fn model_file_with_metadata(&self) -> Option<&ExternalFile> {
        self.model_file_with_metadata.as_ref()
    }

    /// Checks that exactly one model source is set and that it is not empty.
    pub fn sanity_check(&self) -> Result<()> {
        self.model_source().map(|_| ())
    }

    /// The single model source these options name
    pub fn model_source(&self) -> Result<&ExternalFile> {
        let source = match (&self.model_file, &self.model_file_with_metadata) {
            (Some(file), None) | (None, Some(file)) => file,
            (file, with_metadata) => {
                let found = usize::from(file.is_some()) + usize::from(with_metadata.is_some());
                return Err(TaskError::InvalidArgument(format!(
                    "Expected exactly one of `base_options.model_file` or \
                     `model_file_with_metadata` to be provided, found {found}."
                )));
            }
        };

        if source.is_empty() {
            return Err(TaskError::InvalidArgument(
                "Model source has neither `file_name` nor `file_content`.".to_string(),
            ));
        }

        Ok(source)
    }
}

/// Builder for [`TaskOptions`]
#[derive(Debug, Clone, Default)]
pub struct TaskOptionsBuilder {
    options: TaskOptions,
}

impl TaskOptionsBuilder {
    pub fn with_base_options(mut self, base_options: BaseOptions) -> Self {
        self.options.base_options = base_options;
        self
    }

    pub fn with_model_file(mut self, model_file: ExternalFile) -> Self {
        self.options.model_file = Some(model_file);
        self
    }

    pub fn with_model_file_with_metadata(mut self, model_file: ExternalFile) -> Self {
        self.options.model_file_with_metadata = Some(model_file);
        self
    }

    /// Builds without checking; call [`TaskOptions::sanity_check`] before use.
    pub fn build(self) -> TaskOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_file_only() {
        let options = TaskOptions::builder()
            .with_model_file(ExternalFile::from_path("models/movenet.tflite"))
            .build();

        assert!(options.sanity_check().is_ok());
        assert_eq!(
            options.model_source().unwrap().file_name.as_deref(),
            Some(Path::new("models/movenet.tflite"))
        );
    }

    #[test]
    fn test_model_file_with_metadata_only() {
        let options = TaskOptions::builder()
            .with_model_file_with_metadata(ExternalFile::from_bytes(b"TFL3".to_vec()))
            .build();

        let source = options.model_source().unwrap();
        assert_eq!(source.file_content.as_deref(), Some(b"TFL3".as_slice()));
        assert!(source.file_name.is_none());
    }

    #[test]
    fn test_no_model_rejected() {
        let err = TaskOptions::builder().build().sanity_check().unwrap_err();

        assert!(matches!(err, TaskError::InvalidArgument(_)));
        assert!(err.to_string().contains(
            "Expected exactly one of `base_options.model_file` or \
             `model_file_with_metadata` to be provided, found 0."
        ));
    }

    #[test]
    fn test_two_models_rejected() {
        let err = TaskOptions::builder()
            .with_model_file(ExternalFile::from_path("a.tflite"))
            .with_model_file_with_metadata(ExternalFile::from_path("b.tflite"))
            .build()
            .sanity_check()
            .unwrap_err();

        assert!(err.to_string().contains("found 2."));
    }

    #[test]
    fn test_empty_external_file_rejected() {
        let err = TaskOptions::builder()
            .with_model_file(ExternalFile::default())
            .build()
            .sanity_check()
            .unwrap_err();

        assert!(matches!(err, TaskError::InvalidArgument(_)));
    }
}
