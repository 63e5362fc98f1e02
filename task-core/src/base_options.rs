//! Options shared by every task API.

use serde::{Deserialize, Serialize};

use crate::compute_settings::{ComputeSettings, Delegate};

/// Options to configure task APIs in general.
///
/// Immutable once built. Use [`BaseOptions::builder`] to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseOptions {
    compute_settings: ComputeSettings,
}

impl BaseOptions {
    /// New builder seeded with `ComputeSettings::default()`
    pub fn builder() -> BaseOptionsBuilder {
        BaseOptionsBuilder::default()
    }

    pub fn compute_settings(&self) -> &ComputeSettings {
        &self.compute_settings
    }
}

/// Builder for [`BaseOptions`]
#[derive(Debug, Clone, Default)]
pub struct BaseOptionsBuilder {
    compute_settings: ComputeSettings,
}

impl BaseOptionsBuilder {
    /// Sets the advanced accelerator options.
    ///
    /// Overrides the high-level delegate shortcuts such as [`Self::use_nnapi`]
    /// when called after them.
    pub fn with_compute_settings(mut self, compute_settings: ComputeSettings) -> Self {
        self.compute_settings = compute_settings;
        self
    }

    /// Uses NNAPI for inference with default advanced NNAPI settings.
    ///
    /// Overrides anything set earlier through [`Self::with_compute_settings`].
    /// To tune NNAPI, pass a full `ComputeSettings` instead.
    pub fn use_nnapi(self) -> Self {
        self.with_compute_settings(
            ComputeSettings::builder()
                .with_delegate(Delegate::Nnapi)
                .build(),
        )
    }

    pub fn build(self) -> BaseOptions {
        BaseOptions {
            compute_settings: self.compute_settings,
        }
    }
}
