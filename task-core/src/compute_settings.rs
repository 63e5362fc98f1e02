//! Acceleration settings handed to the inference runtime.
//!
//! `ComputeSettings` names the delegate a task should run on plus the
//! delegate-specific knobs. Nothing here is validated: the runtime decides
//! whether a combination can be honored.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Hardware delegate requested from the runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delegate {
    /// No override: the runtime's default CPU path
    #[default]
    None,
    /// Android Neural Networks API
    Nnapi,
}

impl Delegate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Nnapi => "nnapi",
        }
    }
}

impl fmt::Display for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How NNAPI should trade latency against power
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPreference {
    #[default]
    Undefined,
    LowPower,
    FastSingleAnswer,
    SustainedSpeed,
}

impl ExecutionPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::LowPower => "low_power",
            Self::FastSingleAnswer => "fast_single_answer",
            Self::SustainedSpeed => "sustained_speed",
        }
    }
}

impl fmt::Display for ExecutionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advanced NNAPI configuration. Only read when the delegate is [`Delegate::Nnapi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NnapiSettings {
    /// Pin a specific accelerator; `None` lets NNAPI choose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_name: Option<String>,

    /// Compilation cache directory, used together with `model_token`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_directory: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_token: Option<String>,

    pub execution_preference: ExecutionPreference,

    pub allow_fp16_precision_for_fp32: bool,

    /// Allow NNAPI's reference CPU implementation (Android 10+)
    pub allow_nnapi_cpu: bool,

    pub use_burst_computation: bool,
}

impl Default for NnapiSettings {
    fn default() -> Self {
        Self {
            accelerator_name: None,
            cache_directory: None,
            model_token: None,
            execution_preference: ExecutionPreference::Undefined,
            allow_fp16_precision_for_fp32: false,
            allow_nnapi_cpu: true,
            use_burst_computation: false,
        }
    }
}

/// CPU path configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuSettings {
    /// Interpreter threads; `None` lets the runtime decide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<u32>,
}

/// Delegate choice plus delegate-specific settings.
///
/// The default value requests no delegate override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeSettings {
    delegate: Delegate,
    nnapi_settings: NnapiSettings,
    cpu_settings: CpuSettings,
}

impl ComputeSettings {
    pub fn builder() -> ComputeSettingsBuilder {
        ComputeSettingsBuilder::default()
    }

    pub fn delegate(&self) -> Delegate {
        self.delegate
    }

    pub fn nnapi_settings(&self) -> &NnapiSettings {
        &self.nnapi_settings
    }

    pub fn cpu_settings(&self) -> &CpuSettings {
        &self.cpu_settings
    }
}

/// Staging value for [`ComputeSettings`]
#[derive(Debug, Clone, Default)]
pub struct ComputeSettingsBuilder {
    settings: ComputeSettings,
}

impl ComputeSettingsBuilder {
    pub fn with_delegate(mut self, delegate: Delegate) -> Self {
        self.settings.delegate = delegate;
        self
    }

    pub fn with_nnapi_settings(mut self, nnapi_settings: NnapiSettings) -> Self {
        self.settings.nnapi_settings = nnapi_settings;
        self
    }

    pub fn with_cpu_settings(mut self, cpu_settings: CpuSettings) -> Self {
        self.settings.cpu_settings = cpu_settings;
        self
    }

    pub fn build(self) -> ComputeSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_delegate() {
        let settings = ComputeSettings::default();
        assert_eq!(settings.delegate(), Delegate::None);
        assert_eq!(settings.nnapi_settings(), &NnapiSettings::default());
        assert_eq!(settings.cpu_settings().num_threads, None);
        assert_eq!(ComputeSettings::builder().build(), settings);
    }

    #[test]
    fn test_nnapi_defaults_allow_cpu() {
        let nnapi = NnapiSettings::default();
        assert!(nnapi.allow_nnapi_cpu);
        assert!(!nnapi.allow_fp16_precision_for_fp32);
        assert_eq!(nnapi.execution_preference, ExecutionPreference::Undefined);
    }

    #[test]
    fn test_builder_accepts_unused_sub_settings() {
        // NNAPI knobs are carried even when NNAPI is not the delegate
        let nnapi = NnapiSettings {
            accelerator_name: Some("dsp".to_string()),
            ..Default::default()
        };
        let settings = ComputeSettings::builder()
            .with_nnapi_settings(nnapi.clone())
            .build();

        assert_eq!(settings.delegate(), Delegate::None);
        assert_eq!(settings.nnapi_settings(), &nnapi);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Delegate::Nnapi.to_string(), "nnapi");
        assert_eq!(ExecutionPreference::FastSingleAnswer.to_string(), "fast_single_answer");
    }
}
