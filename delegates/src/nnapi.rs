//! NNAPI Delegate
//!
//! Android Neural Networks API for hardware acceleration on Android devices.

use std::path::Path;

use crate::constants::*;
use crate::{impl_delegate_base, DelegateBackend, DelegateOptions, DelegateProvider};

#[derive(Debug, Clone)]
pub struct NnapiDelegate {
    options: DelegateOptions,
}

impl_delegate_base!(NnapiDelegate, NNAPI_DELEGATE_NAME, DelegateBackend::Nnapi);

impl NnapiDelegate {
    /// Pin a specific NNAPI accelerator (e.g. "google-edgetpu")
    pub fn with_accelerator_name(mut self, name: &str) -> Self {
        self.options.set(ACCELERATOR_NAME, name);
        self
    }

    /// Directory for NNAPI compilation caching. Only used together with a model token.
    pub fn with_cache_directory(mut self, dir: &Path) -> Self {
        self.options.set(CACHE_DIRECTORY, dir.display());
        self
    }

    pub fn with_model_token(mut self, token: &str) -> Self {
        self.options.set(MODEL_TOKEN, token);
        self
    }

    /// - "low_power": prefer battery life
    /// - "fast_single_answer": lowest latency for one inference
    /// - "sustained_speed": highest throughput over many inferences
    pub fn with_execution_preference(mut self, preference: &str) -> Self {
        self.options.set(EXECUTION_PREFERENCE, preference);
        self
    }

    /// Let fp32 models run with fp16 precision (faster, less accurate)
    pub fn with_allow_fp16(mut self, enable: bool) -> Self {
        self.options.set(ALLOW_FP16_PRECISION_FOR_FP32, enable);
        self
    }

    /// Allow NNAPI's own CPU implementation (Android 10+)
    pub fn with_allow_cpu(mut self, enable: bool) -> Self {
        self.options.set(ALLOW_NNAPI_CPU, enable);
        self
    }

    pub fn with_burst_computation(mut self, enable: bool) -> Self {
        self.options.set(USE_BURST_COMPUTATION, enable);
        self
    }
}

impl DelegateProvider for NnapiDelegate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn backend(&self) -> DelegateBackend {
        Self::BACKEND
    }

    fn options(&self) -> &DelegateOptions {
        &self.options
    }

    fn supported_by_platform(&self) -> bool {
        cfg!(target_os = "android")
    }

    fn is_available(&self) -> bool {
        // NNAPI ships with every Android release we target
        self.supported_by_platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_stringly_stored() {
        let nnapi = NnapiDelegate::new()
            .with_cache_directory(Path::new("/data/cache"))
            .with_model_token("mobilenet_v1")
            .with_burst_computation(true);

        assert_eq!(nnapi.options().get(CACHE_DIRECTORY), Some("/data/cache"));
        assert_eq!(nnapi.options().get(MODEL_TOKEN), Some("mobilenet_v1"));
        assert_eq!(nnapi.options().get_as::<bool>(USE_BURST_COMPUTATION), Some(true));
        assert_eq!(nnapi.options().len(), 3);
    }

    #[test]
    fn test_later_setter_overwrites() {
        let nnapi = NnapiDelegate::new()
            .with_allow_fp16(true)
            .with_allow_fp16(false);

        assert_eq!(nnapi.options().get_as::<bool>(ALLOW_FP16_PRECISION_FOR_FP32), Some(false));
        assert_eq!(nnapi.options().len(), 1);
    }
}
