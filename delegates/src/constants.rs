//! Option key constants for every delegate
//!
//! Keys are shared with the runtime, so they live here instead of as string
//! literals at the call sites.

// ============================================================================
// CPU Delegate
// ============================================================================

pub const NUM_THREADS: &str = "num_threads";

// ============================================================================
// NNAPI Delegate
// ============================================================================

pub const ACCELERATOR_NAME: &str = "accelerator_name";
pub const CACHE_DIRECTORY: &str = "cache_directory";
pub const MODEL_TOKEN: &str = "model_token";
pub const EXECUTION_PREFERENCE: &str = "execution_preference";
pub const ALLOW_FP16_PRECISION_FOR_FP32: &str = "allow_fp16_precision_for_fp32";
pub const ALLOW_NNAPI_CPU: &str = "allow_nnapi_cpu";
pub const USE_BURST_COMPUTATION: &str = "use_burst_computation";

// ============================================================================
// Delegate names
// ============================================================================

pub const CPU_DELEGATE_NAME: &str = "CpuDelegate";
pub const NNAPI_DELEGATE_NAME: &str = "NnapiDelegate";
