//! TaskLite Task Core
//!
//! Options every task API (classification, detection, landmarks, ...) is
//! configured with, and the mapping from those options to the delegates the
//! inference runtime should try.
//!
//! # Examples
//!
//! ```rust
//! use tasklite_task_core::*;
//!
//! // Ask for NNAPI with its default settings
//! let options = BaseOptions::builder().use_nnapi().build();
//! assert_eq!(options.compute_settings().delegate(), Delegate::Nnapi);
//!
//! // Whatever is set last wins
//! let options = BaseOptions::builder()
//!     .use_nnapi()
//!     .with_compute_settings(ComputeSettings::default())
//!     .build();
//! assert_eq!(options.compute_settings().delegate(), Delegate::None);
//!
//! // NNAPI first, CPU fallback
//! let chain = BaseOptions::builder().use_nnapi().build().delegate_chain();
//! assert_eq!(chain.providers().len(), 2);
//! ```

pub mod base_options;
pub mod compute_settings;
pub mod config;
pub mod error;
pub mod resolve;
pub mod task_options;

pub use base_options::{BaseOptions, BaseOptionsBuilder};
pub use compute_settings::{
    ComputeSettings, ComputeSettingsBuilder, CpuSettings, Delegate, ExecutionPreference,
    NnapiSettings,
};
pub use error::{Result, TaskError};
pub use task_options::{ExternalFile, TaskOptions, TaskOptionsBuilder};

pub use tasklite_delegates::{DelegateBackend, DelegateChain, DelegateProvider, DynDelegateProvider};
