//! TaskLite Delegates
//!
//! Descriptors for the hardware delegates a task can ask the inference
//! runtime for. A descriptor carries a name, a backend and string options;
//! executing the delegate is left to the runtime.
//!
//! # Examples
//!
//! ```rust
//! use tasklite_delegates::*;
//!
//! let chain = DelegateChain::new(vec![
//!     NnapiDelegate::new()
//!         .with_accelerator_name("google-edgetpu")
//!         .with_allow_fp16(true)
//!         .build(),
//!     CpuDelegate::new().with_num_threads(4).build(),
//! ]);
//!
//! // Off Android the NNAPI entry is skipped
//! let selected = chain.select().unwrap();
//! println!("Running with {}", selected.name());
//! ```

use std::fmt;
use std::sync::Arc;

pub mod chain;
pub mod constants;
pub mod error;
pub mod options;

pub mod cpu;
pub mod nnapi;

pub use chain::DelegateChain;
pub use cpu::CpuDelegate;
pub use error::{ProviderError, Result};
pub use nnapi::NnapiDelegate;
pub use options::DelegateOptions;

/// Which accelerator a delegate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateBackend {
    Nnapi,
    Cpu,
}

/// One entry the runtime can be asked to execute a model with.
///
/// Availability is decided without touching the model: a compile-time target
/// check for NNAPI, always true for the CPU path.
pub trait DelegateProvider: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn backend(&self) -> DelegateBackend;

    /// False when the delegate cannot exist on this build target.
    fn supported_by_platform(&self) -> bool;

    fn options(&self) -> &DelegateOptions;

    fn is_available(&self) -> bool;
}

pub type DynDelegateProvider = Arc<dyn DelegateProvider>;

/// Generates `new`, `build` and `Default` for a delegate holding only `options`.
#[macro_export]
macro_rules! impl_delegate_base {
    ($delegate:ident, $name:expr, $backend:expr) => {
        impl $delegate {
            pub fn new() -> Self {
                Self {
                    options: $crate::DelegateOptions::new(),
                }
            }

            pub fn build(self) -> $crate::DynDelegateProvider {
                std::sync::Arc::new(self)
            }

            const NAME: &'static str = $name;
            const BACKEND: $crate::DelegateBackend = $backend;
        }

        impl Default for $delegate {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
