//! CPU Delegate
//!
//! The runtime's default path. Always available.

use crate::constants::*;
use crate::{impl_delegate_base, DelegateBackend, DelegateOptions, DelegateProvider};

#[derive(Debug, Clone)]
pub struct CpuDelegate {
    options: DelegateOptions,
}

impl_delegate_base!(CpuDelegate, CPU_DELEGATE_NAME, DelegateBackend::Cpu);

impl CpuDelegate {
    /// Number of interpreter threads; unset lets the runtime decide
    pub fn with_num_threads(mut self, num_threads: u32) -> Self {
        self.options.set(NUM_THREADS, num_threads);
        self
    }
}

impl DelegateProvider for CpuDelegate {
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
        true
    }

    fn is_available(&self) -> bool {
        true
    }
}
