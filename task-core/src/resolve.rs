//! Turns the requested delegate into the chain the runtime tries in order.
//!
//! Nothing is checked here. An NNAPI request on a host without NNAPI still
//! produces an NNAPI entry; it is skipped later by [`DelegateChain::select`].

use tasklite_delegates::{CpuDelegate, DelegateChain, DynDelegateProvider, NnapiDelegate};

use crate::base_options::BaseOptions;
use crate::compute_settings::{ComputeSettings, CpuSettings, Delegate, ExecutionPreference, NnapiSettings};

impl ComputeSettings {
    /// Delegates for these settings, most preferred first.
    ///
    /// - `Delegate::None` gives `[cpu]`
    /// - `Delegate::Nnapi` gives `[nnapi, cpu]`, or `[nnapi]` when NNAPI's
    ///   own CPU fallback is disallowed
    pub fn delegate_chain(&self) -> DelegateChain {
        let mut providers = Vec::with_capacity(2);

        match self.delegate() {
            Delegate::None => {
                providers.push(cpu_delegate(self.cpu_settings()));
            }
            Delegate::Nnapi => {
                let nnapi = self.nnapi_settings();
                providers.push(nnapi_delegate(nnapi));
                if nnapi.allow_nnapi_cpu {
                    providers.push(cpu_delegate(self.cpu_settings()));
                }
            }
        }

        log::debug!(
            "Resolved delegate {} to {} chain entries",
            self.delegate(),
            providers.len()
        );
        DelegateChain::new(providers)
    }
}

impl BaseOptions {
    pub fn delegate_chain(&self) -> DelegateChain {
        self.compute_settings().delegate_chain()
    }
}

fn cpu_delegate(settings: &CpuSettings) -> DynDelegateProvider {
    let mut cpu = CpuDelegate::new();
    if let Some(num_threads) = settings.num_threads {
        cpu = cpu.with_num_threads(num_threads);
    }
    cpu.build()
}

fn nnapi_delegate(settings: &NnapiSettings) -> DynDelegateProvider {
    let mut nnapi = NnapiDelegate::new()
        .with_allow_fp16(settings.allow_fp16_precision_for_fp32)
        .with_allow_cpu(settings.allow_nnapi_cpu)
        .with_burst_computation(settings.use_burst_computation);

    if let Some(name) = &settings.accelerator_name {
        nnapi = nnapi.with_accelerator_name(name);
    }

    // The cache is keyed by the model token; a directory alone is useless
    match (&settings.cache_directory, &settings.model_token) {
        (Some(dir), Some(token)) => {
            nnapi = nnapi.with_cache_directory(dir).with_model_token(token);
        }
        (None, None) => {}
        _ => log::warn!("NNAPI caching needs both cache_directory and model_token, ignoring"),
    }

    if settings.execution_preference != ExecutionPreference::Undefined {
        nnapi = nnapi.with_execution_preference(settings.execution_preference.as_str());
    }

    nnapi.build()
}
