use std::sync::Arc;

use crate::{DelegateBackend, DynDelegateProvider, ProviderError, Result};

/// Delegates in the order the runtime should try them.
#[derive(Debug, Clone)]
pub struct DelegateChain {
    entries: Vec<DynDelegateProvider>,
}

impl DelegateChain {
    pub fn new(entries: Vec<DynDelegateProvider>) -> Self {
        Self { entries }
    }

    pub fn providers(&self) -> &[DynDelegateProvider] {
        &self.entries
    }

    pub fn backends(&self) -> Vec<DelegateBackend> {
        self.entries.iter().map(|entry| entry.backend()).collect()
    }

    /// First entry that can run here. Skipped entries are logged.
    pub fn select(&self) -> Result<DynDelegateProvider> {
        for entry in &self.entries {
            if entry.is_available() {
                log::debug!(
                    "Selected {} delegate ({} options)",
                    entry.name(),
                    entry.options().len()
                );
                return Ok(Arc::clone(entry));
            }

            if entry.supported_by_platform() {
                log::warn!("{} delegate not available on this device, skipping", entry.name());
            } else {
                log::warn!("{} delegate not built for this target, skipping", entry.name());
            }
        }

        let names: Vec<&str> = self.entries.iter().map(|entry| entry.name()).collect();
        Err(ProviderError::NotAvailable(format!(
            "none of [{}] can run on this system",
            names.join(", ")
        )))
    }
}
