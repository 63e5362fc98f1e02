use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Raised by [`crate::DelegateChain::select`] when every entry was skipped
    #[error("Delegate not available: {0}")]
    NotAvailable(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
