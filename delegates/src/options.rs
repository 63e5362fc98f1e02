use std::collections::BTreeMap;
use std::str::FromStr;

/// String key/value options handed to the runtime with a delegate.
///
/// Keys come from [`crate::constants`]. Values are stored in their `Display`
/// form and parsed back on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegateOptions {
    values: BTreeMap<&'static str, String>,
}

impl DelegateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any earlier value for `key`.
    pub fn set(&mut self, key: &'static str, value: impl ToString) {
        self.values.insert(key, value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)?.parse().ok()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
