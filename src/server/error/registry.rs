use thiserror::Error;

/// Failures while building the handler registry at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two handlers of the same family claim one key.
    ///
    /// # Fields
    /// - `family` - `command`, `component` or `modal`
    /// - `key` - The contested name or custom id key
    #[error("Duplicate {family} handler '{key}'")]
    DuplicateKey { family: &'static str, key: String },
}
