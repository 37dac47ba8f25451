//! Client configuration.

/// Everything the composition root needs to wire the stack.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the FallApp backend, without trailing slash.
    pub base_url: String,
    /// Directory holding the SQLite cache file. Created if missing.
    pub data_dir: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, data_dir: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            data_dir: data_dir.into(),
        }
    }
}
