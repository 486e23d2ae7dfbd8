//! Configuration for a fortune book.

/// Storage key the ledger state is written under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "fortune-storage";

/// Configuration for a [`FortuneBook`](crate::FortuneBook).
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// RNG seed for reproducible template picks. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Key of the storage slot holding the ledger state.
    pub storage_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the storage key. Blank keys fall back to the default.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.storage_key = if key.trim().is_empty() {
            DEFAULT_STORAGE_KEY.to_string()
        } else {
            key
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = LedgerConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.storage_key, "fortune-storage");
    }

    #[test]
    fn builder_methods() {
        let cfg = LedgerConfig::default()
            .with_seed(123)
            .with_storage_key("alt");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.storage_key, "alt");
    }

    #[test]
    fn blank_key_falls_back() {
        let cfg = LedgerConfig::default().with_storage_key("  ");
        assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    }
}
