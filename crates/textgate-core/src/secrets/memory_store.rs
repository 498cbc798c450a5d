//! In-memory secret store for tests

use std::collections::HashMap;

use super::traits::SecretStore;

/// Secret store backed by a plain map
///
/// Lets tests construct a registry with an exact set of credentials without
/// touching process environment variables.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretStore {
    secrets: HashMap<String, String>,
}

impl MemorySecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential, builder-style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemorySecretStore::new()
            .with("openai", "sk-test")
            .with("groq", "gsk-test");

        assert_eq!(store.name(), "memory");
        assert_eq!(store.get("openai"), Some("sk-test".to_string()));
        assert_eq!(store.get("groq"), Some("gsk-test".to_string()));
        assert_eq!(store.get("openrouter"), None);
        assert!(store.has("openai"));
        assert!(!store.has("openrouter"));
    }
}
