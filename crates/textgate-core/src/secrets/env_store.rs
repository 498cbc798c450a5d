//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::SecretStore;

/// Mapping from backend ids to environment variable names
static ENV_VAR_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("openai", "OPENAI_API_KEY");
    m.insert("groq", "GROQ_API_KEY");
    m.insert("openrouter", "OPENROUTER_API_KEY");
    m
});

/// Secret store that reads from environment variables
///
/// Read-only: it reflects whatever the shell (or a `.env` loader) set
/// before the process started. Empty values count as absent.
///
/// # Backend Mapping
///
/// Backend ids map to their credential slots:
/// - `openai` → `OPENAI_API_KEY`
/// - `groq` → `GROQ_API_KEY`
/// - `openrouter` → `OPENROUTER_API_KEY`
///
/// Environment variables can also be read directly by their full name.
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (), // Prevent direct construction, use new()
}

impl EnvSecretStore {
    /// Create a new environment variable secret store
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get the environment variable name for a backend id
    pub fn env_var_for(backend: &str) -> Option<&'static str> {
        ENV_VAR_MAP.get(backend.to_lowercase().as_str()).copied()
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        // First, try the key as-is (for direct env var access)
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        // Then, try mapping from backend id to env var
        if let Some(env_var) = Self::env_var_for(key) {
            if let Ok(value) = env::var(env_var) {
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
    }

    #[test]
    fn test_env_var_mapping() {
        assert_eq!(EnvSecretStore::env_var_for("openai"), Some("OPENAI_API_KEY"));
        assert_eq!(EnvSecretStore::env_var_for("Groq"), Some("GROQ_API_KEY"));
        assert_eq!(
            EnvSecretStore::env_var_for("openrouter"),
            Some("OPENROUTER_API_KEY")
        );
        assert_eq!(EnvSecretStore::env_var_for("palm"), None);
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("TEXTGATE_TEST_SECRET", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(
            store.get("TEXTGATE_TEST_SECRET"),
            Some("test_value".to_string())
        );

        env::remove_var("TEXTGATE_TEST_SECRET");
    }

    #[test]
    fn test_env_store_empty_value_is_absent() {
        env::set_var("TEXTGATE_EMPTY_SECRET", "");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("TEXTGATE_EMPTY_SECRET"), None);

        env::remove_var("TEXTGATE_EMPTY_SECRET");
    }

    #[test]
    fn test_env_store_get_not_found() {
        let store = EnvSecretStore::new();
        assert_eq!(store.get("nonexistent_backend_xyz"), None);
    }
}
