//! Registry of configured backends

use std::sync::Arc;

use super::http::HttpChatClient;
use super::traits::ChatClient;
use super::BackendId;
use crate::logging::SharedLogger;
use crate::secrets::SecretStore;

/// One configured upstream backend
///
/// Exists if and only if its credential was present at startup. Owns the
/// connection handle plus the model catalog used for enumeration and
/// default selection.
pub struct Backend {
    id: BackendId,
    client: Arc<dyn ChatClient>,
    models: Vec<String>,
    default_model: String,
}

impl Backend {
    /// Build a backend around an existing connection handle
    ///
    /// The model catalog and default come from the id's static catalog,
    /// which keeps the invariant that the default is a catalog member.
    pub fn new(id: BackendId, client: Arc<dyn ChatClient>) -> Self {
        Self {
            id,
            client,
            models: id.models().iter().map(|m| (*m).to_string()).collect(),
            default_model: id.default_model().to_string(),
        }
    }

    pub fn id(&self) -> BackendId {
        self.id
    }

    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}

/// Immutable set of backends configured at startup
///
/// Constructed once from a credential store and passed by reference into
/// the dispatcher; there is no mutation, no hot reload, and no global
/// instance. Safe to share across concurrent calls without locking.
pub struct BackendRegistry {
    backends: Vec<Backend>,
}

impl BackendRegistry {
    /// Build the registry by checking each backend's credential slot
    ///
    /// Backends are checked in `BackendId::ALL` priority order; that order
    /// is preserved in `available()`. A backend without a credential is
    /// simply absent, not stubbed. Credentials are not validated here -
    /// a bad key surfaces as an authentication failure on the first call.
    pub fn from_secret_store(store: &dyn SecretStore, logger: &SharedLogger) -> Self {
        let mut backends = Vec::new();
        for id in BackendId::ALL {
            match store.get(id.as_str()) {
                Some(api_key) => {
                    logger.info(&format!(
                        "backend {} configured ({} set)",
                        id,
                        id.env_var()
                    ));
                    let client = HttpChatClient::new(id, api_key, Arc::clone(logger));
                    backends.push(Backend::new(id, Arc::new(client)));
                }
                None => {
                    logger.debug(&format!("backend {} not configured ({} unset)", id, id.env_var()));
                }
            }
        }
        if backends.is_empty() {
            logger.warn("no backends configured; every tool call will report the missing credentials");
        }
        Self { backends }
    }

    /// Build a registry from pre-constructed backends (tests, embedding)
    pub fn with_backends(backends: Vec<Backend>) -> Self {
        Self { backends }
    }

    /// Ids of all configured backends, in priority order
    pub fn available(&self) -> Vec<BackendId> {
        self.backends.iter().map(Backend::id).collect()
    }

    /// Whether no backend is configured
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Look up a configured backend
    pub fn get(&self, id: BackendId) -> Option<&Backend> {
        self.backends.iter().find(|b| b.id == id)
    }

    /// Default model for a configured backend
    pub fn default_model_for(&self, id: BackendId) -> Option<&str> {
        self.get(id).map(Backend::default_model)
    }

    /// Full model catalog for a configured backend
    pub fn models_for(&self, id: BackendId) -> Option<&[String]> {
        self.get(id).map(Backend::models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::providers::MockChatClient;
    use crate::secrets::MemorySecretStore;

    fn logger() -> SharedLogger {
        Arc::new(NoOpLogger)
    }

    #[test]
    fn test_empty_store_yields_empty_registry() {
        let store = MemorySecretStore::new();
        let registry = BackendRegistry::from_secret_store(&store, &logger());

        assert!(registry.is_empty());
        assert!(registry.available().is_empty());
        assert!(registry.get(BackendId::OpenAi).is_none());
    }

    #[test]
    fn test_only_credentialed_backends_exist() {
        let store = MemorySecretStore::new().with("groq", "gsk-test");
        let registry = BackendRegistry::from_secret_store(&store, &logger());

        assert_eq!(registry.available(), vec![BackendId::Groq]);
        assert!(registry.get(BackendId::Groq).is_some());
        assert!(registry.get(BackendId::OpenAi).is_none());
        assert!(registry.get(BackendId::OpenRouter).is_none());
    }

    #[test]
    fn test_priority_order_is_check_order() {
        // Insertion order of the store must not matter
        let store = MemorySecretStore::new()
            .with("openrouter", "or-test")
            .with("openai", "sk-test")
            .with("groq", "gsk-test");
        let registry = BackendRegistry::from_secret_store(&store, &logger());

        assert_eq!(
            registry.available(),
            vec![BackendId::OpenAi, BackendId::Groq, BackendId::OpenRouter]
        );
    }

    #[test]
    fn test_default_model_is_catalog_member() {
        let store = MemorySecretStore::new()
            .with("openai", "sk-test")
            .with("groq", "gsk-test")
            .with("openrouter", "or-test");
        let registry = BackendRegistry::from_secret_store(&store, &logger());

        for id in registry.available() {
            let models = registry.models_for(id).expect("configured backend");
            let default = registry.default_model_for(id).expect("configured backend");
            assert!(models.iter().any(|m| m == default));
            assert!(!models.is_empty());
        }
    }

    #[test]
    fn test_unconfigured_lookups_are_none() {
        let registry = BackendRegistry::with_backends(vec![]);
        assert_eq!(registry.default_model_for(BackendId::OpenAi), None);
        assert_eq!(registry.models_for(BackendId::Groq), None);
    }

    #[test]
    fn test_with_backends_preserves_given_order() {
        let registry = BackendRegistry::with_backends(vec![
            Backend::new(
                BackendId::Groq,
                MockChatClient::fixed(BackendId::Groq, "ok"),
            ),
            Backend::new(
                BackendId::OpenAi,
                MockChatClient::fixed(BackendId::OpenAi, "ok"),
            ),
        ]);

        assert_eq!(
            registry.available(),
            vec![BackendId::Groq, BackendId::OpenAi]
        );
    }
}
