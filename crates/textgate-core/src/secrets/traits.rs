//! Core trait for credential lookup

/// Read-only source of backend credentials
///
/// Implementations:
/// - Environment variables (`EnvSecretStore`) for the real process
/// - In-memory (`MemorySecretStore`) for tests
///
/// Credential presence at startup is the sole gate on a backend's
/// availability; the registry never re-reads the store after construction.
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a credential by key
    ///
    /// The key can be a backend id (e.g. "openai"), which gets mapped to
    /// the appropriate slot, or a direct key (e.g. "OPENAI_API_KEY").
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a credential exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
