use std::collections::HashSet;

/// Tells whether a provider needs a secondary credential (a PIN for instance)
/// before a connection attempt is meaningful.
///
/// Unknown provider ids must answer `false`.
pub trait CredentialRegistry {
    fn requires_secondary_credential(&self, provider_id: &str) -> bool;
}

impl CredentialRegistry for HashSet<String> {
    fn requires_secondary_credential(&self, provider_id: &str) -> bool {
        self.contains(provider_id)
    }
}

impl<F> CredentialRegistry for F
where
    F: Fn(&str) -> bool,
{
    fn requires_secondary_credential(&self, provider_id: &str) -> bool {
        self(provider_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRegistry {
    with_pin: HashSet<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pin(mut self, provider_id: impl Into<String>) -> Self {
        self.with_pin.insert(provider_id.into());
        self
    }

    pub fn insert(&mut self, provider_id: impl Into<String>, requires_pin: bool) {
        let provider_id = provider_id.into();
        if requires_pin {
            self.with_pin.insert(provider_id);
        } else {
            self.with_pin.remove(&provider_id);
        }
    }
}

impl CredentialRegistry for ProviderRegistry {
    fn requires_secondary_credential(&self, provider_id: &str) -> bool {
        self.with_pin.contains(provider_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_does_not_require_pin() {
        let registry = ProviderRegistry::new().with_pin("ledger");
        assert!(registry.requires_secondary_credential("ledger"));
        assert!(!registry.requires_secondary_credential("scatter"));
        assert!(!registry.requires_secondary_credential(""));
    }

    #[test]
    fn test_insert_overrides_previous_entry() {
        let mut registry = ProviderRegistry::new();
        registry.insert("ledger", true);
        assert!(registry.requires_secondary_credential("ledger"));
        registry.insert("ledger", false);
        assert!(!registry.requires_secondary_credential("ledger"));
    }

    #[test]
    fn test_closure_and_set_registries() {
        let closure = |id: &str| id.starts_with("hw-");
        assert!(closure.requires_secondary_credential("hw-ledger"));
        assert!(!closure.requires_secondary_credential("scatter"));

        let set: HashSet<String> = ["keycard".to_string()].into_iter().collect();
        assert!(set.requires_secondary_credential("keycard"));
        assert!(!set.requires_secondary_credential("ledger"));
    }
}
