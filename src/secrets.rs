//! Secret resolution for named connections.
//!
//! Secure-transport secrets are never read from plain configuration. When a
//! property set references a named connection, the secrets are resolved
//! through a platform-owned [`SecretResolver`] and merged into a fresh
//! property set just before validation and construction.

use crate::{FactoryError, FactoryResult};
use std::collections::HashMap;

/// Borrowed view of a named-connection reference handed to the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedConnectionRef<'a> {
    name: &'a str,
}

impl<'a> NamedConnectionRef<'a> {
    /// Wrap a connection name
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// The connection name as configured
    pub fn name(&self) -> &'a str {
        self.name
    }
}

/// Key/value pairs obtained from a trusted external store
///
/// Created only when a named connection reference exists, consumed
/// immediately by the merge, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSecrets {
    entries: HashMap<String, String>,
}

impl ResolvedSecrets {
    /// Build from key/value entries
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a JSON connection object into resolved secrets
    ///
    /// Platform connection objects arrive as flat JSON documents mapping
    /// property keys to string values.
    pub fn from_json(document: &str) -> FactoryResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(document)
            .map_err(|e| FactoryError::secrets(format!("invalid connection object: {}", e)))?;
        Ok(Self { entries })
    }

    /// Number of resolved entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store returned nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the secrets, yielding the entries for merging
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, String)> {
        self.entries.into_iter()
    }
}

/// Capability for resolving secrets from a trusted platform store
///
/// Injected into [`ConsumerFactory::create_secured`] in place of a concrete
/// hosting-platform handle, so the construction core stays testable without
/// the real platform.
///
/// [`ConsumerFactory::create_secured`]: crate::ConsumerFactory::create_secured
pub trait SecretResolver {
    /// Resolve the secrets behind a named connection reference
    fn resolve_secrets(&self, reference: NamedConnectionRef<'_>) -> FactoryResult<ResolvedSecrets>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let secrets = ResolvedSecrets::from_json(
            r#"{"ssl.keystore.location": "/certs/ks.jks", "ssl.keystore.password": "hunter2"}"#,
        )
        .unwrap();

        assert_eq!(secrets.len(), 2);
        assert!(!secrets.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_flat_document() {
        let err = ResolvedSecrets::from_json(r#"{"nested": {"key": "value"}}"#).unwrap_err();
        assert!(matches!(err, FactoryError::Secrets(_)));
    }

    #[test]
    fn test_named_connection_ref() {
        let reference = NamedConnectionRef::new("prod-broker");
        assert_eq!(reference.name(), "prod-broker");
    }
}
