//! Connection property management for consumer construction.

use crate::secrets::ResolvedSecrets;
use crate::{FactoryError, FactoryResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// Well-known configuration keys.
pub mod keys {
    /// Keystore file path for mutual TLS
    pub const SSL_KEYSTORE_LOCATION: &str = "ssl.keystore.location";
    /// Keystore password
    pub const SSL_KEYSTORE_PASSWORD: &str = "ssl.keystore.password";
    /// Private key password
    pub const SSL_KEY_PASSWORD: &str = "ssl.key.password";
    /// Truststore file path
    pub const SSL_TRUSTSTORE_LOCATION: &str = "ssl.truststore.location";
    /// Truststore password
    pub const SSL_TRUSTSTORE_PASSWORD: &str = "ssl.truststore.password";

    /// The five secure-transport keys that must never be supplied inline
    /// when a deployment uses secure transport.
    pub const SECURE_PROPERTY_KEYS: [&str; 5] = [
        SSL_KEYSTORE_LOCATION,
        SSL_KEYSTORE_PASSWORD,
        SSL_KEY_PASSWORD,
        SSL_TRUSTSTORE_LOCATION,
        SSL_TRUSTSTORE_PASSWORD,
    ];
}

/// Immutable property set describing one consumer to construct
///
/// # Structure
/// - **Mandatory fields**: `topic`, `schema_registry_url`
/// - **Optional fields**: `ssl_enabled`, `named_connection`, passthrough
///   client `properties`
///
/// The set is never mutated in place: merging resolved secrets produces a
/// new instance (see [`ConnectionProperties::merge_with_secrets`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProperties {
    /// Topic the consumer will be bound to (mandatory)
    topic: String,

    /// Schema registry endpoint URL (mandatory)
    schema_registry_url: String,

    /// Whether secure transport is enabled for the broker connection
    #[serde(default)]
    ssl_enabled: bool,

    /// Reference to a trusted, platform-managed connection object holding
    /// the secure-transport secrets. Mutually exclusive with supplying
    /// secure fields directly in `properties`.
    #[serde(default)]
    named_connection: Option<String>,

    /// Passthrough client properties (case-sensitive keys)
    #[serde(default)]
    properties: HashMap<String, String>,
}

impl ConnectionProperties {
    /// Create a property set with the mandatory fields
    pub fn new(topic: impl Into<String>, schema_registry_url: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            schema_registry_url: schema_registry_url.into(),
            ssl_enabled: false,
            named_connection: None,
            properties: HashMap::new(),
        }
    }

    /// Enable or disable secure transport
    pub fn with_ssl_enabled(mut self, enabled: bool) -> Self {
        self.ssl_enabled = enabled;
        self
    }

    /// Reference a trusted named connection for secure fields
    pub fn with_named_connection(mut self, name: impl Into<String>) -> Self {
        self.named_connection = Some(name.into());
        self
    }

    /// Add a passthrough client property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Load mandatory configuration from environment variables
    ///
    /// - `CONSUMER_TOPIC`: topic to consume from (required)
    /// - `SCHEMA_REGISTRY_URL`: registry endpoint (required)
    ///
    /// Optional fields use defaults; load from a config file or set them
    /// explicitly to customize.
    pub fn from_env() -> FactoryResult<Self> {
        let topic =
            env::var("CONSUMER_TOPIC").map_err(|_| FactoryError::config("CONSUMER_TOPIC is required"))?;

        let schema_registry_url = env::var("SCHEMA_REGISTRY_URL")
            .map_err(|_| FactoryError::config("SCHEMA_REGISTRY_URL is required"))?;

        Ok(Self::new(topic, schema_registry_url))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> FactoryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FactoryError::config(format!("Failed to read config file {}: {}", path, e))
        })?;

        toml::from_str(&content).map_err(|e| {
            FactoryError::config(format!("Failed to parse config file {}: {}", path, e))
        })
    }

    /// Validate the mandatory fields
    pub fn validate(&self) -> FactoryResult<()> {
        if self.topic.is_empty() {
            return Err(FactoryError::config("topic cannot be empty"));
        }

        if self.schema_registry_url.is_empty() {
            return Err(FactoryError::config("schema_registry_url cannot be empty"));
        }

        Ok(())
    }

    /// Topic the consumer will be bound to
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Schema registry endpoint URL
    pub fn schema_registry_url(&self) -> &str {
        &self.schema_registry_url
    }

    /// Whether secure transport is enabled
    pub fn is_ssl_enabled(&self) -> bool {
        self.ssl_enabled
    }

    /// Whether the set references a trusted named connection
    pub fn has_named_connection(&self) -> bool {
        self.named_connection.is_some()
    }

    /// The named connection reference, if any
    pub fn named_connection(&self) -> Option<&str> {
        self.named_connection.as_deref()
    }

    /// Whether a passthrough property is present (case-sensitive)
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Look up a passthrough property
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Full passthrough property map
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Keystore path, once secure fields are populated
    pub fn ssl_keystore_location(&self) -> Option<&str> {
        self.get(keys::SSL_KEYSTORE_LOCATION)
    }

    /// Truststore path, once secure fields are populated
    pub fn ssl_truststore_location(&self) -> Option<&str> {
        self.get(keys::SSL_TRUSTSTORE_LOCATION)
    }

    /// Merge externally resolved secrets into a new property set
    ///
    /// The original set is left untouched. On key collision the resolved
    /// secret wins, so stale inline values can never shadow the trusted
    /// source.
    pub fn merge_with_secrets(&self, secrets: ResolvedSecrets) -> ConnectionProperties {
        let mut merged = self.clone();
        for (key, value) in secrets.into_entries() {
            merged.properties.insert(key, value);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmatic_construction() {
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_ssl_enabled(true)
            .with_named_connection("prod-broker")
            .with_property("group.id", "order-processors");

        assert_eq!(props.topic(), "orders");
        assert_eq!(props.schema_registry_url(), "http://registry:8081");
        assert!(props.is_ssl_enabled());
        assert!(props.has_named_connection());
        assert_eq!(props.named_connection(), Some("prod-broker"));
        assert_eq!(props.get("group.id"), Some("order-processors"));
    }

    #[test]
    fn test_validation() {
        let props = ConnectionProperties::new("orders", "http://registry:8081");
        assert!(props.validate().is_ok());

        let no_topic = ConnectionProperties::new("", "http://registry:8081");
        assert!(no_topic.validate().is_err());

        let no_registry = ConnectionProperties::new("orders", "");
        assert!(no_registry.validate().is_err());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_property("ssl.keystore.location", "/certs/ks.jks");

        assert!(props.contains_key("ssl.keystore.location"));
        assert!(!props.contains_key("SSL.KEYSTORE.LOCATION"));
    }

    #[test]
    fn test_merge_produces_new_instance() {
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_property(keys::SSL_KEYSTORE_LOCATION, "/stale/path.jks");

        let secrets = ResolvedSecrets::from_entries([
            (keys::SSL_KEYSTORE_LOCATION.to_string(), "/certs/ks.jks".to_string()),
            (keys::SSL_KEYSTORE_PASSWORD.to_string(), "hunter2".to_string()),
        ]);

        let merged = props.merge_with_secrets(secrets);

        // Resolved secret wins over the stale inline value
        assert_eq!(merged.ssl_keystore_location(), Some("/certs/ks.jks"));
        assert_eq!(merged.get(keys::SSL_KEYSTORE_PASSWORD), Some("hunter2"));

        // Original is untouched
        assert_eq!(props.ssl_keystore_location(), Some("/stale/path.jks"));
        assert!(!props.contains_key(keys::SSL_KEYSTORE_PASSWORD));
    }

    #[test]
    fn test_from_toml() {
        let toml_src = r#"
            topic = "orders"
            schema_registry_url = "http://registry:8081"
            ssl_enabled = true
            named_connection = "prod-broker"

            [properties]
            "group.id" = "order-processors"
        "#;

        let props: ConnectionProperties = toml::from_str(toml_src).unwrap();
        assert_eq!(props.topic(), "orders");
        assert!(props.is_ssl_enabled());
        assert_eq!(props.named_connection(), Some("prod-broker"));
        assert_eq!(props.get("group.id"), Some("order-processors"));
    }
}
