//! Credential guard: rejects inline secure-transport secrets.

use crate::config::{keys, ConnectionProperties};
use crate::{FactoryError, FactoryResult};
use tracing::warn;

/// Fail if secure-transport secrets are supplied directly in the property set
///
/// When secure transport is enabled, each of the five secure-property keys
/// must be absent from the plain configuration; they may only arrive through
/// a trusted named connection. When secure transport is disabled no scan is
/// performed, so ordinary non-secure deployments never trip a false positive.
///
/// Pure predicate: no filesystem or network access.
pub fn check_no_inline_secrets(properties: &ConnectionProperties) -> FactoryResult<()> {
    if !properties.is_ssl_enabled() {
        return Ok(());
    }

    for key in keys::SECURE_PROPERTY_KEYS {
        if properties.contains_key(key) {
            warn!(property = key, "secure property supplied inline");
            return Err(FactoryError::config(format!(
                "secure property '{}' must be supplied through a trusted named connection, \
                 not in plain configuration",
                key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssl_disabled_skips_scan() {
        // Secure fields present but SSL off: no scan, always passes
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_property(keys::SSL_KEYSTORE_PASSWORD, "hunter2");

        assert!(check_no_inline_secrets(&props).is_ok());
    }

    #[test]
    fn test_ssl_enabled_clean_properties_pass() {
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_ssl_enabled(true)
            .with_property("group.id", "order-processors");

        assert!(check_no_inline_secrets(&props).is_ok());
    }

    #[test]
    fn test_each_secure_key_is_rejected_inline() {
        for key in keys::SECURE_PROPERTY_KEYS {
            let props = ConnectionProperties::new("orders", "http://registry:8081")
                .with_ssl_enabled(true)
                .with_property(key, "anything");

            let err = check_no_inline_secrets(&props).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains(key));
        }
    }

    #[test]
    fn test_named_connection_does_not_excuse_inline_secrets() {
        // Both present is a configuration error
        let props = ConnectionProperties::new("orders", "http://registry:8081")
            .with_ssl_enabled(true)
            .with_named_connection("prod-broker")
            .with_property(keys::SSL_KEY_PASSWORD, "hunter2");

        assert!(check_no_inline_secrets(&props).is_err());
    }
}
