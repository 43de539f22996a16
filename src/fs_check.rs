//! Fail-fast filesystem checks for secure-transport files.

use crate::config::{keys, ConnectionProperties};
use crate::{FactoryError, FactoryResult};
use std::path::Path;
use tracing::debug;

/// Verify the keystore and truststore files exist before construction
///
/// When secure transport is enabled, paths are checked in fixed order:
/// keystore first, then truststore. The first missing file fails the check
/// immediately; the remaining path is not touched. When secure transport is
/// disabled the filesystem is never accessed.
///
/// Existence is checked once here and not re-verified later.
pub fn check_files_exist(properties: &ConnectionProperties) -> FactoryResult<()> {
    if !properties.is_ssl_enabled() {
        return Ok(());
    }

    check_regular_file(
        keys::SSL_KEYSTORE_LOCATION,
        properties.ssl_keystore_location(),
    )?;
    check_regular_file(
        keys::SSL_TRUSTSTORE_LOCATION,
        properties.ssl_truststore_location(),
    )?;

    Ok(())
}

fn check_regular_file(key: &str, location: Option<&str>) -> FactoryResult<()> {
    let path = location
        .ok_or_else(|| FactoryError::config(format!("{} is not set", key)))?;

    if !Path::new(path).is_file() {
        return Err(FactoryError::missing_file(path));
    }

    debug!(path, "secure transport file present");
    Ok(())
}
