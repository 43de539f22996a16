//! Consumer factory: the validation and construction pipeline.
//!
//! Construction is a linear, stateless pipeline:
//!
//! ```text
//! Start -> GuardChecked -> [Merged] -> FilesChecked -> Built
//! ```
//!
//! Every gate is terminal on failure. There are no retries and no partial
//! construction; a failed gate yields no consumer handle.

use crate::deserializer::{build_value_deserializer, RegistryAvroDeserializer, StringDeserializer};
use crate::metrics::FactoryMetrics;
use crate::secrets::{NamedConnectionRef, SecretResolver};
use crate::{fs_check, guard};
use crate::{ConnectionProperties, FactoryError, FactoryResult};
use tracing::{info, warn};

/// Boundary to the underlying streaming client library
///
/// The factory hands the builder the full property set plus the two codecs
/// and receives an opaque consumer handle. Keeping the client behind this
/// trait makes the construction core independent of any specific client
/// implementation.
pub trait ClientBuilder {
    /// The constructed consumer handle, owned by the caller once returned
    type Consumer;

    /// The client library's native error type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct a consumer bound to the given codecs
    ///
    /// May perform network handshakes; blocking from the caller's
    /// perspective.
    fn build_consumer(
        &self,
        properties: &ConnectionProperties,
        key_codec: StringDeserializer,
        value_codec: RegistryAvroDeserializer,
    ) -> Result<Self::Consumer, Self::Error>;
}

/// Factory producing validated, ready-to-use consumers
///
/// Stateless between invocations: each call operates on an independently
/// owned property set, so concurrent callers need no coordination.
#[derive(Debug, Clone)]
pub struct ConsumerFactory<B: ClientBuilder> {
    builder: B,
}

impl<B: ClientBuilder> ConsumerFactory<B> {
    /// Create a factory around a client builder
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Access the underlying client builder
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Construct a consumer from already-validated properties
    ///
    /// Builds the plain-text key codec and the registry-bound value codec
    /// (from the registry URL alone), then delegates to the client builder.
    /// Any builder failure is rewrapped into
    /// [`FactoryError::Construction`] carrying the topic name and the
    /// original cause, so callers see one stable error surface.
    pub fn create(&self, properties: &ConnectionProperties) -> FactoryResult<B::Consumer> {
        let metrics = FactoryMetrics::new(properties.topic());

        let key_codec = StringDeserializer;
        let value_codec = build_value_deserializer(properties.schema_registry_url());

        match self
            .builder
            .build_consumer(properties, key_codec, value_codec)
        {
            Ok(consumer) => {
                metrics.record_built();
                info!(topic = properties.topic(), "consumer constructed");
                Ok(consumer)
            }
            Err(e) => {
                metrics.record_construction_failure();
                Err(FactoryError::construction_with_source(properties.topic(), e))
            }
        }
    }

    /// Validate, resolve secrets, and construct a consumer
    ///
    /// Pipeline order:
    /// 1. Credential guard - fails before any filesystem or external-store
    ///    access if secure secrets were supplied inline.
    /// 2. Secret merge - only when a named connection is referenced; the
    ///    resolver is the trusted platform store.
    /// 3. File existence checks - run against the merged properties, so
    ///    they never see stale, unmerged paths. Skipped entirely when no
    ///    named connection exists.
    /// 4. [`ConsumerFactory::create`] on the (possibly merged) properties.
    pub fn create_secured(
        &self,
        properties: &ConnectionProperties,
        resolver: &dyn SecretResolver,
    ) -> FactoryResult<B::Consumer> {
        let metrics = FactoryMetrics::new(properties.topic());

        if let Err(e) = guard::check_no_inline_secrets(properties) {
            metrics.record_gate_rejection("credential_guard");
            warn!(topic = properties.topic(), "credential guard rejected configuration");
            return Err(e);
        }

        match properties.named_connection() {
            Some(name) => {
                info!(topic = properties.topic(), connection = name, "resolving named connection");
                let secrets = resolver.resolve_secrets(NamedConnectionRef::new(name))?;
                let merged = properties.merge_with_secrets(secrets);

                if let Err(e) = fs_check::check_files_exist(&merged) {
                    metrics.record_gate_rejection("file_existence");
                    warn!(topic = properties.topic(), "secure transport file check failed");
                    return Err(e);
                }

                self.create(&merged)
            }
            None => self.create(properties),
        }
    }
}
