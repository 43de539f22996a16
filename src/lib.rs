//! # Connect Consumer Core
//!
//! Core SDK for constructing validated, schema-registry-aware streaming
//! consumers.
//!
//! This library turns a bag of connection properties (and, optionally, a
//! trusted secret source) into a ready-to-use consumer handle bound to a
//! plain-text key codec and a registry-aware value codec. It owns the
//! validation and construction pipeline only: polling, offset management,
//! and topic administration belong to the client library behind the
//! [`ClientBuilder`] boundary.
//!
//! ## Overview
//!
//! Two entry points form a two-phase protocol:
//! - [`ConsumerFactory::create`]: build the codecs and the client from
//!   already-validated properties.
//! - [`ConsumerFactory::create_secured`]: run the credential guard, resolve
//!   and merge named-connection secrets, verify keystore/truststore files on
//!   disk, then delegate to `create`.
//!
//! Secure-transport secrets are never accepted inline: when secure transport
//! is enabled they must arrive through a named connection resolved by a
//! [`SecretResolver`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use connect_consumer_core::{
//!     ClientBuilder, ConnectionProperties, ConsumerFactory, FactoryResult,
//!     RegistryAvroDeserializer, StringDeserializer,
//! };
//!
//! struct MyClientBuilder;
//!
//! impl ClientBuilder for MyClientBuilder {
//!     type Consumer = ();
//!     type Error = std::io::Error;
//!
//!     fn build_consumer(
//!         &self,
//!         properties: &ConnectionProperties,
//!         key_codec: StringDeserializer,
//!         value_codec: RegistryAvroDeserializer,
//!     ) -> Result<(), std::io::Error> {
//!         // Hand the codecs and property map to your streaming client
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> FactoryResult<()> {
//!     let properties = ConnectionProperties::new("orders", "http://registry:8081");
//!     let factory = ConsumerFactory::new(MyClientBuilder);
//!     let _consumer = factory.create(&properties)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fail-fast validation**: credential and filesystem gates run before
//!   any network resource is created
//! - **Trusted secret sourcing**: named connections resolved through an
//!   injected capability, never plain configuration
//! - **Single error surface**: every failure maps to one structured
//!   [`FactoryError`] with the original cause preserved
//! - **Observability**: structured logging and labeled metrics on every gate

mod config;
mod deserializer;
mod error;
mod factory;
mod fs_check;
mod guard;
mod metrics;
mod secrets;

// Re-export public API
pub use config::{keys, ConnectionProperties};
pub use deserializer::{
    build_value_deserializer, DeserializeError, RegistryAvroDeserializer, RegistryFrame,
    SchemaRegistryConfig, StringDeserializer,
};
pub use error::{FactoryError, FactoryResult};
pub use factory::{ClientBuilder, ConsumerFactory};
pub use metrics::FactoryMetrics;
pub use secrets::{NamedConnectionRef, ResolvedSecrets, SecretResolver};

/// Initialize tracing/logging for hosts that have not installed a subscriber
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok(); // Ignore if already initialized
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
