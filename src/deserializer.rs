//! Key and value codecs bound to the constructed consumer.
//!
//! The value codec is schema-registry-aware: it is configured from a
//! minimal namespace holding only the registry endpoint URL, deliberately
//! not the full consumer property set. Registry-client keys and streaming
//! client keys are not freely interchangeable, and handing the codec the
//! whole property bag risks silent misconfiguration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading byte of a registry-framed payload
const MAGIC_BYTE: u8 = 0x00;

/// Errors raised while decoding payload bytes
///
/// Decoding happens after construction; these never surface through the
/// factory's error type.
#[derive(Error, Debug)]
pub enum DeserializeError {
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid wire frame: {0}")]
    InvalidFrame(String),
}

/// Minimal, independent configuration namespace for the registry codec
///
/// Holds exactly the registry endpoint URL and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistryConfig {
    url: String,
}

impl SchemaRegistryConfig {
    /// Create a registry configuration from the endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Registry endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Plain-text key codec
///
/// Keys are UTF-8 strings on the wire; no schema lookup is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDeserializer;

impl StringDeserializer {
    /// Decode key bytes into an owned string
    pub fn deserialize(&self, payload: &[u8]) -> Result<String, DeserializeError> {
        Ok(std::str::from_utf8(payload)?.to_string())
    }
}

/// A registry-framed value payload split into its parts
///
/// The schema itself is fetched lazily by the registry client on first
/// decode; this type only carries what the wire frame provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryFrame<'a> {
    /// Schema identifier registered for this record's subject
    pub schema_id: i32,
    /// Serialized record datum, with the frame header stripped
    pub datum: &'a [u8],
}

/// Schema-registry-bound value codec
///
/// Construction performs no network call: the registry is consulted lazily
/// on first decode, so building the codec cannot itself fail with a network
/// error.
#[derive(Debug, Clone)]
pub struct RegistryAvroDeserializer {
    config: SchemaRegistryConfig,
    is_key: bool,
}

impl RegistryAvroDeserializer {
    /// Registry configuration this codec was built with
    pub fn registry_config(&self) -> &SchemaRegistryConfig {
        &self.config
    }

    /// Whether the codec decodes keys (always false: values only)
    pub fn is_key(&self) -> bool {
        self.is_key
    }

    /// Split a registry-framed payload into schema id and datum
    ///
    /// Wire format: magic byte `0x00`, big-endian i32 schema id, datum.
    pub fn split_frame<'a>(&self, payload: &'a [u8]) -> Result<RegistryFrame<'a>, DeserializeError> {
        if payload.len() < 5 {
            return Err(DeserializeError::InvalidFrame(format!(
                "payload too short for registry frame: {} bytes",
                payload.len()
            )));
        }

        if payload[0] != MAGIC_BYTE {
            return Err(DeserializeError::InvalidFrame(format!(
                "unknown magic byte 0x{:02x}",
                payload[0]
            )));
        }

        let schema_id = i32::from_be_bytes([payload[1], payload[2], payload[3], payload[4]]);

        Ok(RegistryFrame {
            schema_id,
            datum: &payload[5..],
        })
    }
}

/// Build the value codec from the registry endpoint URL alone
pub fn build_value_deserializer(schema_registry_url: &str) -> RegistryAvroDeserializer {
    RegistryAvroDeserializer {
        config: SchemaRegistryConfig::new(schema_registry_url),
        is_key: false,
    }
}
