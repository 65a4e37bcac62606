//! Message type registry.
//!
//! Maps fully qualified type URLs (`/arkeo.arkeo.MsgBondProvider`) to codecs
//! that move a message between its protobuf bytes and its JSON form. This is
//! what lets a wallet or explorer handle an `Any` whose concrete type is only
//! known at runtime.
//!
//! # Thread Safety
//!
//! The registry uses `RwLock` for thread-safe access and recovers the guard if
//! the lock was poisoned, so lookups never panic.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::proto::{arkeo, claim, Any, TypeUrl};
use crate::validation::{ValidateBasic, ValidationError};
use crate::{ArkeoError, Result};

/// Runtime handle on one message type.
pub trait MessageCodec: Send + Sync {
    /// Fully qualified type URL, with the leading slash.
    fn type_url(&self) -> String;

    /// Decodes protobuf bytes into the message's JSON form.
    fn decode_json(&self, bytes: &[u8]) -> Result<Value>;

    /// Encodes a JSON value as protobuf bytes.
    fn encode_json(&self, value: &Value) -> Result<Vec<u8>>;

    /// Runs stateless validation over encoded bytes.
    fn validate(&self, bytes: &[u8]) -> Result<()>;
}

/// [`MessageCodec`] for a concrete prost message.
pub struct TypedCodec<M> {
    validator: Option<fn(&M) -> std::result::Result<(), ValidationError>>,
    _marker: PhantomData<fn() -> M>,
}

impl<M> TypedCodec<M>
where
    M: Message + TypeUrl + Default + Serialize + DeserializeOwned + 'static,
{
    /// Codec without stateless validation.
    pub fn new() -> Self {
        Self {
            validator: None,
            _marker: PhantomData,
        }
    }

    /// Codec that runs [`ValidateBasic`] on `validate`.
    pub fn validated() -> Self
    where
        M: ValidateBasic,
    {
        Self {
            validator: Some(M::validate_basic),
            _marker: PhantomData,
        }
    }
}

impl<M> Default for TypedCodec<M>
where
    M: Message + TypeUrl + Default + Serialize + DeserializeOwned + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MessageCodec for TypedCodec<M>
where
    M: Message + TypeUrl + Default + Serialize + DeserializeOwned + 'static,
{
    fn type_url(&self) -> String {
        M::type_url()
    }

    fn decode_json(&self, bytes: &[u8]) -> Result<Value> {
        let msg = M::decode(bytes)?;
        Ok(serde_json::to_value(&msg)?)
    }

    fn encode_json(&self, value: &Value) -> Result<Vec<u8>> {
        let msg: M = serde_json::from_value(value.clone())?;
        Ok(msg.encode_to_vec())
    }

    fn validate(&self, bytes: &[u8]) -> Result<()> {
        let msg = M::decode(bytes)?;
        if let Some(check) = self.validator {
            check(&msg)?;
        }
        Ok(())
    }
}

/// Registry of message codecs keyed by type URL.
///
/// # Example
///
/// ```
/// use arkeo_lib::registry::MessageRegistry;
///
/// let registry = MessageRegistry::with_defaults();
/// assert!(registry.has_type("/arkeo.arkeo.MsgOpenContract"));
/// assert!(registry.has_type("/arkeo.claim.MsgClaimEth"));
/// ```
pub struct MessageRegistry {
    codecs: RwLock<HashMap<String, Arc<dyn MessageCodec>>>,
}

impl MessageRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            codecs: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding every Msg type the chain accepts.
    pub fn with_defaults() -> Self {
        let registry = Self::new();

        registry.register(Box::new(TypedCodec::<arkeo::MsgBondProvider>::validated()));
        registry.register(Box::new(TypedCodec::<arkeo::MsgModProvider>::validated()));
        registry.register(Box::new(TypedCodec::<arkeo::MsgOpenContract>::validated()));
        registry.register(Box::new(TypedCodec::<arkeo::MsgCloseContract>::validated()));
        registry.register(Box::new(
            TypedCodec::<arkeo::MsgClaimContractIncome>::validated(),
        ));
        registry.register(Box::new(TypedCodec::<arkeo::MsgSetVersion>::validated()));

        registry.register(Box::new(TypedCodec::<claim::MsgAddClaim>::validated()));
        registry.register(Box::new(TypedCodec::<claim::MsgClaimArkeo>::validated()));
        registry.register(Box::new(TypedCodec::<claim::MsgClaimEth>::validated()));
        registry.register(Box::new(TypedCodec::<claim::MsgTransferClaim>::validated()));

        registry
    }

    /// Registers a codec.
    ///
    /// If a codec with the same type URL already exists, it will be replaced.
    pub fn register(&self, codec: Box<dyn MessageCodec>) {
        let type_url = codec.type_url();
        let mut codecs = self.codecs.write().unwrap_or_else(|e| e.into_inner());
        codecs.insert(type_url, Arc::from(codec));
    }

    /// Registers `M` without validation.
    pub fn register_type<M>(&self)
    where
        M: Message + TypeUrl + Default + Serialize + DeserializeOwned + 'static,
    {
        self.register(Box::new(TypedCodec::<M>::new()));
    }

    /// Unregisters a codec, returning it if it existed.
    pub fn unregister(&self, type_url: &str) -> Option<Arc<dyn MessageCodec>> {
        let mut codecs = self.codecs.write().unwrap_or_else(|e| e.into_inner());
        codecs.remove(type_url)
    }

    pub fn get(&self, type_url: &str) -> Option<Arc<dyn MessageCodec>> {
        let codecs = self.codecs.read().unwrap_or_else(|e| e.into_inner());
        codecs.get(type_url).cloned()
    }

    /// Gets a codec, returning an error if none is registered.
    pub fn get_required(&self, type_url: &str) -> Result<Arc<dyn MessageCodec>> {
        self.get(type_url)
            .ok_or_else(|| ArkeoError::UnknownType(type_url.to_string()))
    }

    /// All registered type URLs, sorted.
    pub fn list_type_urls(&self) -> Vec<String> {
        let codecs = self.codecs.read().unwrap_or_else(|e| e.into_inner());
        let mut urls: Vec<String> = codecs.keys().cloned().collect();
        urls.sort();
        urls
    }

    pub fn len(&self) -> usize {
        let codecs = self.codecs.read().unwrap_or_else(|e| e.into_inner());
        codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_type(&self, type_url: &str) -> bool {
        let codecs = self.codecs.read().unwrap_or_else(|e| e.into_inner());
        codecs.contains_key(type_url)
    }

    /// Type URLs within one protobuf package, e.g. `arkeo.claim`.
    pub fn list_package(&self, package: &str) -> Vec<String> {
        let prefix = format!("/{}.", package);
        self.list_type_urls()
            .into_iter()
            .filter(|url| url.starts_with(&prefix))
            .collect()
    }

    /// Decodes an `Any` into the JSON form of its message.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, any), fields(type_url = %any.type_url)))]
    pub fn decode_any(&self, any: &Any) -> Result<Value> {
        self.get_required(&any.type_url)?.decode_json(&any.value)
    }

    /// Encodes a JSON message into an `Any` of the given type.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, value)))]
    pub fn encode_any(&self, type_url: &str, value: &Value) -> Result<Any> {
        let codec = self.get_required(type_url)?;
        Ok(Any {
            type_url: type_url.to_string(),
            value: codec.encode_json(value)?,
        })
    }

    /// Decodes and validates the message in an `Any`.
    pub fn validate_any(&self, any: &Any) -> Result<()> {
        self.get_required(&any.type_url)?.validate(&any.value)
    }
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MessageRegistry {
    fn clone(&self) -> Self {
        let codecs = self.codecs.read().unwrap_or_else(|e| e.into_inner());
        Self {
            codecs: RwLock::new(codecs.clone()),
        }
    }
}

/// Global registry instance for convenience.
///
/// Use this when you need a shared registry across your application.
/// For more control, create your own `MessageRegistry` instance.
pub mod global {
    use super::*;
    use std::sync::OnceLock;

    static GLOBAL_REGISTRY: OnceLock<MessageRegistry> = OnceLock::new();

    /// Gets the global registry, initializing it with the defaults if necessary.
    pub fn registry() -> &'static MessageRegistry {
        GLOBAL_REGISTRY.get_or_init(MessageRegistry::with_defaults)
    }

    pub fn register(codec: Box<dyn MessageCodec>) {
        registry().register(codec);
    }

    pub fn get(type_url: &str) -> Option<Arc<dyn MessageCodec>> {
        registry().get(type_url)
    }

    pub fn list_type_urls() -> Vec<String> {
        registry().list_type_urls()
    }

    pub fn decode_any(any: &Any) -> Result<Value> {
        registry().decode_any(any)
    }
}
