//! Protobuf schema for the Arkeo chain.
//!
//! Every message derives [`prost::Message`] for the binary wire format and
//! serde for the REST gateway's JSON form. Encoding is left entirely to prost:
//! default-valued fields are omitted, unknown fields are skipped on decode.
//!
//! Only the current `arkeo.arkeo` generation (byte-array addresses,
//! `Coin`-typed rates) and the `arkeo.claim` package are modelled.

pub mod arkeo;
pub mod claim;
pub mod cosmos;
pub mod json;

pub use cosmos::{Any, Coin, PageRequest, PageResponse, RpcStatus};

use crate::{ArkeoError, Result};

/// Fully qualified protobuf name of a message.
pub trait TypeUrl {
    /// Protobuf package, e.g. `arkeo.arkeo`.
    const PACKAGE: &'static str;
    /// Message name within the package.
    const NAME: &'static str;

    /// `"/{package}.{name}"`, the form used in `Any.type_url`.
    fn type_url() -> String {
        format!("/{}.{}", Self::PACKAGE, Self::NAME)
    }
}

/// Wraps `msg` in an [`Any`] tagged with its type URL.
pub fn pack_any<M>(msg: &M) -> Any
where
    M: prost::Message + TypeUrl,
{
    Any {
        type_url: M::type_url(),
        value: msg.encode_to_vec(),
    }
}

/// Unwraps an [`Any`], checking that it carries an `M`.
pub fn unpack_any<M>(any: &Any) -> Result<M>
where
    M: prost::Message + TypeUrl + Default,
{
    let expected = M::type_url();
    if any.type_url != expected {
        return Err(ArkeoError::type_mismatch(expected, any.type_url.clone()));
    }
    Ok(M::decode(any.value.as_slice())?)
}
