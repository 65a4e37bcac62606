//! Cosmos SDK base types shared by the arkeo packages.

use serde::{Deserialize, Serialize};

use super::json;

/// Coin defines a token with a denomination and an amount.
///
/// The amount is a decimal integer string; cosmos `Int` may exceed 64 bits.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// PageRequest is included in list queries to select a page of results.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Opaque continuation key from a previous `PageResponse.next_key`.
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub key: ::prost::alloc::vec::Vec<u8>,
    /// Numeric offset, only used when `key` is empty.
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "json::u64_string")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

impl PageRequest {
    /// A request for the page following `key`.
    pub fn after(key: Vec<u8>, limit: u64) -> Self {
        Self {
            key,
            limit,
            ..Default::default()
        }
    }
}

/// PageResponse accompanies a page of results.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResponse {
    /// Key for the next page; empty when there are no more results.
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub next_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub total: u64,
}

impl PageResponse {
    pub fn has_next(&self) -> bool {
        !self.next_key.is_empty()
    }
}

/// `google.protobuf.Any`: a serialized message tagged with its type URL.
///
/// The JSON form is a local envelope, `{"@type": url, "value": base64}`, with
/// the payload kept opaque. It is not the gateway's canonical Any JSON, which
/// inlines the decoded message fields next to `@type`. Gateway payloads that
/// carry an Any (such as [`RpcStatus::details`]) are kept as raw JSON instead.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Any {
    #[prost(string, tag = "1")]
    #[serde(rename = "@type")]
    pub type_url: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}

/// Error body returned by the REST gateway for failed queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcStatus {
    pub code: i32,
    pub message: String,
    pub details: Vec<serde_json::Value>,
}
