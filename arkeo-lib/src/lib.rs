//! Arkeo chain client library.
//!
//! This crate stays stateless: it models the chain's protobuf schema and
//! leaves key management, signing and broadcasting to callers through the
//! [`rpc::Rpc`] trait.
//!
//! # Features
//!
//! - **Schema**: prost messages for `arkeo.arkeo` and `arkeo.claim` with the
//!   REST gateway's JSON conventions
//! - **Type Registry**: decode and encode `Any` envelopes by type URL at runtime
//! - **REST Client**: typed queries against a node's gateway, with pagination
//! - **Validation**: the chain's stateless message checks, run client side
//!
//! # Example
//!
//! ```
//! use arkeo_lib::proto::arkeo::MsgCloseContract;
//! use arkeo_lib::proto::pack_any;
//! use arkeo_lib::registry::MessageRegistry;
//!
//! let msg = MsgCloseContract {
//!     creator: vec![1; 20],
//!     contract_id: 42,
//! };
//! let any = pack_any(&msg);
//! assert_eq!(any.type_url, "/arkeo.arkeo.MsgCloseContract");
//!
//! let registry = MessageRegistry::with_defaults();
//! let json = registry.decode_any(&any).unwrap();
//! assert_eq!(json["contract_id"], "42");
//! ```

pub mod contracts;
pub mod errors;
pub mod prelude;
pub mod proto;
pub mod registry;
pub mod rest;
pub mod rpc;
pub mod service;
pub mod validation;

/// Test utilities for client testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::{ArkeoError, ArkeoErrorCode};
pub use registry::{MessageCodec, MessageRegistry};
pub use rest::{RestClient, RestConfig};
pub use service::Service;
pub use validation::{ValidateBasic, ValidationError};

/// Common result alias for Arkeo client operations.
pub type Result<T> = std::result::Result<T, ArkeoError>;
