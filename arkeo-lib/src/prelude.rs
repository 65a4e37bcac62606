//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use arkeo_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Error types: `ArkeoError`, `ArkeoErrorCode`, `Result`
//! - Schema: the arkeo state types and messages, `Any`, `Coin`, `TypeUrl`
//! - Registry: `MessageRegistry`, `MessageCodec`
//! - Clients: `RestClient`, `RestConfig`, `MsgClient`, `QueryClient`, `Rpc`

// Error handling
pub use crate::errors::{ArkeoError, ArkeoErrorCode};
pub use crate::validation::{ValidateBasic, ValidationError};
pub use crate::Result;

// Schema
pub use crate::proto::arkeo::{
    Contract, ContractAuthorization, ContractType, MsgBondProvider, MsgClaimContractIncome,
    MsgCloseContract, MsgModProvider, MsgOpenContract, MsgSetVersion, Params, Provider,
    ProviderStatus,
};
pub use crate::proto::claim::{ClaimRecord, MsgAddClaim, MsgClaimArkeo, MsgClaimEth, MsgTransferClaim};
pub use crate::proto::{pack_any, unpack_any, Any, Coin, PageRequest, PageResponse, TypeUrl};

// Registry
pub use crate::registry::{MessageCodec, MessageRegistry, TypedCodec};

// Clients
pub use crate::rest::{Network, RestClient, RestConfig};
pub use crate::rpc::{ClaimMsgClient, MsgClient, QueryClient, Rpc};

pub use crate::service::Service;
