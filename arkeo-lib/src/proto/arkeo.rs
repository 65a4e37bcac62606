//! `arkeo.arkeo` package: module state, Msg service, events and queries.

use serde::{Deserialize, Serialize};

use super::cosmos::{Coin, PageRequest, PageResponse};
use super::json::{self, ProtoEnum};
use super::TypeUrl;

// ============================================================================
// Enums
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProviderStatus {
    /// Provider is not accepting new contracts.
    Offline = 0,
    /// Provider is available for new contracts.
    Online = 1,
}

impl ProtoEnum for ProviderStatus {
    fn as_str_name(&self) -> &'static str {
        match self {
            ProviderStatus::Offline => "OFFLINE",
            ProviderStatus::Online => "ONLINE",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "OFFLINE" => Some(Self::Offline),
            "ONLINE" => Some(Self::Online),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ContractType {
    Subscription = 0,
    PayAsYouGo = 1,
}

impl ProtoEnum for ContractType {
    fn as_str_name(&self) -> &'static str {
        match self {
            ContractType::Subscription => "SUBSCRIPTION",
            ContractType::PayAsYouGo => "PAY_AS_YOU_GO",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "SUBSCRIPTION" => Some(Self::Subscription),
            "PAY_AS_YOU_GO" => Some(Self::PayAsYouGo),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ContractAuthorization {
    /// Only the client (or delegate) may use the contract.
    Strict = 0,
    /// Anyone may use the contract.
    Open = 1,
}

impl ProtoEnum for ContractAuthorization {
    fn as_str_name(&self) -> &'static str {
        match self {
            ContractAuthorization::Strict => "STRICT",
            ContractAuthorization::Open => "OPEN",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "STRICT" => Some(Self::Strict),
            "OPEN" => Some(Self::Open),
            _ => None,
        }
    }
}

json::enum_json!(provider_status, super::ProviderStatus);
json::enum_json!(contract_type, super::ContractType);
json::enum_json!(contract_authorization, super::ContractAuthorization);

// ============================================================================
// State
// ============================================================================

/// Module parameters. Percentages are cosmos `Dec` strings.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    #[prost(string, tag = "1")]
    pub community_pool_percentage: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub dev_fund_percentage: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub grant_fund_percentage: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub inflation_change_percentage: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub inflation_min: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub inflation_max: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub goal_bonded: ::prost::alloc::string::String,
    #[prost(int64, tag = "8")]
    #[serde(with = "json::i64_string")]
    pub block_per_year: i64,
    #[prost(int64, tag = "9")]
    #[serde(with = "json::i64_string")]
    pub emission_curve: i64,
}

impl Params {
    /// The chain's default parameter set.
    pub fn chain_defaults() -> Self {
        Self {
            community_pool_percentage: "0.100000000000000000".into(),
            dev_fund_percentage: "0.200000000000000000".into(),
            grant_fund_percentage: "0.000000000000000000".into(),
            inflation_change_percentage: "0.030000000000000000".into(),
            inflation_min: "0.020000000000000000".into(),
            inflation_max: "0.050000000000000000".into(),
            goal_bonded: "0.670000000000000000".into(),
            block_per_year: 6_311_520,
            emission_curve: 6,
        }
    }
}

/// A registered service operator, keyed by public key and service id.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub pub_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "2")]
    pub service: i32,
    #[prost(string, tag = "3")]
    pub metadata_uri: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "json::u64_string")]
    pub metadata_nonce: u64,
    #[prost(enumeration = "ProviderStatus", tag = "5")]
    #[serde(with = "provider_status")]
    pub status: i32,
    #[prost(int64, tag = "6")]
    #[serde(with = "json::i64_string")]
    pub min_contract_duration: i64,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub max_contract_duration: i64,
    #[prost(message, repeated, tag = "8")]
    pub subscription_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(message, repeated, tag = "9")]
    pub pay_as_you_go_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(string, tag = "10")]
    pub bond: ::prost::alloc::string::String,
    #[prost(int64, tag = "11")]
    #[serde(with = "json::i64_string")]
    pub last_update: i64,
    #[prost(int64, tag = "12")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
}

/// An agreement for paid access to one provider service.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "2")]
    pub service: i32,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(with = "json::base64_bytes")]
    pub client: ::prost::alloc::vec::Vec<u8>,
    /// Optional spender acting on behalf of `client`.
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub delegate: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "ContractType", tag = "5")]
    #[serde(with = "contract_type")]
    pub r#type: i32,
    /// Block height the contract was opened at.
    #[prost(int64, tag = "6")]
    #[serde(with = "json::i64_string")]
    pub height: i64,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub duration: i64,
    #[prost(message, optional, tag = "8")]
    pub rate: ::core::option::Option<Coin>,
    #[prost(string, tag = "9")]
    pub deposit: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub paid: ::prost::alloc::string::String,
    #[prost(int64, tag = "11")]
    #[serde(with = "json::i64_string")]
    pub nonce: i64,
    #[prost(int64, tag = "12")]
    #[serde(with = "json::i64_string")]
    pub settlement_height: i64,
    #[prost(uint64, tag = "13")]
    #[serde(with = "json::u64_string")]
    pub id: u64,
    #[prost(int64, tag = "14")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
    #[prost(enumeration = "ContractAuthorization", tag = "15")]
    #[serde(with = "contract_authorization")]
    pub authorization: i32,
    #[prost(int64, tag = "16")]
    #[serde(with = "json::i64_string")]
    pub queries_per_minute: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSet {
    #[prost(uint64, repeated, tag = "1")]
    #[serde(with = "json::u64_string_vec")]
    pub contract_ids: ::prost::alloc::vec::Vec<u64>,
}

/// Contracts expiring at a given height.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractExpirationSet {
    #[prost(int64, tag = "1")]
    #[serde(with = "json::i64_string")]
    pub height: i64,
    #[prost(message, optional, tag = "2")]
    pub contract_set: ::core::option::Option<ContractSet>,
}

/// Contracts held by a given user.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContractSet {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub user: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub contract_set: ::core::option::Option<ContractSet>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisState {
    #[prost(message, optional, tag = "1")]
    pub params: ::core::option::Option<Params>,
    #[prost(message, repeated, tag = "2")]
    pub providers: ::prost::alloc::vec::Vec<Provider>,
    #[prost(message, repeated, tag = "3")]
    pub contracts: ::prost::alloc::vec::Vec<Contract>,
    #[prost(uint64, tag = "4")]
    #[serde(with = "json::u64_string")]
    pub next_contract_id: u64,
    #[prost(message, repeated, tag = "5")]
    pub contract_expiration_sets: ::prost::alloc::vec::Vec<ContractExpirationSet>,
    #[prost(message, repeated, tag = "6")]
    pub user_contract_sets: ::prost::alloc::vec::Vec<UserContractSet>,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub version: i64,
}

// ============================================================================
// Msg service
// ============================================================================

/// Bond (or unbond, with a negative amount) a provider for one service.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgBondProvider {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub bond: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgBondProviderResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgModProvider {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub metadata_uri: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    #[serde(with = "json::u64_string")]
    pub metadata_nonce: u64,
    #[prost(enumeration = "ProviderStatus", tag = "6")]
    #[serde(with = "provider_status")]
    pub status: i32,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub min_contract_duration: i64,
    #[prost(int64, tag = "8")]
    #[serde(with = "json::i64_string")]
    pub max_contract_duration: i64,
    #[prost(message, repeated, tag = "9")]
    pub subscription_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(message, repeated, tag = "10")]
    pub pay_as_you_go_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(int64, tag = "11")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgModProviderResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgOpenContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub client: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "json::base64_bytes")]
    pub delegate: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "ContractType", tag = "6")]
    #[serde(with = "contract_type")]
    pub contract_type: i32,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub duration: i64,
    #[prost(message, optional, tag = "8")]
    pub rate: ::core::option::Option<Coin>,
    #[prost(string, tag = "9")]
    pub deposit: ::prost::alloc::string::String,
    #[prost(int64, tag = "10")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
    #[prost(enumeration = "ContractAuthorization", tag = "11")]
    #[serde(with = "contract_authorization")]
    pub authorization: i32,
    #[prost(int64, tag = "12")]
    #[serde(with = "json::i64_string")]
    pub queries_per_minute: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgOpenContractResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgCloseContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgCloseContractResponse {}

/// Provider claim for income accrued on a contract, signed by the spender.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgClaimContractIncome {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "5")]
    #[serde(with = "json::i64_string")]
    pub nonce: i64,
    #[prost(string, tag = "6")]
    pub chain_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub signature_expires_at_block: i64,
}

impl MsgClaimContractIncome {
    /// The exact bytes the spender signs for this claim.
    pub fn bytes_to_sign(&self) -> Vec<u8> {
        format!(
            "{}:{}:{}:{}",
            self.contract_id, self.nonce, self.chain_id, self.signature_expires_at_block
        )
        .into_bytes()
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgClaimContractIncomeResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSetVersion {
    #[prost(string, tag = "1")]
    pub creator: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub version: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgSetVersionResponse {}

// ============================================================================
// Events
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBondProvider {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "2")]
    pub service: ::prost::alloc::string::String,
    /// Bond change applied by this message.
    #[prost(string, tag = "3")]
    pub bond_rel: ::prost::alloc::string::String,
    /// Bond after the change.
    #[prost(string, tag = "4")]
    pub bond_abs: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventModProvider {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub metadata_uri: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    #[serde(with = "json::u64_string")]
    pub metadata_nonce: u64,
    #[prost(enumeration = "ProviderStatus", tag = "6")]
    #[serde(with = "provider_status")]
    pub status: i32,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub min_contract_duration: i64,
    #[prost(int64, tag = "8")]
    #[serde(with = "json::i64_string")]
    pub max_contract_duration: i64,
    #[prost(message, repeated, tag = "9")]
    pub subscription_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(message, repeated, tag = "10")]
    pub pay_as_you_go_rate: ::prost::alloc::vec::Vec<Coin>,
    #[prost(string, tag = "11")]
    pub bond: ::prost::alloc::string::String,
    #[prost(int64, tag = "12")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOpenContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub client: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "json::base64_bytes")]
    pub delegate: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "ContractType", tag = "6")]
    #[serde(with = "contract_type")]
    pub r#type: i32,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub height: i64,
    #[prost(int64, tag = "8")]
    #[serde(with = "json::i64_string")]
    pub duration: i64,
    #[prost(message, optional, tag = "9")]
    pub rate: ::core::option::Option<Coin>,
    #[prost(int64, tag = "10")]
    #[serde(with = "json::i64_string")]
    pub open_cost: i64,
    #[prost(string, tag = "11")]
    pub deposit: ::prost::alloc::string::String,
    #[prost(int64, tag = "12")]
    #[serde(with = "json::i64_string")]
    pub settlement_duration: i64,
    #[prost(enumeration = "ContractAuthorization", tag = "13")]
    #[serde(with = "contract_authorization")]
    pub authorization: i32,
    #[prost(int64, tag = "14")]
    #[serde(with = "json::i64_string")]
    pub queries_per_minute: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettleContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub client: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "json::base64_bytes")]
    pub delegate: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "ContractType", tag = "6")]
    #[serde(with = "contract_type")]
    pub r#type: i32,
    #[prost(int64, tag = "7")]
    #[serde(with = "json::i64_string")]
    pub nonce: i64,
    #[prost(int64, tag = "8")]
    #[serde(with = "json::i64_string")]
    pub height: i64,
    #[prost(string, tag = "9")]
    pub paid: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub reserve: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCloseContract {
    #[prost(uint64, tag = "1")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub provider: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "json::base64_bytes")]
    pub client: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "json::base64_bytes")]
    pub delegate: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct EventValidatorPayout {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub validator: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "2")]
    pub reward: ::prost::alloc::string::String,
}

// ============================================================================
// Query service
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: ::core::option::Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFetchProviderRequest {
    #[prost(string, tag = "1")]
    pub pubkey: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub service: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFetchProviderResponse {
    #[prost(message, optional, tag = "1")]
    pub provider: ::core::option::Option<Provider>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllProviderRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: ::core::option::Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllProviderResponse {
    #[prost(message, repeated, tag = "1")]
    pub provider: ::prost::alloc::vec::Vec<Provider>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFetchContractRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "json::u64_string")]
    pub contract_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFetchContractResponse {
    #[prost(message, optional, tag = "1")]
    pub contract: ::core::option::Option<Contract>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllContractRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: ::core::option::Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllContractResponse {
    #[prost(message, repeated, tag = "1")]
    pub contract: ::prost::alloc::vec::Vec<Contract>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActiveContractRequest {
    #[prost(string, tag = "1")]
    pub spender: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub provider: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub service: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActiveContractResponse {
    #[prost(message, optional, tag = "1")]
    pub contract: ::core::option::Option<Contract>,
}

// ============================================================================
// Type URLs
// ============================================================================

macro_rules! arkeo_type_url {
    ($($ty:ident),* $(,)?) => {
        $(
            impl TypeUrl for $ty {
                const PACKAGE: &'static str = "arkeo.arkeo";
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

arkeo_type_url!(
    MsgBondProvider,
    MsgBondProviderResponse,
    MsgModProvider,
    MsgModProviderResponse,
    MsgOpenContract,
    MsgOpenContractResponse,
    MsgCloseContract,
    MsgCloseContractResponse,
    MsgClaimContractIncome,
    MsgClaimContractIncomeResponse,
    MsgSetVersion,
    MsgSetVersionResponse,
    Provider,
    Contract,
    Params,
    GenesisState,
    EventBondProvider,
    EventModProvider,
    EventOpenContract,
    EventSettleContract,
    EventCloseContract,
    EventValidatorPayout,
);
