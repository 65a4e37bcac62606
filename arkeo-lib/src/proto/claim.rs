//! `arkeo.claim` package: airdrop claim records and their Msg service.

use serde::{Deserialize, Serialize};

use super::cosmos::Coin;
use super::json::{self, ProtoEnum};
use super::TypeUrl;

/// Chain the claim originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Chain {
    Arkeo = 0,
    Ethereum = 1,
    Thorchain = 2,
}

impl ProtoEnum for Chain {
    fn as_str_name(&self) -> &'static str {
        match self {
            Chain::Arkeo => "ARKEO",
            Chain::Ethereum => "ETHEREUM",
            Chain::Thorchain => "THORCHAIN",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "ARKEO" => Some(Self::Arkeo),
            "ETHEREUM" => Some(Self::Ethereum),
            "THORCHAIN" => Some(Self::Thorchain),
            _ => None,
        }
    }
}

/// Actions that unlock a portion of a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Action {
    Claim = 0,
    Vote = 1,
    Delegate = 2,
}

impl ProtoEnum for Action {
    fn as_str_name(&self) -> &'static str {
        match self {
            Action::Claim => "ACTION_CLAIM",
            Action::Vote => "ACTION_VOTE",
            Action::Delegate => "ACTION_DELEGATE",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "ACTION_CLAIM" => Some(Self::Claim),
            "ACTION_VOTE" => Some(Self::Vote),
            "ACTION_DELEGATE" => Some(Self::Delegate),
            _ => None,
        }
    }
}

json::enum_json!(chain, super::Chain);

/// Entitlement of an address to claim tokens.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimRecord {
    #[prost(enumeration = "Chain", tag = "1")]
    #[serde(with = "chain")]
    pub chain: i32,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
    /// Claimable with `ACTION_CLAIM`.
    #[prost(message, optional, tag = "3")]
    pub amount_claim: ::core::option::Option<Coin>,
    /// Claimable with `ACTION_VOTE`.
    #[prost(message, optional, tag = "4")]
    pub amount_vote: ::core::option::Option<Coin>,
    /// Claimable with `ACTION_DELEGATE`.
    #[prost(message, optional, tag = "5")]
    pub amount_delegate: ::core::option::Option<Coin>,
    #[prost(bool, tag = "6")]
    pub is_transferable: bool,
}

impl ClaimRecord {
    /// True when the record carries nothing claimable.
    ///
    /// A record is empty if it has no address, or if none of its three
    /// amounts is a present, well formed, non-zero coin.
    pub fn is_empty(&self) -> bool {
        if self.address.is_empty() {
            return true;
        }
        ![&self.amount_claim, &self.amount_vote, &self.amount_delegate]
            .into_iter()
            .any(|amount| amount.as_ref().is_some_and(crate::validation::is_positive_coin))
    }

    /// The amount unlocked by `action`, if any.
    pub fn amount_for(&self, action: Action) -> Option<&Coin> {
        match action {
            Action::Claim => self.amount_claim.as_ref(),
            Action::Vote => self.amount_vote.as_ref(),
            Action::Delegate => self.amount_delegate.as_ref(),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgClaimEth {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    /// Ethereum address the claim is for.
    #[prost(string, tag = "2")]
    pub eth_address: ::prost::alloc::string::String,
    /// EIP-712 signature by `eth_address`.
    #[prost(string, tag = "3")]
    pub signature: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgClaimEthResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgClaimArkeo {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgClaimArkeoResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgTransferClaim {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "json::base64_bytes")]
    pub to_address: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgTransferClaimResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAddClaim {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "json::base64_bytes")]
    pub creator: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "Chain", tag = "2")]
    #[serde(with = "chain")]
    pub chain: i32,
    #[prost(string, tag = "3")]
    pub address: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    #[serde(with = "json::i64_string")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgAddClaimResponse {}

macro_rules! claim_type_url {
    ($($ty:ident),* $(,)?) => {
        $(
            impl TypeUrl for $ty {
                const PACKAGE: &'static str = "arkeo.claim";
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

claim_type_url!(
    ClaimRecord,
    MsgClaimEth,
    MsgClaimEthResponse,
    MsgClaimArkeo,
    MsgClaimArkeoResponse,
    MsgTransferClaim,
    MsgTransferClaimResponse,
    MsgAddClaim,
    MsgAddClaimResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: &str) -> ClaimRecord {
        ClaimRecord {
            chain: Chain::Ethereum as i32,
            address: "0x92e14917a0508eb56c90c90619f5f9adbf49f47d".into(),
            amount_claim: Some(Coin::new("uarkeo", amount)),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_record_is_empty() {
        assert!(ClaimRecord::default().is_empty());
    }

    #[test]
    fn test_record_without_address_is_empty() {
        let mut rec = record("100");
        rec.address.clear();
        assert!(rec.is_empty());
    }

    #[test]
    fn test_zero_or_malformed_amounts_are_empty() {
        assert!(record("0").is_empty());
        assert!(record("abc").is_empty());
        assert!(!record("100").is_empty());
    }

    #[test]
    fn test_any_nonzero_amount_counts() {
        let rec = ClaimRecord {
            address: "arkeo1abc".into(),
            amount_delegate: Some(Coin::new("uarkeo", "5")),
            ..Default::default()
        };
        assert!(!rec.is_empty());
        assert_eq!(rec.amount_for(Action::Delegate).map(|c| c.amount.as_str()), Some("5"));
        assert!(rec.amount_for(Action::Vote).is_none());
    }

    #[test]
    fn test_chain_json_name() {
        let value = serde_json::to_value(record("1")).unwrap();
        assert_eq!(value["chain"], "ETHEREUM");
        assert_eq!(value["is_transferable"], false);
    }

    #[test]
    fn test_type_url() {
        assert_eq!(MsgAddClaim::type_url(), "/arkeo.claim.MsgAddClaim");
    }
}
