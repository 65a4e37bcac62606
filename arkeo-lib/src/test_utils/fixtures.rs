//! Test fixtures and data generators.

use crate::proto::arkeo::{
    Contract, ContractType, MsgBondProvider, MsgClaimContractIncome, MsgCloseContract,
    MsgModProvider, MsgOpenContract, MsgSetVersion, Provider, ProviderStatus,
};
use crate::proto::claim::{Chain, ClaimRecord, MsgAddClaim};
use crate::proto::Coin;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Test-network account addresses.
    pub const TESTNET_ADDRESSES: &'static [&'static str] = &[
        "tarkeo1dllfyp57l4xj5umqfcqy6c2l3xfk0qk6zpc3t7",
        "tarkeo19358z26jwh3e4rd6psxqf8q6f3pe6f8s7v0x2a",
    ];

    /// Ethereum addresses for claim records.
    pub const ETH_ADDRESSES: &'static [&'static str] = &[
        "0x92E14917A0508Eb56C90C90619f5F9Adbf49f47d",
        "0x0000000000000000000000000000000000000001",
    ];

    pub const DENOM: &'static str = "uarkeo";

    pub const CHAIN_ID: &'static str = "arkeo-localnet";

    /// Service name used by the message fixtures.
    pub const SERVICE: &'static str = "btc-mainnet-fullnode";

    pub fn coin(amount: u64) -> Coin {
        Coin::new(Self::DENOM, amount.to_string())
    }

    pub fn provider() -> Provider {
        Provider {
            pub_key: test_pubkey(1),
            service: 10,
            metadata_uri: "https://provider.example/metadata.json".to_string(),
            metadata_nonce: 1,
            status: ProviderStatus::Online as i32,
            min_contract_duration: 10,
            max_contract_duration: 1_000,
            subscription_rate: vec![Self::coin(10)],
            pay_as_you_go_rate: vec![Self::coin(1)],
            bond: "100000000".to_string(),
            last_update: 5,
            settlement_duration: 10,
        }
    }

    pub fn contract(id: u64) -> Contract {
        Contract {
            provider: test_pubkey(1),
            service: 10,
            client: test_pubkey(2),
            r#type: ContractType::PayAsYouGo as i32,
            height: 100,
            duration: 100,
            rate: Some(Self::coin(1)),
            deposit: "1000".to_string(),
            settlement_duration: 10,
            id,
            queries_per_minute: 10,
            ..Default::default()
        }
    }

    pub fn claim_record() -> ClaimRecord {
        ClaimRecord {
            chain: Chain::Ethereum as i32,
            address: Self::ETH_ADDRESSES[0].to_string(),
            amount_claim: Some(Self::coin(500)),
            amount_vote: Some(Self::coin(250)),
            amount_delegate: Some(Self::coin(250)),
            is_transferable: true,
        }
    }

    pub fn bond_provider() -> MsgBondProvider {
        MsgBondProvider {
            creator: test_pubkey(1),
            provider: test_pubkey(1),
            service: Self::SERVICE.to_string(),
            bond: "100000000".to_string(),
        }
    }

    pub fn mod_provider() -> MsgModProvider {
        MsgModProvider {
            creator: test_pubkey(1),
            provider: test_pubkey(1),
            service: Self::SERVICE.to_string(),
            metadata_uri: "https://provider.example/metadata.json".to_string(),
            metadata_nonce: 2,
            status: ProviderStatus::Online as i32,
            min_contract_duration: 10,
            max_contract_duration: 1_000,
            subscription_rate: vec![Self::coin(10)],
            pay_as_you_go_rate: vec![Self::coin(1)],
            settlement_duration: 10,
        }
    }

    pub fn open_contract() -> MsgOpenContract {
        MsgOpenContract {
            creator: test_pubkey(2),
            provider: test_pubkey(1),
            service: Self::SERVICE.to_string(),
            client: test_pubkey(2),
            contract_type: ContractType::PayAsYouGo as i32,
            duration: 100,
            rate: Some(Self::coin(1)),
            deposit: "1000".to_string(),
            settlement_duration: 10,
            queries_per_minute: 10,
            ..Default::default()
        }
    }

    pub fn close_contract(contract_id: u64) -> MsgCloseContract {
        MsgCloseContract {
            creator: test_pubkey(2),
            contract_id,
        }
    }

    pub fn claim_contract_income(contract_id: u64, nonce: i64) -> MsgClaimContractIncome {
        MsgClaimContractIncome {
            creator: test_pubkey(1),
            contract_id,
            signature: vec![7; 64],
            nonce,
            chain_id: Self::CHAIN_ID.to_string(),
            signature_expires_at_block: 1_000,
        }
    }

    pub fn set_version(version: i32) -> MsgSetVersion {
        MsgSetVersion {
            creator: Self::TESTNET_ADDRESSES[0].to_string(),
            version,
        }
    }

    pub fn add_claim() -> MsgAddClaim {
        MsgAddClaim {
            creator: test_pubkey(3),
            chain: Chain::Ethereum as i32,
            address: Self::ETH_ADDRESSES[0].to_string(),
            amount: 500,
        }
    }
}

/// Deterministic 33-byte compressed public key.
///
/// Keys for different seeds differ in every byte after the prefix.
pub fn test_pubkey(seed: u8) -> Vec<u8> {
    let mut key = Vec::with_capacity(33);
    key.push(if seed % 2 == 0 { 0x02 } else { 0x03 });
    key.extend((0..32u8).map(|i| seed.wrapping_mul(31).wrapping_add(i)));
    key
}
