//! Stateless message checks run before a message is signed and broadcast.
//!
//! These mirror the checks the chain applies on receipt, so an invalid
//! message is rejected locally rather than costing a failed transaction.
//! Nothing here consults chain state: whether a provider exists or a contract
//! is open is only known server side.

use std::collections::HashSet;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::Bech32;

use crate::proto::arkeo::{
    ContractAuthorization, ContractType, MsgBondProvider, MsgClaimContractIncome,
    MsgCloseContract, MsgModProvider, MsgOpenContract, MsgSetVersion, ProviderStatus,
};
use crate::proto::claim::{Chain, MsgAddClaim, MsgClaimArkeo, MsgClaimEth, MsgTransferClaim};
use crate::proto::Coin;
use crate::service::Service;

/// Longest metadata URI a provider may register.
pub const MAX_METADATA_URI_LEN: usize = 100;

/// Longest accepted claim signature, in bytes.
pub const MAX_CLAIM_SIGNATURE_LEN: usize = 100;

/// Length of a compressed secp256k1 public key.
pub const PUBKEY_LEN: usize = 33;

/// A failed stateless check.
///
/// Messages match the chain's registered errors so that a local rejection
/// reads the same as the one the chain would have returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid pubkey: {0}")]
    InvalidPubKey(String),
    #[error("invalid service: {0}")]
    InvalidService(String),
    #[error("invalid bond: {0}")]
    InvalidBond(String),
    #[error("invalid mod provider metadata uri: length is too long ({0}/100)")]
    InvalidMetadataUri(usize),
    #[error("invalid mod provider min contract duration: {0}")]
    InvalidMinContractDuration(String),
    #[error("invalid mod provider settlement duration: {0}")]
    InvalidSettlementDuration(i64),
    #[error("invalid mod provider bad provider status: {0}")]
    InvalidProviderStatus(i32),
    #[error("invalid contract duration: {0}")]
    InvalidContractDuration(i64),
    #[error("invalid contract rate: {0}")]
    InvalidRate(String),
    #[error("invalid contract type: {0}")]
    InvalidContractType(i32),
    #[error("invalid coins: {0}")]
    InvalidCoins(String),
    #[error("contract not found: {0}")]
    ContractNotFound(u64),
    #[error("nonce must be greater than zero, got {0}")]
    BadNonce(i64),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("duplicate provider found: {0}")]
    DuplicateProvider(String),
    #[error("duplicate contract ID found: {0}")]
    DuplicateContract(u64),
    #[error("next contract id ({next}) is below the highest contract id ({max})")]
    NextContractIdTooLow { next: u64, max: u64 },
    #[error("invalid version: {0}")]
    InvalidVersion(i64),
}

impl ValidationError {
    /// The chain's `(codespace, code)` for this error, where one is registered.
    pub fn chain_code(&self) -> Option<(&'static str, u32)> {
        let code = match self {
            Self::InvalidAddress(_) => ("sdk", 7),
            Self::InvalidCoins(_) => ("sdk", 10),
            Self::InvalidRequest(_) => ("sdk", 18),
            Self::InvalidBond(_) => ("arkeo", 5),
            Self::InvalidMetadataUri(_) => ("arkeo", 6),
            Self::InvalidMinContractDuration(_) => ("arkeo", 8),
            Self::InvalidProviderStatus(_) => ("arkeo", 9),
            Self::InvalidService(_) => ("arkeo", 12),
            Self::InvalidContractDuration(_) => ("arkeo", 14),
            Self::InvalidRate(_) => ("arkeo", 17),
            Self::InvalidContractType(_) => ("arkeo", 18),
            Self::InvalidPubKey(_) => ("arkeo", 19),
            Self::BadNonce(_) => ("arkeo", 23),
            Self::InvalidSignature(_) => ("arkeo", 25),
            Self::ContractNotFound(_) => ("arkeo", 27),
            Self::InvalidSettlementDuration(_) => ("arkeo", 28),
            Self::DuplicateProvider(_)
            | Self::DuplicateContract(_)
            | Self::NextContractIdTooLow { .. }
            | Self::InvalidVersion(_) => return None,
        };
        Some(code)
    }
}

/// Stateless validity check for a message.
pub trait ValidateBasic {
    fn validate_basic(&self) -> Result<(), ValidationError>;
}

// ============================================================================
// Field checks
// ============================================================================

/// Sign of a decimal integer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntSign {
    Negative,
    Zero,
    Positive,
}

/// Classifies a decimal integer of arbitrary width, `None` if malformed.
pub fn int_sign(value: &str) -> Option<IntSign> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.bytes().all(|b| b == b'0') {
        Some(IntSign::Zero)
    } else if negative {
        Some(IntSign::Negative)
    } else {
        Some(IntSign::Positive)
    }
}

/// Denominations: a letter followed by 2 to 127 of `[a-zA-Z0-9/:._-]`.
pub fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if !(3..=128).contains(&bytes.len()) || !bytes[0].is_ascii_alphabetic() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'))
}

/// A coin with a valid denom and a non-negative amount.
pub fn validate_coin(coin: &Coin) -> Result<(), ValidationError> {
    if !is_valid_denom(&coin.denom) {
        return Err(ValidationError::InvalidCoins(format!(
            "invalid denom: {}",
            coin.denom
        )));
    }
    match int_sign(&coin.amount) {
        Some(IntSign::Zero | IntSign::Positive) => Ok(()),
        _ => Err(ValidationError::InvalidCoins(format!(
            "invalid amount: {}",
            coin.amount
        ))),
    }
}

pub fn is_positive_coin(coin: &Coin) -> bool {
    validate_coin(coin).is_ok() && int_sign(&coin.amount) == Some(IntSign::Positive)
}

/// A rate list: every coin valid and positive, no denom twice.
pub fn validate_rates(kind: &str, coins: &[Coin]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for coin in coins {
        validate_coin(coin)?;
        if !seen.insert(coin.denom.as_str()) {
            return Err(ValidationError::InvalidCoins(format!(
                "duplicate denom {} in {} rate",
                coin.denom, kind
            )));
        }
        if !is_positive_coin(coin) {
            return Err(ValidationError::InvalidRate(format!(
                "all {} rates must be positive",
                kind
            )));
        }
    }
    Ok(())
}

/// A compressed secp256k1 public key.
pub fn validate_pubkey(field: &str, key: &[u8]) -> Result<(), ValidationError> {
    if key.len() != PUBKEY_LEN {
        return Err(ValidationError::InvalidPubKey(format!(
            "{} must be {} bytes, got {}",
            field,
            PUBKEY_LEN,
            key.len()
        )));
    }
    if !matches!(key[0], 0x02 | 0x03) {
        return Err(ValidationError::InvalidPubKey(format!(
            "{} is not a compressed key",
            field
        )));
    }
    Ok(())
}

fn validate_creator(creator: &[u8]) -> Result<(), ValidationError> {
    if creator.is_empty() {
        return Err(ValidationError::InvalidAddress(
            "creator cannot be empty".into(),
        ));
    }
    Ok(())
}

fn validate_service(service: &str) -> Result<Service, ValidationError> {
    service.parse()
}

/// `0x`-prefixed (or bare) 20-byte hex address.
pub fn is_valid_eth_address(address: &str) -> bool {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    hex_part.len() == 40 && hex_part.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Longest account address the chain accepts, in bytes.
const MAX_ADDRESS_LEN: usize = 255;

/// Whether `address` decodes as bech32 under `hrp` with a valid checksum.
///
/// Mixed case is rejected. The decoded payload must be between 1 and 255 bytes.
pub fn is_valid_bech32(address: &str, hrp: &str) -> bool {
    let Ok(checked) = CheckedHrpstring::new::<Bech32>(address) else {
        return false;
    };
    if checked.hrp().to_lowercase() != hrp {
        return false;
    }
    let len = checked.byte_iter().count();
    (1..=MAX_ADDRESS_LEN).contains(&len)
}

/// Whether `address` is a valid claim address for `chain`.
///
/// Arkeo addresses are accepted on both the main and test prefixes. THORChain
/// records cannot be added.
pub fn is_valid_claim_address(address: &str, chain: Chain) -> bool {
    match chain {
        Chain::Ethereum => is_valid_eth_address(address),
        Chain::Arkeo => is_valid_bech32(address, "arkeo") || is_valid_bech32(address, "tarkeo"),
        Chain::Thorchain => false,
    }
}

// ============================================================================
// arkeo.arkeo messages
// ============================================================================

impl ValidateBasic for MsgBondProvider {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)?;
        validate_pubkey("provider", &self.provider)?;
        validate_service(&self.service)?;
        match int_sign(&self.bond) {
            Some(IntSign::Positive | IntSign::Negative) => Ok(()),
            Some(IntSign::Zero) => Err(ValidationError::InvalidBond(
                "bond cannot be set to zero".into(),
            )),
            None => Err(ValidationError::InvalidBond(format!(
                "not an integer: {:?}",
                self.bond
            ))),
        }
    }
}

impl ValidateBasic for MsgModProvider {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)?;
        validate_pubkey("provider", &self.provider)?;
        validate_service(&self.service)?;
        if self.metadata_uri.len() > MAX_METADATA_URI_LEN {
            return Err(ValidationError::InvalidMetadataUri(self.metadata_uri.len()));
        }
        if ProviderStatus::try_from(self.status).is_err() {
            return Err(ValidationError::InvalidProviderStatus(self.status));
        }
        if self.min_contract_duration <= 0 {
            return Err(ValidationError::InvalidMinContractDuration(
                "min contract duration cannot be zero".into(),
            ));
        }
        if self.min_contract_duration > self.max_contract_duration {
            return Err(ValidationError::InvalidMinContractDuration(format!(
                "min contract duration is too long ({}/{})",
                self.min_contract_duration, self.max_contract_duration
            )));
        }
        if self.settlement_duration < 0 {
            return Err(ValidationError::InvalidSettlementDuration(
                self.settlement_duration,
            ));
        }
        validate_rates("subscription", &self.subscription_rate)?;
        validate_rates("pay-as-you-go", &self.pay_as_you_go_rate)?;
        Ok(())
    }
}

impl ValidateBasic for MsgOpenContract {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)?;
        validate_pubkey("provider", &self.provider)?;
        validate_service(&self.service)?;
        validate_pubkey("client", &self.client)?;
        if !self.delegate.is_empty() {
            validate_pubkey("delegate", &self.delegate)?;
        }
        if ContractType::try_from(self.contract_type).is_err() {
            return Err(ValidationError::InvalidContractType(self.contract_type));
        }
        if ContractAuthorization::try_from(self.authorization).is_err() {
            return Err(ValidationError::InvalidRequest(format!(
                "unknown authorization {}",
                self.authorization
            )));
        }
        if self.duration <= 0 {
            return Err(ValidationError::InvalidContractDuration(self.duration));
        }
        match &self.rate {
            Some(rate) if is_positive_coin(rate) => {}
            Some(rate) => {
                return Err(ValidationError::InvalidRate(format!(
                    "contract rate must be positive, got {}",
                    rate
                )))
            }
            None => {
                return Err(ValidationError::InvalidRate(
                    "contract rate cannot be empty".into(),
                ))
            }
        }
        if !matches!(int_sign(&self.deposit), Some(IntSign::Zero | IntSign::Positive)) {
            return Err(ValidationError::InvalidRequest(format!(
                "invalid deposit: {:?}",
                self.deposit
            )));
        }
        if self.settlement_duration < 0 {
            return Err(ValidationError::InvalidSettlementDuration(
                self.settlement_duration,
            ));
        }
        if self.queries_per_minute < 0 {
            return Err(ValidationError::InvalidRequest(
                "queries per minute cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

impl ValidateBasic for MsgCloseContract {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)?;
        if self.contract_id == 0 {
            return Err(ValidationError::ContractNotFound(0));
        }
        Ok(())
    }
}

impl ValidateBasic for MsgClaimContractIncome {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.signature.len() > MAX_CLAIM_SIGNATURE_LEN {
            return Err(ValidationError::InvalidSignature("too long".into()));
        }
        if self.chain_id.is_empty() {
            return Err(ValidationError::InvalidRequest(
                "chain ID cannot be empty".into(),
            ));
        }
        if self.nonce <= 0 {
            return Err(ValidationError::BadNonce(self.nonce));
        }
        if self.signature_expires_at_block <= 0 {
            return Err(ValidationError::InvalidRequest(
                "expiration block height must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl ValidateBasic for MsgSetVersion {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(self.creator.as_bytes())?;
        if self.version <= 0 {
            return Err(ValidationError::InvalidVersion(self.version.into()));
        }
        Ok(())
    }
}

// ============================================================================
// arkeo.claim messages
// ============================================================================

impl ValidateBasic for MsgAddClaim {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        let chain = Chain::try_from(self.chain)
            .map_err(|_| ValidationError::InvalidRequest(format!("invalid chain ({})", self.chain)))?;
        if !is_valid_claim_address(&self.address, chain) {
            return Err(ValidationError::InvalidAddress(self.address.clone()));
        }
        if self.amount <= 0 {
            return Err(ValidationError::InvalidRequest(
                "amount should be larger than 0".into(),
            ));
        }
        Ok(())
    }
}

// The Ethereum address and signature are checked by the chain against the
// claim record, so only the creator is checked here.
impl ValidateBasic for MsgClaimEth {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)
    }
}

impl ValidateBasic for MsgClaimArkeo {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)
    }
}

impl ValidateBasic for MsgTransferClaim {
    fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_creator(&self.creator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pubkey(prefix: u8) -> Vec<u8> {
        let mut key = vec![prefix];
        key.extend_from_slice(&[7u8; 32]);
        key
    }

    fn bond() -> MsgBondProvider {
        MsgBondProvider {
            creator: vec![1; 20],
            provider: pubkey(0x02),
            service: "btc-mainnet-fullnode".into(),
            bond: "500".into(),
        }
    }

    fn mod_provider() -> MsgModProvider {
        MsgModProvider {
            creator: vec![1; 20],
            provider: pubkey(0x03),
            service: "eth-mainnet-fullnode".into(),
            metadata_uri: "https://example.com/metadata.json".into(),
            status: ProviderStatus::Online as i32,
            min_contract_duration: 10,
            max_contract_duration: 1000,
            subscription_rate: vec![Coin::new("uarkeo", "15")],
            pay_as_you_go_rate: vec![Coin::new("uarkeo", "1")],
            ..Default::default()
        }
    }

    fn open_contract() -> MsgOpenContract {
        MsgOpenContract {
            creator: vec![1; 20],
            provider: pubkey(0x02),
            service: "swapi.dev".into(),
            client: pubkey(0x03),
            duration: 100,
            rate: Some(Coin::new("uarkeo", "10")),
            deposit: "1000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_int_sign() {
        assert_eq!(int_sign("0"), Some(IntSign::Zero));
        assert_eq!(int_sign("-000"), Some(IntSign::Zero));
        assert_eq!(int_sign("-5"), Some(IntSign::Negative));
        assert_eq!(
            int_sign("115792089237316195423570985008687907853269984665640564039457"),
            Some(IntSign::Positive)
        );
        assert_eq!(int_sign(""), None);
        assert_eq!(int_sign("-"), None);
        assert_eq!(int_sign("1.5"), None);
    }

    #[test]
    fn test_denoms() {
        assert!(is_valid_denom("uarkeo"));
        assert!(is_valid_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"));
        assert!(!is_valid_denom("ab"));
        assert!(!is_valid_denom("1abc"));
        assert!(!is_valid_denom("abc def"));
    }

    #[test]
    fn test_bond_valid_and_negative_unbond() {
        assert!(bond().validate_basic().is_ok());
        let unbond = MsgBondProvider {
            bond: "-500".into(),
            ..bond()
        };
        assert!(unbond.validate_basic().is_ok());
    }

    #[test]
    fn test_bond_rejections() {
        let zero = MsgBondProvider {
            bond: "0".into(),
            ..bond()
        };
        assert!(matches!(zero.validate_basic(), Err(ValidationError::InvalidBond(_))));

        let bad_key = MsgBondProvider {
            provider: vec![0xAA, 0xBB],
            ..bond()
        };
        let err = bad_key.validate_basic().unwrap_err();
        assert_eq!(err.chain_code(), Some(("arkeo", 19)));

        let uncompressed = MsgBondProvider {
            provider: pubkey(0x04),
            ..bond()
        };
        assert!(uncompressed.validate_basic().is_err());

        let unknown_service = MsgBondProvider {
            service: "unknown".into(),
            ..bond()
        };
        assert!(matches!(
            unknown_service.validate_basic(),
            Err(ValidationError::InvalidService(_))
        ));

        let no_creator = MsgBondProvider {
            creator: vec![],
            ..bond()
        };
        assert!(matches!(
            no_creator.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_mod_provider() {
        assert!(mod_provider().validate_basic().is_ok());

        let long_uri = MsgModProvider {
            metadata_uri: "x".repeat(101),
            ..mod_provider()
        };
        assert_eq!(
            long_uri.validate_basic(),
            Err(ValidationError::InvalidMetadataUri(101))
        );

        let min_zero = MsgModProvider {
            min_contract_duration: 0,
            ..mod_provider()
        };
        assert!(matches!(
            min_zero.validate_basic(),
            Err(ValidationError::InvalidMinContractDuration(_))
        ));

        let min_above_max = MsgModProvider {
            min_contract_duration: 2000,
            ..mod_provider()
        };
        assert!(min_above_max.validate_basic().is_err());

        let negative_settlement = MsgModProvider {
            settlement_duration: -1,
            ..mod_provider()
        };
        assert_eq!(
            negative_settlement.validate_basic(),
            Err(ValidationError::InvalidSettlementDuration(-1))
        );

        let zero_rate = MsgModProvider {
            pay_as_you_go_rate: vec![Coin::new("uarkeo", "0")],
            ..mod_provider()
        };
        assert!(matches!(
            zero_rate.validate_basic(),
            Err(ValidationError::InvalidRate(_))
        ));

        let dup_rate = MsgModProvider {
            subscription_rate: vec![Coin::new("uarkeo", "1"), Coin::new("uarkeo", "2")],
            ..mod_provider()
        };
        assert!(matches!(
            dup_rate.validate_basic(),
            Err(ValidationError::InvalidCoins(_))
        ));

        let bad_status = MsgModProvider {
            status: 9,
            ..mod_provider()
        };
        assert_eq!(
            bad_status.validate_basic(),
            Err(ValidationError::InvalidProviderStatus(9))
        );
    }

    #[test]
    fn test_open_contract() {
        assert!(open_contract().validate_basic().is_ok());

        let no_duration = MsgOpenContract {
            duration: 0,
            ..open_contract()
        };
        assert_eq!(
            no_duration.validate_basic(),
            Err(ValidationError::InvalidContractDuration(0))
        );

        let no_rate = MsgOpenContract {
            rate: None,
            ..open_contract()
        };
        assert!(matches!(no_rate.validate_basic(), Err(ValidationError::InvalidRate(_))));

        let bad_delegate = MsgOpenContract {
            delegate: vec![1, 2, 3],
            ..open_contract()
        };
        assert!(matches!(
            bad_delegate.validate_basic(),
            Err(ValidationError::InvalidPubKey(_))
        ));

        let bad_deposit = MsgOpenContract {
            deposit: "-1".into(),
            ..open_contract()
        };
        assert!(bad_deposit.validate_basic().is_err());

        let bad_type = MsgOpenContract {
            contract_type: 5,
            ..open_contract()
        };
        assert_eq!(
            bad_type.validate_basic(),
            Err(ValidationError::InvalidContractType(5))
        );
    }

    #[test]
    fn test_close_contract_requires_id() {
        let msg = MsgCloseContract {
            creator: vec![1],
            contract_id: 0,
        };
        assert_eq!(msg.validate_basic(), Err(ValidationError::ContractNotFound(0)));
        assert_eq!(
            ValidationError::ContractNotFound(0).chain_code(),
            Some(("arkeo", 27))
        );
    }

    #[test]
    fn test_claim_contract_income() {
        let valid = MsgClaimContractIncome {
            creator: vec![1],
            contract_id: 3,
            signature: vec![0; 64],
            nonce: 1,
            chain_id: "arkeo".into(),
            signature_expires_at_block: 10,
        };
        assert!(valid.validate_basic().is_ok());

        let long_sig = MsgClaimContractIncome {
            signature: vec![0; 101],
            ..valid.clone()
        };
        assert!(matches!(
            long_sig.validate_basic(),
            Err(ValidationError::InvalidSignature(_))
        ));

        let zero_nonce = MsgClaimContractIncome {
            nonce: 0,
            ..valid.clone()
        };
        assert_eq!(zero_nonce.validate_basic(), Err(ValidationError::BadNonce(0)));

        let no_chain = MsgClaimContractIncome {
            chain_id: String::new(),
            ..valid.clone()
        };
        assert!(no_chain.validate_basic().is_err());

        let no_expiry = MsgClaimContractIncome {
            signature_expires_at_block: 0,
            ..valid
        };
        assert!(no_expiry.validate_basic().is_err());
    }

    #[test]
    fn test_set_version() {
        let msg = MsgSetVersion {
            creator: "arkeo1qyqszqgpqyqszqgpqyqszqgpqyqszqgp6ydm2z".into(),
            version: 0,
        };
        assert_eq!(msg.validate_basic(), Err(ValidationError::InvalidVersion(0)));
        let msg = MsgSetVersion { version: 2, ..msg };
        assert!(msg.validate_basic().is_ok());
    }

    #[test]
    fn test_add_claim_addresses() {
        let eth = MsgAddClaim {
            creator: vec![1],
            chain: Chain::Ethereum as i32,
            address: "0x92e14917A0508Eb56C90C90619f5F9Adbf49f47d".into(),
            amount: 100,
        };
        assert!(eth.validate_basic().is_ok());

        let bad_eth = MsgAddClaim {
            address: "0x1234".into(),
            ..eth.clone()
        };
        assert!(matches!(
            bad_eth.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));

        let arkeo = MsgAddClaim {
            chain: Chain::Arkeo as i32,
            address: "arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgp".into(),
            ..eth.clone()
        };
        assert!(arkeo.validate_basic().is_ok());

        let testnet = MsgAddClaim {
            address: "tarkeo1dllfyp57l4xj5umqfcqy6c2l3xfk0qk6zpc3t7".into(),
            ..arkeo.clone()
        };
        assert!(testnet.validate_basic().is_ok());

        let bad_checksum = MsgAddClaim {
            address: "arkeo1qyqszqgpqyqszqgpqyqszqgpqyqszqgp6ydm2z".into(),
            ..arkeo.clone()
        };
        assert!(matches!(
            bad_checksum.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));

        let zero = MsgAddClaim { amount: 0, ..eth };
        assert!(zero.validate_basic().is_err());
    }

    #[test]
    fn test_add_claim_rejects_thorchain() {
        let thor = MsgAddClaim {
            creator: vec![1],
            chain: Chain::Thorchain as i32,
            address: "thor1qyqszqgpqyqszqgp".into(),
            amount: 100,
        };
        assert!(matches!(
            thor.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));
        assert!(!is_valid_claim_address(
            "arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgp",
            Chain::Thorchain
        ));
    }

    #[test]
    fn test_add_claim_unknown_chain() {
        let msg = MsgAddClaim {
            creator: vec![1],
            chain: 9,
            address: "0x92e14917A0508Eb56C90C90619f5F9Adbf49f47d".into(),
            amount: 100,
        };
        assert!(matches!(
            msg.validate_basic(),
            Err(ValidationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_add_claim_ignores_creator() {
        let msg = MsgAddClaim {
            creator: vec![],
            chain: Chain::Ethereum as i32,
            address: "0x92e14917A0508Eb56C90C90619f5F9Adbf49f47d".into(),
            amount: 1,
        };
        assert!(msg.validate_basic().is_ok());
    }

    #[test]
    fn test_claim_eth() {
        let msg = MsgClaimEth {
            creator: vec![1],
            eth_address: "0x92e14917A0508Eb56C90C90619f5F9Adbf49f47d".into(),
            signature: "0xdeadbeef".into(),
        };
        assert!(msg.validate_basic().is_ok());

        // address and signature are left to the chain
        let unchecked = MsgClaimEth {
            eth_address: "not-an-address".into(),
            signature: String::new(),
            ..msg.clone()
        };
        assert!(unchecked.validate_basic().is_ok());

        let no_creator = MsgClaimEth {
            creator: vec![],
            ..msg
        };
        assert!(matches!(
            no_creator.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_claim_arkeo() {
        assert!(MsgClaimArkeo { creator: vec![1] }.validate_basic().is_ok());
        assert!(matches!(
            MsgClaimArkeo { creator: vec![] }.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_transfer_claim() {
        let msg = MsgTransferClaim {
            creator: vec![1],
            to_address: vec![2; 20],
        };
        assert!(msg.validate_basic().is_ok());

        let no_recipient = MsgTransferClaim {
            to_address: vec![],
            ..msg.clone()
        };
        assert!(no_recipient.validate_basic().is_ok());

        let no_creator = MsgTransferClaim {
            creator: vec![],
            ..msg
        };
        assert!(matches!(
            no_creator.validate_basic(),
            Err(ValidationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_bech32_checksum() {
        assert!(is_valid_bech32("arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgp", "arkeo"));
        assert!(is_valid_bech32("arkeo1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnqkylvu", "arkeo"));
        assert!(is_valid_bech32("tarkeo1zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3dcma7f", "tarkeo"));
        assert!(is_valid_bech32("ARKEO1QYPQXPQPQGPSGQGZQVZQZQSRQSQSYQCY82MWGP", "arkeo"));

        // wrong prefix
        assert!(!is_valid_bech32("arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgp", "tarkeo"));
        // checksum
        assert!(!is_valid_bech32("arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgq", "arkeo"));
        assert!(!is_valid_bech32("arkeo1qyqszqgpqyqszqgpqyqszqgpqyqszqgp6ydm2z", "arkeo"));
        assert!(!is_valid_bech32("arkeo1qqqqqqqqqq", "arkeo"));
        // mixed case
        assert!(!is_valid_bech32("Arkeo1qypqxpqpqgpsgqgzqvzqzqsrqsqsyqcy82mwgp", "arkeo"));
        assert!(!is_valid_bech32("", "arkeo"));

        assert!(!is_valid_claim_address("arkeo1qqqqqqqqqq", Chain::Arkeo));
        assert!(is_valid_claim_address(
            "tarkeo1yg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zz97mk7",
            Chain::Arkeo
        ));
    }
}
