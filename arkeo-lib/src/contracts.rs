//! Lifecycle helpers for providers and contracts, and genesis checks.
//!
//! Heights are block heights. A contract opened at `height` for `duration`
//! blocks expires at `height + duration`; its provider may still claim
//! income until `expiration + settlement_duration`.

use std::collections::HashSet;

use crate::proto::arkeo::{
    Contract, ContractAuthorization, ContractType, GenesisState, Provider, ProviderStatus,
};
use crate::service;
use crate::validation::ValidationError;

/// Identity of a provider: public key and service id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderKey {
    pub pub_key: Vec<u8>,
    pub service: i32,
}

impl std::fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}",
            hex::encode(&self.pub_key),
            service::name_of(self.service)
        )
    }
}

/// Identity of an active contract: provider, service and spender.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContractKey {
    pub provider: Vec<u8>,
    pub service: i32,
    pub spender: Vec<u8>,
}

impl Provider {
    pub fn key(&self) -> ProviderKey {
        ProviderKey {
            pub_key: self.pub_key.clone(),
            service: self.service,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status() == ProviderStatus::Online
    }

    pub fn supports_subscription(&self) -> bool {
        !self.subscription_rate.is_empty()
    }

    pub fn supports_pay_as_you_go(&self) -> bool {
        !self.pay_as_you_go_rate.is_empty()
    }

    /// True if `duration` falls inside the provider's accepted contract range.
    pub fn accepts_duration(&self, duration: i64) -> bool {
        duration >= self.min_contract_duration && duration <= self.max_contract_duration
    }
}

impl Contract {
    /// A contract that was never opened has height 0.
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn expiration(&self) -> i64 {
        self.height.saturating_add(self.duration)
    }

    /// A contract stays open through its expiration height and expires after it.
    pub fn is_expired(&self, current_height: i64) -> bool {
        !self.is_empty() && self.expiration() < current_height
    }

    /// Last height at which the provider may claim income.
    pub fn settlement_period_end(&self) -> i64 {
        self.expiration().saturating_add(self.settlement_duration)
    }

    /// True once the contract has been settled on chain.
    pub fn is_settled(&self, current_height: i64) -> bool {
        self.settlement_height > 0 && self.settlement_height <= current_height
    }

    /// The account paying for queries: the delegate when one is set.
    pub fn spender(&self) -> &[u8] {
        if self.delegate.is_empty() {
            &self.client
        } else {
            &self.delegate
        }
    }

    /// Contract type, falling back to subscription for unknown values.
    pub fn contract_type(&self) -> ContractType {
        ContractType::try_from(self.r#type).unwrap_or_default()
    }

    pub fn is_subscription(&self) -> bool {
        self.contract_type() == ContractType::Subscription
    }

    pub fn is_pay_as_you_go(&self) -> bool {
        self.contract_type() == ContractType::PayAsYouGo
    }

    pub fn is_open_authorization(&self) -> bool {
        self.authorization() == ContractAuthorization::Open
    }

    pub fn key(&self) -> ContractKey {
        ContractKey {
            provider: self.provider.clone(),
            service: self.service,
            spender: self.spender().to_vec(),
        }
    }
}

impl GenesisState {
    /// Structural checks over a genesis export.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut providers = HashSet::new();
        for provider in &self.providers {
            let key = provider.key();
            if !providers.insert(key.clone()) {
                return Err(ValidationError::DuplicateProvider(key.to_string()));
            }
        }

        let mut contracts = HashSet::new();
        for contract in &self.contracts {
            if !contracts.insert(contract.id) {
                return Err(ValidationError::DuplicateContract(contract.id));
            }
        }

        let max = self.contracts.iter().map(|c| c.id).max().unwrap_or(0);
        if self.next_contract_id < max {
            return Err(ValidationError::NextContractIdTooLow {
                next: self.next_contract_id,
                max,
            });
        }

        if self.version < 0 {
            return Err(ValidationError::InvalidVersion(self.version));
        }
        Ok(())
    }
}
