//! Service name lookup.
//!
//! Providers and contracts carry a numeric service id on chain while messages
//! name the service. Names are matched case-insensitively; id 0 (`unknown`)
//! is never a valid service.

use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

const SERVICES: &[(&str, i32)] = &[
    ("unknown", 0),
    ("swapi.dev", 1),
    ("arkeo-mainnet-fullnode", 2),
    ("avax-mainnet-fullnode", 3),
    ("avax-mainnet-archivenode", 4),
    ("bch-mainnet-fullnode", 5),
    ("bch-mainnet-lightnode", 6),
    ("bnb-mainnet-fullnode", 7),
    ("bsc-mainnet-fullnode", 8),
    ("bsc-mainnet-archivenode", 9),
    ("btc-mainnet-fullnode", 10),
    ("btc-mainnet-lightnode", 11),
    ("cardano-mainnet-relaynode", 12),
    ("cosmos-mainnet-fullnode", 13),
    ("doge-mainnet-fullnode", 14),
    ("doge-mainnet-lightnode", 15),
    ("etc-mainnet-archivenode", 16),
    ("etc-mainnet-fullnode", 17),
    ("etc-mainnet-lightnode", 18),
    ("eth-mainnet-archivenode", 19),
    ("eth-mainnet-fullnode", 20),
    ("eth-mainnet-lightnode", 21),
    ("ltc-mainnet-fullnode", 22),
    ("ltc-mainnet-lightnode", 23),
    ("optimism-mainnet-fullnode", 24),
    ("osmosis-mainnet-fullnode", 25),
    ("polkadot-mainnet-fullnode", 26),
    ("polkadot-mainnet-lightnode", 27),
    ("polkadot-mainnet-archivenode", 28),
    ("polygon-mainnet-fullnode", 29),
    ("polygon-mainnet-archivenode", 30),
    ("sol-mainnet-fullnode", 31),
    ("thorchain-mainnet-fullnode", 32),
    ("unchained-production", 33),
];

/// A known service id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Service(i32);

impl Service {
    pub const STAR_WARS: Service = Service(1);
    pub const BTC: Service = Service(10);
    pub const ETH: Service = Service(20);

    /// Looks up a service by id; `None` for 0 and unassigned ids.
    pub fn from_id(id: i32) -> Option<Self> {
        SERVICES
            .iter()
            .any(|(_, known)| *known == id && id != 0)
            .then_some(Self(id))
    }

    /// Looks up a service by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        SERVICES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
            .filter(|id| *id != 0)
            .map(Self)
    }

    pub fn id(&self) -> i32 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        name_of(self.0)
    }

    /// All known services, excluding `unknown`.
    pub fn all() -> impl Iterator<Item = Service> {
        SERVICES
            .iter()
            .filter(|(_, id)| *id != 0)
            .map(|(_, id)| Service(*id))
    }
}

/// Name for a raw id, `"unknown"` when unassigned.
pub fn name_of(id: i32) -> &'static str {
    SERVICES
        .iter()
        .find(|(_, known)| *known == id)
        .map(|(name, _)| *name)
        .unwrap_or("unknown")
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ValidationError::InvalidService(s.to_string()))
    }
}

impl From<Service> for i32 {
    fn from(service: Service) -> Self {
        service.0
    }
}
