//! Test utilities for Arkeo clients.
//!
//! This module provides:
//! - Fixtures: valid keys, addresses and messages for each Msg type
//! - A mock [`Rpc`](crate::rpc::Rpc) transport with canned replies
//! - Assertion helpers for validation and query failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arkeo_lib::rpc::MsgClient;
//! use arkeo_lib::test_utils::{MockRpc, TestFixtures};
//!
//! let rpc = MockRpc::new();
//! let client = MsgClient::new(rpc.clone());
//! client.bond_provider(TestFixtures::bond_provider()).await?;
//! assert_eq!(rpc.calls()[0].method, "BondProvider");
//! ```

mod assertions;
mod fixtures;
mod mock_rpc;

pub use fixtures::{test_pubkey, TestFixtures};

pub use mock_rpc::{MockReply, MockRpc, RecordedCall};

pub use assertions::{assert_not_found, assert_validation_error};
