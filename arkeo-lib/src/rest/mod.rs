//! REST gateway access.
//!
//! - [`RestConfig`] - gateway URL, network and request limits
//! - [`RestClient`] - typed queries over the `/arkeo/*` endpoints
//! - [`PageWalker`] - continuation-key bookkeeping for list endpoints

mod client;
mod config;
pub mod pagination;

pub use client::{status_error, RestClient};
pub use config::{Network, RestConfig, LOCALNET_API_URL, NATIVE_DENOM};
pub use pagination::PageWalker;
