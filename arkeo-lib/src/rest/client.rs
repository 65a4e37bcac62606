//! Read-only client for the chain's REST gateway.
//!
//! # Feature Flags
//!
//! Requests need the `rest-client` feature (enabled by default). Without it
//! every query returns [`ArkeoError::Unimplemented`].
//!
//! # Example
//!
//! ```rust,ignore
//! use arkeo_lib::rest::{RestClient, RestConfig};
//!
//! let client = RestClient::new(RestConfig::from_env())?;
//!
//! let params = client.params().await?;
//! let contract = client.contract(42).await?;
//! println!("contract 42 expires at {}", contract.expiration());
//!
//! for provider in client.all_providers().await? {
//!     println!("{}", provider.key());
//! }
//! ```

use serde::de::DeserializeOwned;
#[cfg(feature = "rest-client")]
use std::time::Duration;

use super::config::RestConfig;
use super::pagination::{self, PageWalker};
use crate::proto::arkeo::{
    Contract, Params, Provider, QueryActiveContractResponse, QueryAllContractResponse,
    QueryAllProviderResponse, QueryFetchContractResponse, QueryFetchProviderResponse,
    QueryParamsResponse,
};
use crate::proto::{PageRequest, RpcStatus};
use crate::{ArkeoError, Result};

/// gRPC status code for a missing resource.
const GRPC_NOT_FOUND: i32 = 5;

/// Delay suggested when the gateway rate limits without a `Retry-After` header.
const DEFAULT_RETRY_AFTER_MS: u64 = 5000;

/// What a request was looking up, used to label `NotFound` errors.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(not(feature = "rest-client"), allow(dead_code))]
struct Resource<'a> {
    kind: &'a str,
    id: &'a str,
}

/// Client for the `/arkeo/*` query endpoints.
pub struct RestClient {
    config: RestConfig,
    #[cfg(feature = "rest-client")]
    client: reqwest::Client,
}

impl RestClient {
    /// Create a client with the given configuration.
    #[cfg(feature = "rest-client")]
    pub fn new(config: RestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ArkeoError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a client with the given configuration (stub when feature disabled).
    #[cfg(not(feature = "rest-client"))]
    pub fn new(config: RestConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Client for a node on this machine.
    pub fn localnet() -> Result<Self> {
        Self::new(RestConfig::localnet())
    }

    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    #[cfg(any(feature = "rest-client", test))]
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[cfg(feature = "rest-client")]
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: Resource<'_>,
    ) -> Result<T> {
        let url = self.url(path);
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, params = query.len(), "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response, resource).await
    }

    #[cfg(not(feature = "rest-client"))]
    async fn get<T: DeserializeOwned>(
        &self,
        _path: &str,
        _query: &[(&str, String)],
        _resource: Resource<'_>,
    ) -> Result<T> {
        Err(ArkeoError::Unimplemented(
            "REST client not compiled - enable the 'rest-client' feature",
        ))
    }

    #[cfg(feature = "rest-client")]
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: Resource<'_>,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body = response.text().await.unwrap_or_default();
            let mut err = status_error(status.as_u16(), &body, resource.kind, resource.id);
            if let (ArkeoError::RateLimited { retry_after_ms }, Some(secs)) = (&mut err, retry_after)
            {
                *retry_after_ms = secs.saturating_mul(1000);
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), error = %err, "gateway request failed");
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ArkeoError::Transport(format!("Failed to read response: {}", e)))?;
        serde_json::from_slice(&body).map_err(|e| {
            ArkeoError::Serialization(format!("Failed to parse gateway response: {}", e))
        })
    }

    #[cfg(feature = "rest-client")]
    fn map_reqwest_error(&self, e: reqwest::Error) -> ArkeoError {
        if e.is_timeout() {
            ArkeoError::ConnectionTimeout {
                operation: "gateway request".to_string(),
                timeout_ms: self.config.timeout_secs.saturating_mul(1000),
            }
        } else if e.is_connect() {
            ArkeoError::ConnectionFailed {
                target: self.config.api_url.clone(),
                reason: e.to_string(),
            }
        } else {
            ArkeoError::Transport(format!("Gateway request failed: {}", e))
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current module parameters.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn params(&self) -> Result<Params> {
        let response: QueryParamsResponse = self
            .get("arkeo/params", &[], Resource { kind: "params", id: "" })
            .await?;
        Ok(response.params.unwrap_or_default())
    }

    /// A provider by bech32 public key and service name.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn provider(&self, pubkey: &str, service: &str) -> Result<Provider> {
        let id = format!("{}/{}", pubkey, service);
        let resource = Resource {
            kind: "provider",
            id: &id,
        };
        let response: QueryFetchProviderResponse = self
            .get(&format!("arkeo/provider/{}", id), &[], resource)
            .await?;
        response
            .provider
            .ok_or_else(|| ArkeoError::not_found("provider", id))
    }

    /// One page of providers.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn providers(&self, page: Option<PageRequest>) -> Result<QueryAllProviderResponse> {
        let query = page.as_ref().map(pagination::query_params).unwrap_or_default();
        self.get(
            "arkeo/providers",
            &query,
            Resource {
                kind: "providers",
                id: "",
            },
        )
        .await
    }

    /// A contract by id.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn contract(&self, contract_id: u64) -> Result<Contract> {
        let id = contract_id.to_string();
        let resource = Resource {
            kind: "contract",
            id: &id,
        };
        let response: QueryFetchContractResponse = self
            .get(&format!("arkeo/contract/{}", id), &[], resource)
            .await?;
        response
            .contract
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ArkeoError::not_found("contract", id))
    }

    /// One page of contracts.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn contracts(&self, page: Option<PageRequest>) -> Result<QueryAllContractResponse> {
        let query = page.as_ref().map(pagination::query_params).unwrap_or_default();
        self.get(
            "arkeo/contracts",
            &query,
            Resource {
                kind: "contracts",
                id: "",
            },
        )
        .await
    }

    /// The open contract between `spender` and `provider` for `service`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn active_contract(
        &self,
        provider: &str,
        service: &str,
        spender: &str,
    ) -> Result<Contract> {
        let id = format!("{}/{}/{}", provider, service, spender);
        let resource = Resource {
            kind: "active contract",
            id: &id,
        };
        let response: QueryActiveContractResponse = self
            .get(&format!("arkeo/active-contract/{}", id), &[], resource)
            .await?;
        response
            .contract
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ArkeoError::not_found("active contract", id))
    }

    /// Every provider, following continuation keys to the end of the listing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn all_providers(&self) -> Result<Vec<Provider>> {
        let mut walker = PageWalker::new(self.config.page_limit, self.config.max_pages);
        let mut providers = Vec::new();
        while let Some(request) = walker.next_request() {
            let page = self.providers(Some(request)).await?;
            providers.extend(page.provider);
            walker.advance(page.pagination.as_ref())?;
        }
        Ok(providers)
    }

    /// Every contract, following continuation keys to the end of the listing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn all_contracts(&self) -> Result<Vec<Contract>> {
        let mut walker = PageWalker::new(self.config.page_limit, self.config.max_pages);
        let mut contracts = Vec::new();
        while let Some(request) = walker.next_request() {
            let page = self.contracts(Some(request)).await?;
            contracts.extend(page.contract);
            walker.advance(page.pagination.as_ref())?;
        }
        Ok(contracts)
    }
}

/// Maps a failed gateway response to an [`ArkeoError`].
///
/// The body is read as the gateway's `{code, message, details}` status when it
/// parses; otherwise the raw text becomes the message.
pub fn status_error(status: u16, body: &str, resource_type: &str, identifier: &str) -> ArkeoError {
    let rpc: RpcStatus = serde_json::from_str(body).unwrap_or_else(|_| RpcStatus {
        message: body.trim().to_string(),
        ..Default::default()
    });

    if status == 404 || rpc.code == GRPC_NOT_FOUND {
        let identifier = if identifier.is_empty() {
            rpc.message
        } else {
            identifier.to_string()
        };
        return ArkeoError::NotFound {
            resource_type: resource_type.to_string(),
            identifier,
        };
    }

    match status {
        400 => ArkeoError::InvalidData {
            field: "request".to_string(),
            reason: rpc.message,
        },
        429 => ArkeoError::RateLimited {
            retry_after_ms: DEFAULT_RETRY_AFTER_MS,
        },
        _ => ArkeoError::Remote {
            status,
            code: rpc.code,
            message: rpc.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArkeoErrorCode;

    #[test]
    fn test_url_building() {
        let client = RestClient::new(RestConfig::new("http://node:1317/")).unwrap();
        assert_eq!(client.url("arkeo/params"), "http://node:1317/arkeo/params");
        assert_eq!(client.url("/arkeo/params"), "http://node:1317/arkeo/params");
    }

    #[test]
    fn test_localnet_client() {
        let client = RestClient::localnet().unwrap();
        assert!(client.config().api_url.contains("localhost"));
    }

    #[test]
    fn test_not_found_by_status() {
        let err = status_error(404, "", "contract", "7");
        assert!(matches!(
            err,
            ArkeoError::NotFound { ref resource_type, ref identifier }
                if resource_type == "contract" && identifier == "7"
        ));
    }

    #[test]
    fn test_not_found_by_grpc_code() {
        let body = r#"{"code": 5, "message": "contract not found", "details": []}"#;
        let err = status_error(500, body, "contract", "");
        assert!(matches!(
            err,
            ArkeoError::NotFound { ref identifier, .. } if identifier == "contract not found"
        ));
    }

    #[test]
    fn test_bad_request() {
        let body = r#"{"code": 3, "message": "invalid pubkey"}"#;
        let err = status_error(400, body, "provider", "x");
        assert_eq!(err.code(), ArkeoErrorCode::InvalidData);
        assert!(err.to_string().contains("invalid pubkey"));
    }

    #[test]
    fn test_rate_limited() {
        let err = status_error(429, "slow down", "params", "");
        assert_eq!(err.retry_after_ms(), Some(DEFAULT_RETRY_AFTER_MS));
    }

    #[test]
    fn test_server_error_keeps_status_and_code() {
        let body = r#"{"code": 13, "message": "panic"}"#;
        let err = status_error(503, body, "params", "");
        assert!(matches!(
            err,
            ArkeoError::Remote { status: 503, code: 13, ref message } if message == "panic"
        ));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_unparsable_body_becomes_message() {
        let err = status_error(502, "<html>bad gateway</html>", "params", "");
        assert!(matches!(
            err,
            ArkeoError::Remote { code: 0, ref message, .. } if message.contains("bad gateway")
        ));
    }
}
