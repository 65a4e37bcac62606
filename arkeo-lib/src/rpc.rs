//! Typed clients for the `Msg` and `Query` gRPC services.
//!
//! The clients only encode requests and decode replies. Moving the bytes, and
//! for `Msg` calls signing and broadcasting them, is the job of the injected
//! [`Rpc`] transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use arkeo_lib::rpc::{MsgClient, QueryClient};
//!
//! let query = QueryClient::new(my_transport.clone());
//! let params = query.params().await?;
//!
//! let msgs = MsgClient::new(my_transport);
//! msgs.close_contract(MsgCloseContract { creator, contract_id: 7 }).await?;
//! ```

use async_trait::async_trait;
use prost::Message;

use crate::proto::arkeo::{
    MsgBondProvider, MsgBondProviderResponse, MsgClaimContractIncome,
    MsgClaimContractIncomeResponse, MsgCloseContract, MsgCloseContractResponse, MsgModProvider,
    MsgModProviderResponse, MsgOpenContract, MsgOpenContractResponse, MsgSetVersion,
    MsgSetVersionResponse, QueryActiveContractRequest, QueryActiveContractResponse,
    QueryAllContractRequest, QueryAllContractResponse, QueryAllProviderRequest,
    QueryAllProviderResponse, QueryFetchContractRequest, QueryFetchContractResponse,
    QueryFetchProviderRequest, QueryFetchProviderResponse, QueryParamsRequest,
    QueryParamsResponse,
};
use crate::proto::claim::{
    MsgAddClaim, MsgAddClaimResponse, MsgClaimArkeo, MsgClaimArkeoResponse, MsgClaimEth,
    MsgClaimEthResponse, MsgTransferClaim, MsgTransferClaimResponse,
};
use crate::proto::PageRequest;
use crate::validation::ValidateBasic;
use crate::Result;

/// Fully qualified name of the arkeo Msg service.
pub const MSG_SERVICE: &str = "arkeo.arkeo.Msg";

/// Fully qualified name of the arkeo Query service.
pub const QUERY_SERVICE: &str = "arkeo.arkeo.Query";

/// Fully qualified name of the claim Msg service.
pub const CLAIM_MSG_SERVICE: &str = "arkeo.claim.Msg";

/// Unary request/response transport.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Rpc {
    /// Sends encoded `data` to `service`/`method` and returns the encoded reply.
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>>;
}

async fn unary<R, Req, Resp>(rpc: &R, service: &str, method: &str, request: &Req) -> Result<Resp>
where
    R: Rpc + ?Sized,
    Req: Message,
    Resp: Message + Default,
{
    let reply = rpc.request(service, method, request.encode_to_vec()).await?;
    Ok(Resp::decode(reply.as_slice())?)
}

/// Client for the arkeo `Msg` service.
///
/// Every message runs its stateless checks before it reaches the transport.
#[derive(Clone, Debug)]
pub struct MsgClient<R> {
    rpc: R,
    service: String,
}

impl<R: Rpc + Sync> MsgClient<R> {
    pub fn new(rpc: R) -> Self {
        Self::with_service(rpc, MSG_SERVICE)
    }

    /// Client for a service registered under a different name.
    pub fn with_service(rpc: R, service: impl Into<String>) -> Self {
        Self {
            rpc,
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn transport(&self) -> &R {
        &self.rpc
    }

    async fn send<Req, Resp>(&self, method: &str, msg: &Req) -> Result<Resp>
    where
        Req: Message + ValidateBasic,
        Resp: Message + Default,
    {
        msg.validate_basic()?;
        unary(&self.rpc, &self.service, method, msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(service = %msg.service)))]
    pub async fn bond_provider(&self, msg: MsgBondProvider) -> Result<MsgBondProviderResponse> {
        self.send("BondProvider", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(service = %msg.service)))]
    pub async fn mod_provider(&self, msg: MsgModProvider) -> Result<MsgModProviderResponse> {
        self.send("ModProvider", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(service = %msg.service)))]
    pub async fn open_contract(&self, msg: MsgOpenContract) -> Result<MsgOpenContractResponse> {
        self.send("OpenContract", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(contract_id = msg.contract_id)))]
    pub async fn close_contract(&self, msg: MsgCloseContract) -> Result<MsgCloseContractResponse> {
        self.send("CloseContract", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(contract_id = msg.contract_id, nonce = msg.nonce)))]
    pub async fn claim_contract_income(
        &self,
        msg: MsgClaimContractIncome,
    ) -> Result<MsgClaimContractIncomeResponse> {
        self.send("ClaimContractIncome", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(version = msg.version)))]
    pub async fn set_version(&self, msg: MsgSetVersion) -> Result<MsgSetVersionResponse> {
        self.send("SetVersion", &msg).await
    }
}

/// Client for the arkeo `Query` service.
#[derive(Clone, Debug)]
pub struct QueryClient<R> {
    rpc: R,
    service: String,
}

impl<R: Rpc + Sync> QueryClient<R> {
    pub fn new(rpc: R) -> Self {
        Self::with_service(rpc, QUERY_SERVICE)
    }

    pub fn with_service(rpc: R, service: impl Into<String>) -> Self {
        Self {
            rpc,
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn params(&self) -> Result<QueryParamsResponse> {
        unary(&self.rpc, &self.service, "Params", &QueryParamsRequest {}).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch_provider(
        &self,
        pubkey: &str,
        service: &str,
    ) -> Result<QueryFetchProviderResponse> {
        let request = QueryFetchProviderRequest {
            pubkey: pubkey.to_string(),
            service: service.to_string(),
        };
        unary(&self.rpc, &self.service, "FetchProvider", &request).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn provider_all(
        &self,
        pagination: Option<PageRequest>,
    ) -> Result<QueryAllProviderResponse> {
        let request = QueryAllProviderRequest { pagination };
        unary(&self.rpc, &self.service, "ProviderAll", &request).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch_contract(&self, contract_id: u64) -> Result<QueryFetchContractResponse> {
        let request = QueryFetchContractRequest { contract_id };
        unary(&self.rpc, &self.service, "FetchContract", &request).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn contract_all(
        &self,
        pagination: Option<PageRequest>,
    ) -> Result<QueryAllContractResponse> {
        let request = QueryAllContractRequest { pagination };
        unary(&self.rpc, &self.service, "ContractAll", &request).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn active_contract(
        &self,
        spender: &str,
        provider: &str,
        service: &str,
    ) -> Result<QueryActiveContractResponse> {
        let request = QueryActiveContractRequest {
            spender: spender.to_string(),
            provider: provider.to_string(),
            service: service.to_string(),
        };
        unary(&self.rpc, &self.service, "ActiveContract", &request).await
    }
}

/// Client for the claim module's `Msg` service.
#[derive(Clone, Debug)]
pub struct ClaimMsgClient<R> {
    rpc: R,
}

impl<R: Rpc + Sync> ClaimMsgClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    async fn send<Req, Resp>(&self, method: &str, msg: &Req) -> Result<Resp>
    where
        Req: Message + ValidateBasic,
        Resp: Message + Default,
    {
        msg.validate_basic()?;
        unary(&self.rpc, CLAIM_MSG_SERVICE, method, msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg)))]
    pub async fn claim_eth(&self, msg: MsgClaimEth) -> Result<MsgClaimEthResponse> {
        self.send("ClaimEth", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg)))]
    pub async fn claim_arkeo(&self, msg: MsgClaimArkeo) -> Result<MsgClaimArkeoResponse> {
        self.send("ClaimArkeo", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg)))]
    pub async fn transfer_claim(&self, msg: MsgTransferClaim) -> Result<MsgTransferClaimResponse> {
        self.send("TransferClaim", &msg).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, msg), fields(chain = msg.chain)))]
    pub async fn add_claim(&self, msg: MsgAddClaim) -> Result<MsgAddClaimResponse> {
        self.send("AddClaim", &msg).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<T: Rpc + Sync + Send + ?Sized> Rpc for std::sync::Arc<T> {
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>> {
        (**self).request(service, method, data).await
    }
}
