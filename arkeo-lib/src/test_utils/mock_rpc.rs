//! In-memory [`Rpc`] transport that records requests and plays back replies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prost::Message;

use crate::rpc::Rpc;
use crate::{ArkeoError, Result};

/// A request seen by [`MockRpc`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub service: String,
    pub method: String,
    pub data: Vec<u8>,
}

impl RecordedCall {
    /// Decodes the request payload as `M`.
    pub fn decode<M: Message + Default>(&self) -> Result<M> {
        Ok(M::decode(self.data.as_slice())?)
    }
}

/// Canned reply for one method.
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Encoded response message.
    Bytes(Vec<u8>),
    /// Fail with a remote status.
    Remote { code: i32, message: String },
}

#[derive(Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    replies: HashMap<String, MockReply>,
}

/// Mock transport.
///
/// Methods without a configured reply answer with an empty body, which decodes
/// to the response type's default value. Clones share state.
#[derive(Clone, Default)]
pub struct MockRpc {
    state: Arc<Mutex<MockState>>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `method` with `response`.
    pub fn respond<M: Message>(&self, method: &str, response: &M) -> &Self {
        self.lock()
            .replies
            .insert(method.to_string(), MockReply::Bytes(response.encode_to_vec()));
        self
    }

    /// Answer `method` with raw bytes.
    pub fn respond_raw(&self, method: &str, bytes: Vec<u8>) -> &Self {
        self.lock()
            .replies
            .insert(method.to_string(), MockReply::Bytes(bytes));
        self
    }

    /// Fail `method` with a remote error.
    pub fn fail(&self, method: &str, code: i32, message: &str) -> &Self {
        self.lock().replies.insert(
            method.to_string(),
            MockReply::Remote {
                code,
                message: message.to_string(),
            },
        );
        self
    }

    /// All requests received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// The most recent request, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.lock().calls.last().cloned()
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        state.calls.clear();
        state.replies.clear();
    }
}

#[async_trait]
impl Rpc for MockRpc {
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall {
            service: service.to_string(),
            method: method.to_string(),
            data,
        });
        match state.replies.get(method) {
            Some(MockReply::Bytes(bytes)) => Ok(bytes.clone()),
            Some(MockReply::Remote { code, message }) => Err(ArkeoError::Remote {
                status: 500,
                code: *code,
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::arkeo::{Params, QueryParamsResponse};

    #[tokio::test]
    async fn test_records_and_replies() {
        let rpc = MockRpc::new();
        let response = QueryParamsResponse {
            params: Some(Params::chain_defaults()),
        };
        rpc.respond("Params", &response);

        let reply = rpc.request("svc", "Params", vec![1, 2]).await.unwrap();
        assert_eq!(reply, response.encode_to_vec());

        let call = rpc.last_call().unwrap();
        assert_eq!(call.service, "svc");
        assert_eq!(call.data, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_unconfigured_method_returns_empty() {
        let rpc = MockRpc::new();
        assert!(rpc.request("svc", "Other", vec![]).await.unwrap().is_empty());
        assert_eq!(rpc.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_and_reset() {
        let rpc = MockRpc::new();
        rpc.fail("Params", 13, "boom");
        let err = rpc.request("svc", "Params", vec![]).await.unwrap_err();
        assert!(matches!(err, ArkeoError::Remote { code: 13, .. }));

        rpc.reset();
        assert_eq!(rpc.call_count(), 0);
        assert!(rpc.request("svc", "Params", vec![]).await.is_ok());
    }
}
