use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JsonRpcError;
use crate::types::{JsonRpcVersion, RequestId};

/// A JSON-RPC 2.0 response reporting request success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: impl Into<RequestId>, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: id.into(),
            result,
        }
    }
}

/// A JSON-RPC 2.0 response reporting request failure.
///
/// The `id` is the errornous request id, or `None` when it could not be
/// determined (e.g. the request never parsed). Unlike a notification's
/// absent id, a missing id here serializes as `"id": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: Option<RequestId>,
    pub error: JsonRpcError,
}

impl JsonRpcErrorResponse {
    pub fn new(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            error,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(None, JsonRpcError::parse_error(None))
    }

    pub fn invalid_request(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcError::invalid_request(None))
    }

    pub fn method_not_found(id: impl Into<RequestId>, data: Option<Value>) -> Self {
        Self::new(Some(id.into()), JsonRpcError::method_not_found(data))
    }

    pub fn invalid_params(id: impl Into<RequestId>, data: Option<Value>) -> Self {
        Self::new(Some(id.into()), JsonRpcError::invalid_params(data))
    }

    pub fn internal_error(id: Option<RequestId>, data: Option<Value>) -> Self {
        Self::new(id, JsonRpcError::internal_error(data))
    }
}
