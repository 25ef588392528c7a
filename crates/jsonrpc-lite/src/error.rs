use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The five reserved JSON-RPC 2.0 error codes.
///
/// Application-defined codes never go through this enum; they are built with
/// [`JsonRpcError::new`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonRpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl JsonRpcErrorCode {
    pub fn code(&self) -> i64 {
        match self {
            JsonRpcErrorCode::ParseError => -32700,
            JsonRpcErrorCode::InvalidRequest => -32600,
            JsonRpcErrorCode::MethodNotFound => -32601,
            JsonRpcErrorCode::InvalidParams => -32602,
            JsonRpcErrorCode::InternalError => -32603,
        }
    }

    /// Canonical message text for the code.
    pub fn message(&self) -> &'static str {
        match self {
            JsonRpcErrorCode::ParseError => "Parse Error",
            JsonRpcErrorCode::InvalidRequest => "Invalid Request",
            JsonRpcErrorCode::MethodNotFound => "Method Not Found",
            JsonRpcErrorCode::InvalidParams => "Invalid Params",
            JsonRpcErrorCode::InternalError => "Internal Error",
        }
    }
}

impl fmt::Display for JsonRpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// JSON-RPC 2.0 Error object.
///
/// A plain data value: it travels inside an error response or inside a
/// [`JsonRpcParseError`], and is never itself used for control flow.
/// `data` is free-form extra detail and is omitted from the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Generic factory. The only way to build an application-defined code.
    pub fn new(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    fn reserved(code: JsonRpcErrorCode, data: Option<Value>) -> Self {
        Self::new(code.code(), code.message(), data)
    }

    /// Code -32700. Invalid JSON was received.
    pub fn parse_error(data: Option<Value>) -> Self {
        Self::reserved(JsonRpcErrorCode::ParseError, data)
    }

    /// Code -32600. The JSON sent is not a valid Request object.
    pub fn invalid_request(data: Option<Value>) -> Self {
        Self::reserved(JsonRpcErrorCode::InvalidRequest, data)
    }

    /// Code -32601. The method does not exist / is not available.
    pub fn method_not_found(data: Option<Value>) -> Self {
        Self::reserved(JsonRpcErrorCode::MethodNotFound, data)
    }

    /// Code -32602. Invalid method parameter(s).
    pub fn invalid_params(data: Option<Value>) -> Self {
        Self::reserved(JsonRpcErrorCode::InvalidParams, data)
    }

    /// Code -32603. Internal JSON-RPC error.
    pub fn internal_error(data: Option<Value>) -> Self {
        Self::reserved(JsonRpcErrorCode::InternalError, data)
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON-RPC error {}: {}", self.code, self.message)
    }
}

/// Failure reported by the parser when a string is not a valid JSON-RPC 2.0
/// message. Always carries exactly one [`JsonRpcError`] describing why.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot parse JSON-RPC 2.0 message: {} ({})", .0.message, .0.code)]
pub struct JsonRpcParseError(pub JsonRpcError);

impl JsonRpcParseError {
    pub fn error(&self) -> &JsonRpcError {
        &self.0
    }

    pub fn into_error(self) -> JsonRpcError {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_codes() {
        assert_eq!(JsonRpcErrorCode::ParseError.code(), -32700);
        assert_eq!(JsonRpcErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(JsonRpcErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(JsonRpcErrorCode::InvalidParams.code(), -32602);
        assert_eq!(JsonRpcErrorCode::InternalError.code(), -32603);
    }

    #[test]
    fn test_named_factories() {
        let err = JsonRpcError::internal_error(Some(json!("Error-data")));
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "Internal Error");
        assert_eq!(err.data, Some(json!("Error-data")));

        let err = JsonRpcError::internal_error(None);
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "Internal Error");
        assert_eq!(err.data, None);
    }

    #[test]
    fn test_generic_factory_keeps_application_code() {
        let err = JsonRpcError::new(-32001, "Err MSG", Some(json!([105, 106])));
        assert_eq!(err.code, -32001);
        assert_eq!(err.message, "Err MSG");
        assert_eq!(err.data, Some(json!([105, 106])));
    }

    #[test]
    fn test_data_omitted_when_absent() {
        let with_data = JsonRpcError::method_not_found(Some(json!("No method called [sum]")));
        let without_data = JsonRpcError::method_not_found(None);

        let json_with = serde_json::to_string(&with_data).unwrap();
        let json_without = serde_json::to_string(&without_data).unwrap();

        assert!(json_with.contains("\"data\""));
        assert!(!json_without.contains("\"data\""));
        assert!(!json_without.contains("null"));
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = JsonRpcParseError(JsonRpcError::parse_error(Some(json!("{oops"))));
        let text = failure.to_string();
        assert!(text.contains("Parse Error"));
        assert!(text.contains("-32700"));
    }
}
