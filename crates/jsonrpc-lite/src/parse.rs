use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::JSONRPC_VERSION;
use crate::error::{JsonRpcError, JsonRpcParseError};
use crate::message::JsonRpcMessage;
use crate::notification::JsonRpcNotification;
use crate::request::JsonRpcRequest;
use crate::response::{JsonRpcErrorResponse, JsonRpcResponse};
use crate::types::RequestId;

/// Classification tag attached to a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedType {
    Request,
    Notification,
    Success,
    Error,
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParsedType::Request => "REQUEST",
            ParsedType::Notification => "NOTIFICATION",
            ParsedType::Success => "SUCCESS",
            ParsedType::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// A successfully classified JSON-RPC 2.0 message: the classification tag
/// plus the typed payload for that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonRpcParsed {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcParsed {
    /// Parse and classify a JSON-RPC 2.0 message.
    ///
    /// The input is decoded as generic JSON, the header is validated, and
    /// the object is classified as a request, notification, success response
    /// or error response. Validation aborts at the first failure with the
    /// single most specific [`JsonRpcParseError`]; there is no partial
    /// success. Parsing is a pure function of the input string.
    pub fn parse(raw: &str) -> Result<Self, JsonRpcParseError> {
        match Self::classify(raw) {
            Ok(parsed) => {
                debug!(kind = %parsed.kind(), "parsed JSON-RPC message");
                Ok(parsed)
            }
            Err(failure) => {
                debug!(code = failure.error().code, "rejected JSON-RPC message");
                Err(failure)
            }
        }
    }

    fn classify(raw: &str) -> Result<Self, JsonRpcParseError> {
        let value: Value = serde_json::from_str(raw).map_err(|_| {
            JsonRpcParseError(JsonRpcError::parse_error(Some(Value::String(
                raw.to_string(),
            ))))
        })?;

        // Anything that is not an object cannot carry the header field.
        let obj = value
            .as_object()
            .ok_or_else(|| invalid_request("Message have no \"jsonrpc\" field"))?;
        validate_header(obj)?;

        let Some(raw_id) = valid_id(obj) else {
            // No usable id: the object is a notification or nothing at all.
            return Self::classify_notification(obj);
        };

        if method_value(obj).is_some() {
            return Self::classify_request(raw_id, obj);
        }
        if let Some(result) = obj.get("result") {
            let id = convert_id(raw_id)?;
            return Ok(JsonRpcParsed::Success(JsonRpcResponse::new(
                id,
                result.clone(),
            )));
        }
        if let Some(error) = obj.get("error") {
            let id = convert_id(raw_id)?;
            return Self::classify_error_response(id, error);
        }
        // No method, no result, no error: an id-only object.
        Err(invalid_request("No reqired fields"))
    }

    fn classify_notification(obj: &Map<String, Value>) -> Result<Self, JsonRpcParseError> {
        let method = require_method(obj)?;
        let params = optional_field(obj, "params");
        Ok(JsonRpcParsed::Notification(JsonRpcNotification::new(
            method, params,
        )))
    }

    fn classify_request(raw_id: &Value, obj: &Map<String, Value>) -> Result<Self, JsonRpcParseError> {
        let id = convert_id(raw_id)?;
        let method = require_method(obj)?;
        let params = optional_field(obj, "params");
        Ok(JsonRpcParsed::Request(JsonRpcRequest::new(
            id, method, params,
        )))
    }

    fn classify_error_response(id: RequestId, error: &Value) -> Result<Self, JsonRpcParseError> {
        let err = validate_error_object(error)?;
        Ok(JsonRpcParsed::Error(JsonRpcErrorResponse::new(
            Some(id),
            err,
        )))
    }

    /// The classification tag for this result.
    pub fn kind(&self) -> ParsedType {
        match self {
            JsonRpcParsed::Request(_) => ParsedType::Request,
            JsonRpcParsed::Notification(_) => ParsedType::Notification,
            JsonRpcParsed::Success(_) => ParsedType::Success,
            JsonRpcParsed::Error(_) => ParsedType::Error,
        }
    }

    /// Convert into the serializable message union.
    pub fn into_message(self) -> JsonRpcMessage {
        match self {
            JsonRpcParsed::Request(req) => JsonRpcMessage::Request(req),
            JsonRpcParsed::Notification(ntf) => JsonRpcMessage::Notification(ntf),
            JsonRpcParsed::Success(resp) => JsonRpcMessage::Success(resp),
            JsonRpcParsed::Error(resp) => JsonRpcMessage::Error(resp),
        }
    }
}

fn invalid_request(detail: &str) -> JsonRpcParseError {
    JsonRpcParseError(JsonRpcError::invalid_request(Some(Value::String(
        detail.to_string(),
    ))))
}

fn invalid_params(detail: &str) -> JsonRpcParseError {
    JsonRpcParseError(JsonRpcError::invalid_params(Some(Value::String(
        detail.to_string(),
    ))))
}

fn validate_header(obj: &Map<String, Value>) -> Result<(), JsonRpcParseError> {
    match obj.get("jsonrpc") {
        None => Err(invalid_request("Message have no \"jsonrpc\" field")),
        Some(version) if version == JSONRPC_VERSION => Ok(()),
        Some(_) => Err(invalid_request("\"jsonrpc\" field value should be 2.0")),
    }
}

/// The object's id, if it is usable: present, not null, not the empty
/// string. Any other value counts, including `0` and `false`.
fn valid_id(obj: &Map<String, Value>) -> Option<&Value> {
    match obj.get("id") {
        Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        other => other,
    }
}

fn convert_id(raw_id: &Value) -> Result<RequestId, JsonRpcParseError> {
    RequestId::try_from(raw_id).map_err(|e| {
        JsonRpcParseError(JsonRpcError::internal_error(Some(Value::String(
            e.to_string(),
        ))))
    })
}

/// The `method` value, if present and valid: a non-empty string.
fn method_value(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("method")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

fn require_method(obj: &Map<String, Value>) -> Result<&str, JsonRpcParseError> {
    if !obj.contains_key("method") {
        return Err(invalid_request("No \"method\" field"));
    }
    method_value(obj).ok_or_else(|| invalid_request("Invalid \"method\" field value"))
}

/// An optional member: an explicitly null value collapses to absent, so it
/// is dropped on re-serialization rather than written back as `null`.
fn optional_field(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

fn validate_error_object(error: &Value) -> Result<JsonRpcError, JsonRpcParseError> {
    let err = error
        .as_object()
        .ok_or_else(|| invalid_params("Invalid JSON-RPC 2.0 Error object structure"))?;
    let (Some(code), Some(message)) = (err.get("code"), err.get("message")) else {
        return Err(invalid_params("Invalid JSON-RPC 2.0 Error object structure"));
    };
    let message = message
        .as_str()
        .ok_or_else(|| invalid_params("Invalid JSON-RPC 2.0 Error object structure"))?;
    let code = code
        .as_i64()
        .filter(|c| is_reserved_code(*c))
        .ok_or_else(|| invalid_params("Invalid JSON-RPC 2.0 Error code"))?;
    let data = optional_field(err, "data");
    Ok(JsonRpcError::new(code, message, data))
}

/// Codes an incoming Error object may carry: -32700, the -32603..=-32600
/// band and the server-error band -32099..=-32000. The bounds are half-open
/// on purpose; -32599 and -31999 themselves are already outside.
fn is_reserved_code(code: i64) -> bool {
    code == crate::error_codes::PARSE_ERROR
        || (-32603..-32599).contains(&code)
        || (-32099..-31999).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_id_rules() {
        let obj = |v: Value| {
            let mut m = Map::new();
            m.insert("id".to_string(), v);
            m
        };

        assert!(valid_id(&Map::new()).is_none());
        assert!(valid_id(&obj(Value::Null)).is_none());
        assert!(valid_id(&obj(json!(""))).is_none());

        assert!(valid_id(&obj(json!(0))).is_some());
        assert!(valid_id(&obj(json!(false))).is_some());
        assert!(valid_id(&obj(json!("x"))).is_some());
    }

    #[test]
    fn test_reserved_code_bands() {
        assert!(is_reserved_code(-32700));
        assert!(is_reserved_code(-32603));
        assert!(is_reserved_code(-32602));
        assert!(is_reserved_code(-32601));
        assert!(is_reserved_code(-32600));
        assert!(is_reserved_code(-32099));
        assert!(is_reserved_code(-32001));
        assert!(is_reserved_code(-32000));

        assert!(!is_reserved_code(-32800));
        assert!(!is_reserved_code(-32604));
        assert!(!is_reserved_code(-32599));
        assert!(!is_reserved_code(-32100));
        assert!(!is_reserved_code(-31999));
        assert!(!is_reserved_code(-31199));
        assert!(!is_reserved_code(0));
    }

    #[test]
    fn test_explicit_null_params_collapse_to_absent() {
        let parsed =
            JsonRpcParsed::parse(r#"{"jsonrpc":"2.0","method":"ping","params":null}"#).unwrap();
        let JsonRpcParsed::Notification(ntf) = parsed else {
            panic!("expected notification");
        };
        assert!(ntf.params.is_none());
    }

    #[test]
    fn test_untypeable_id_is_internal_error() {
        // `false` passes the id validity check but has no typed
        // representation, so classification aborts with Internal Error.
        let failure =
            JsonRpcParsed::parse(r#"{"jsonrpc":"2.0","method":"m","id":false}"#).unwrap_err();
        assert_eq!(failure.error().code, -32603);
        assert_eq!(failure.error().message, "Internal Error");
    }

    #[test]
    fn test_kind_tags() {
        let parsed = JsonRpcParsed::parse(r#"{"jsonrpc":"2.0","method":"m","id":1}"#).unwrap();
        assert_eq!(parsed.kind(), ParsedType::Request);
        assert_eq!(parsed.kind().to_string(), "REQUEST");

        let parsed = JsonRpcParsed::parse(r#"{"jsonrpc":"2.0","method":"m"}"#).unwrap();
        assert_eq!(parsed.kind(), ParsedType::Notification);
    }
}
