use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

use crate::error::JsonRpcError;
use crate::notification::JsonRpcNotification;
use crate::request::JsonRpcRequest;
use crate::response::{JsonRpcErrorResponse, JsonRpcResponse};
use crate::types::RequestId;

/// Union over the four JSON-RPC 2.0 message kinds.
///
/// Keeping the kinds in one sum type (rather than a subtype chain) preserves
/// the absent-field semantics: a [`JsonRpcNotification`] physically has no
/// `id` member, so it can never serialize one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcMessage {
    pub fn request(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Option<Value>,
    ) -> Self {
        Self::Request(JsonRpcRequest::new(id, method, params))
    }

    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self::Notification(JsonRpcNotification::new(method, params))
    }

    pub fn success(id: impl Into<RequestId>, result: Value) -> Self {
        Self::Success(JsonRpcResponse::new(id, result))
    }

    pub fn error(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self::Error(JsonRpcErrorResponse::new(id, error))
    }

    /// The request id carried by this message, if it has one.
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Request(req) => Some(&req.id),
            JsonRpcMessage::Notification(_) => None,
            JsonRpcMessage::Success(resp) => Some(&resp.id),
            JsonRpcMessage::Error(resp) => resp.id.as_ref(),
        }
    }

    /// Render to compact wire form: object keys in lexicographic order,
    /// `,` between members and `: ` between key and value. Absent optional
    /// fields are omitted, not emitted as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        // Going through Value sorts the keys: serde_json's Map is backed by
        // a BTreeMap unless the preserve_order feature is enabled.
        let value = serde_json::to_value(self)?;
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedValueFormatter);
        value.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde::ser::Error::custom)
    }

    /// Render with two-space indentation; same key ordering and separators.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let value = serde_json::to_value(self)?;
        serde_json::to_string_pretty(&value)
    }
}

impl From<JsonRpcRequest> for JsonRpcMessage {
    fn from(request: JsonRpcRequest) -> Self {
        Self::Request(request)
    }
}

impl From<JsonRpcNotification> for JsonRpcMessage {
    fn from(notification: JsonRpcNotification) -> Self {
        Self::Notification(notification)
    }
}

impl From<JsonRpcResponse> for JsonRpcMessage {
    fn from(response: JsonRpcResponse) -> Self {
        Self::Success(response)
    }
}

impl From<JsonRpcErrorResponse> for JsonRpcMessage {
    fn from(response: JsonRpcErrorResponse) -> Self {
        Self::Error(response)
    }
}

/// Compact formatter with a space after the key separator, matching the
/// fixed `(",", ": ")` wire style.
struct SpacedValueFormatter;

impl Formatter for SpacedValueFormatter {
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_are_sorted() {
        let msg = JsonRpcMessage::request(1, "login", Some(json!(["user", "password"])));
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"id": 1,"jsonrpc": "2.0","method": "login","params": ["user","password"]}"#
        );
    }

    #[test]
    fn test_request_without_params_omits_key() {
        let msg = JsonRpcMessage::request(1, "login", None);
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"id": 1,"jsonrpc": "2.0","method": "login"}"#
        );
    }

    #[test]
    fn test_notification_omits_id_key() {
        let msg = JsonRpcMessage::notification("alarm", Some(json!(["a", "b"])));
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"jsonrpc": "2.0","method": "alarm","params": ["a","b"]}"#
        );
    }

    #[test]
    fn test_error_keys_sorted_inside_nested_object() {
        let msg = JsonRpcMessage::error(
            Some(RequestId::Number(5)),
            JsonRpcError::new(-32000, "Server Error", Some(json!("detail"))),
        );
        let text = msg.to_json().unwrap();
        // code < data < message lexicographically.
        assert_eq!(
            text,
            r#"{"error": {"code": -32000,"data": "detail","message": "Server Error"},"id": 5,"jsonrpc": "2.0"}"#
        );
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let msg = JsonRpcMessage::success(1, json!(3));
        let text = msg.to_json_pretty().unwrap();
        assert!(text.contains("\n  \"id\": 1"));
        assert!(text.contains("\"result\": 3"));
    }

    #[test]
    fn test_message_id_accessor() {
        assert_eq!(
            JsonRpcMessage::request(7, "m", None).id(),
            Some(&RequestId::Number(7))
        );
        assert_eq!(JsonRpcMessage::notification("m", None).id(), None);
        assert_eq!(
            JsonRpcMessage::error(None, JsonRpcError::parse_error(None)).id(),
            None
        );
    }
}
