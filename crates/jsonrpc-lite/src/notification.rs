use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::JsonRpcVersion;

/// A JSON-RPC 2.0 Notification: a request that expects no response.
///
/// Distinguished from [`JsonRpcRequest`](crate::request::JsonRpcRequest) by
/// the total absence of the `id` field, not by `id: null`. The struct has no
/// id member at all, so a serialized notification can never carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params,
        }
    }

    /// Create a notification with no parameters.
    pub fn new_no_params(method: impl Into<String>) -> Self {
        Self::new(method, None)
    }

    /// Get a named parameter (if `params` is an object).
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_string};

    #[test]
    fn test_notification_serialization() {
        let notification = JsonRpcNotification::new_no_params("alarm");

        let json_str = to_string(&notification).unwrap();
        let parsed: JsonRpcNotification = from_str(&json_str).unwrap();

        assert_eq!(parsed.method, "alarm");
        assert!(parsed.params.is_none());
    }

    #[test]
    fn test_notification_never_carries_id() {
        let notification =
            JsonRpcNotification::new("alarmAdd", Some(json!({"param1": 1, "param2": 2})));
        let json_str = to_string(&notification).unwrap();

        assert!(!json_str.contains("\"id\""));
        assert!(json_str.contains("\"jsonrpc\":\"2.0\""));
        assert!(json_str.contains("\"method\":\"alarmAdd\""));
    }

    #[test]
    fn test_notification_with_params() {
        let notification = JsonRpcNotification::new("log", Some(json!({"level": "info"})));
        assert_eq!(notification.get_param("level"), Some(&json!("info")));
        assert_eq!(notification.get_param("missing"), None);
    }
}
