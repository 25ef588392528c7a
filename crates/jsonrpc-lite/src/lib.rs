//! # JSON-RPC 2.0 message parsing and serialization
//!
//! A pure, transport-agnostic implementation of the JSON-RPC 2.0 message
//! layer: typed Request / Notification / Success / Error values, a single
//! parse-and-classify entry point, and canonical wire serialization with
//! lexicographic key ordering.
//!
//! ## Features
//! - Strict classification of arbitrary JSON into the four message kinds
//! - Typed parse failures carrying a spec-compliant Error object
//! - True field omission: a notification never serializes an `id`, absent
//!   `params` and `data` never appear as `null`
//! - No transport, no batching, no dispatch: parsing is a pure function
//!
//! ```rust
//! use jsonrpc_lite::prelude::*;
//!
//! let parsed = JsonRpcParsed::parse(r#"{"jsonrpc":"2.0","result":3,"id":521}"#).unwrap();
//! assert_eq!(parsed.kind(), ParsedType::Success);
//! ```

pub mod error;
pub mod message;
pub mod notification;
pub mod parse;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcParseError};
pub use message::JsonRpcMessage;
pub use notification::JsonRpcNotification;
pub use parse::{JsonRpcParsed, ParsedType};
pub use request::JsonRpcRequest;
pub use response::{JsonRpcErrorResponse, JsonRpcResponse};
pub use types::{InvalidIdError, JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
