//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use jsonrpc_lite::prelude::*;
//! ```

pub use crate::error::{JsonRpcError, JsonRpcErrorCode, JsonRpcParseError};
pub use crate::message::JsonRpcMessage;
pub use crate::notification::JsonRpcNotification;
pub use crate::parse::{JsonRpcParsed, ParsedType};
pub use crate::request::JsonRpcRequest;
pub use crate::response::{JsonRpcErrorResponse, JsonRpcResponse};
pub use crate::types::{JsonRpcVersion, RequestId};

// Standard error codes
pub use crate::error_codes::*;
