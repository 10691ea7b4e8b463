//! Wire types for the SwagUp API.
//!
//! Requests serialize to the API's camelCase JSON convention; responses
//! deserialize from the `data` object of the standard envelope into
//! snake_case Rust records.  Every type here is a transient, call-scoped
//! value object; nothing is cached between calls.

pub mod design;
pub mod image;
pub mod order;
pub mod payment;

use serde::{Deserialize, Serialize};

/// The `{status, message, data}` wrapper every SwagUp response uses.
///
/// Only `data` carries operation-specific fields.  `status` and `message`
/// are informational and some endpoints omit them, so both are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}
