//! Response body types shared by API handlers.
//!
//! Catalog endpoints return bare records and arrays; only deletion wraps its
//! payload.

use serde::Serialize;

/// Body of a successful delete: a confirmation message plus the removed record.
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T: Serialize> {
    pub message: &'static str,
    pub drama: T,
}
