//! Generic API envelope types.

use serde::{Deserialize, Serialize};

/// Error body returned by every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Simple acknowledgement body for operations with nothing to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Pagination parameters shared by listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// One page of results together with the total count.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}
