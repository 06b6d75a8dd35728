//! Common response bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-record response: errors, and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
