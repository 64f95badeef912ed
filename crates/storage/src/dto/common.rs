use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of an update or delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Outcome of a create, carrying the id the store assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub msg: String,
    pub id: i32,
}
