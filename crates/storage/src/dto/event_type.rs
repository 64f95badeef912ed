use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{self, not_blank};

pub const DEFAULT_MAX_PARTICIPANTS: i32 = 50;

/// Request payload for creating or replacing an event type
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EventTypeRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    pub max_participants: Option<i32>,
}

/// Validated event type, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct EventTypeDraft {
    pub name: String,
    pub description: Option<String>,
    pub max_participants: i32,
}

impl EventTypeRequest {
    pub fn normalize(self) -> Result<EventTypeDraft, ValidationErrors> {
        self.validate()?;

        Ok(EventTypeDraft {
            name: validation::required(self.name),
            description: validation::optional(self.description),
            max_participants: self.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS),
        })
    }
}
