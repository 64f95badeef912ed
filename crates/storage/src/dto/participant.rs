use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{self, not_blank};

/// Request payload for adding or replacing a participant
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Course is required"),
        custom(function = "not_blank", message = "Course is required")
    )]
    pub course: Option<String>,

    /// Name of the competition the participant is entered in
    pub category: Option<String>,

    pub contact: Option<String>,

    pub age: Option<i32>,

    pub year_level: Option<String>,

    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantDraft {
    pub name: String,
    pub course: String,
    pub category: Option<String>,
    pub contact: Option<String>,
    pub age: Option<i32>,
    pub year_level: Option<String>,
    pub status: String,
}

impl ParticipantRequest {
    pub fn normalize(self) -> Result<ParticipantDraft, ValidationErrors> {
        self.validate()?;

        Ok(ParticipantDraft {
            name: validation::required(self.name),
            course: validation::required(self.course),
            category: validation::optional(self.category),
            contact: validation::optional(self.contact),
            age: self.age,
            year_level: validation::optional(self.year_level),
            status: validation::status(self.status),
        })
    }
}
