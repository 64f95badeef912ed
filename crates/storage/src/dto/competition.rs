use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{self, calendar_date, not_blank};

/// Request payload for creating or replacing a competition
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompetitionRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Description is required"),
        custom(function = "not_blank", message = "Description is required")
    )]
    pub description: Option<String>,

    /// `YYYY-MM-DD`; empty means no date
    #[validate(custom(
        function = "calendar_date",
        message = "Date must be in YYYY-MM-DD format"
    ))]
    pub date: Option<String>,

    /// Name of the event type this competition belongs to
    pub event_type: Option<String>,
}

/// Validated competition, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionDraft {
    pub name: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub event_type: Option<String>,
}

impl CompetitionRequest {
    pub fn normalize(self) -> Result<CompetitionDraft, ValidationErrors> {
        self.validate()?;

        Ok(CompetitionDraft {
            name: validation::required(self.name),
            description: validation::required(self.description),
            date: validation::date(self.date),
            event_type: validation::optional(self.event_type),
        })
    }
}
