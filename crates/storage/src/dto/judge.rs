use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{self, not_blank};

/// Request payload for adding or replacing a judge
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct JudgeRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        custom(function = "not_blank", message = "Email is required")
    )]
    pub email: Option<String>,

    pub expertise: Option<String>,

    pub phone: Option<String>,

    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JudgeDraft {
    pub name: String,
    pub email: String,
    pub expertise: Option<String>,
    pub phone: Option<String>,
    pub status: String,
}

impl JudgeRequest {
    pub fn normalize(self) -> Result<JudgeDraft, ValidationErrors> {
        self.validate()?;

        Ok(JudgeDraft {
            name: validation::required(self.name),
            email: validation::required(self.email),
            expertise: validation::optional(self.expertise),
            phone: validation::optional(self.phone),
            status: validation::status(self.status),
        })
    }
}
