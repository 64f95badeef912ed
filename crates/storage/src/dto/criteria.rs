use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::validation::{self, not_blank};

pub const DEFAULT_MAX_SCORE: i32 = 100;

/// 1.00
pub const DEFAULT_WEIGHT: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// 999.99, the largest value a `NUMERIC(5, 2)` column holds
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// Checks the weight as it will be stored, i.e. after rounding to two places.
fn weight_in_range(weight: &Decimal) -> Result<(), ValidationError> {
    let stored = weight.round_dp(2);
    if stored < Decimal::ZERO || stored > MAX_WEIGHT {
        return Err(ValidationError::new("range"));
    }
    Ok(())
}

/// Request payload for creating or replacing a scoring criterion
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CriteriaRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Max score must be between 1 and 100"))]
    pub max_score: Option<i32>,

    #[validate(custom(
        function = "weight_in_range",
        message = "Weight must be between 0 and 999.99"
    ))]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,

    /// Name of the competition this criterion scores; must exist
    #[validate(
        required(message = "Competition is required"),
        custom(function = "not_blank", message = "Competition is required")
    )]
    pub competition: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaDraft {
    pub name: String,
    pub description: Option<String>,
    pub max_score: i32,
    pub weight: Decimal,
    pub competition: String,
}

impl CriteriaRequest {
    pub fn normalize(self) -> Result<CriteriaDraft, ValidationErrors> {
        self.validate()?;

        Ok(CriteriaDraft {
            name: validation::required(self.name),
            description: validation::optional(self.description),
            max_score: self.max_score.unwrap_or(DEFAULT_MAX_SCORE),
            // The column keeps two decimal places.
            weight: self.weight.unwrap_or(DEFAULT_WEIGHT).round_dp(2),
            competition: validation::required(self.competition),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_score(max_score: Option<i32>) -> CriteriaRequest {
        CriteriaRequest {
            name: Some("Creativity".into()),
            competition: Some("Regional Finals".into()),
            max_score,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_score_and_weight() {
        let draft = with_score(None).normalize().unwrap();

        assert_eq!(draft.max_score, 100);
        assert_eq!(draft.weight, Decimal::new(100, 2));
        assert_eq!(draft.weight.to_string(), "1.00");
        assert_eq!(draft.competition, "Regional Finals");
    }

    #[test]
    fn max_score_bounds() {
        assert!(with_score(Some(1)).normalize().is_ok());
        assert!(with_score(Some(100)).normalize().is_ok());

        for rejected in [0, 101, -5] {
            let errors = with_score(Some(rejected)).normalize().unwrap_err();
            let fields = errors.field_errors();
            let message = fields["max_score"][0].message.as_deref();
            assert_eq!(message, Some("Max score must be between 1 and 100"));
        }
    }

    #[test]
    fn competition_is_required() {
        for competition in [None, Some("   ".into())] {
            let errors = CriteriaRequest {
                name: Some("Creativity".into()),
                competition,
                ..Default::default()
            }
            .normalize()
            .unwrap_err();

            assert!(errors.field_errors().contains_key("competition"));
        }
    }

    #[test]
    fn weight_is_kept_to_two_places() {
        let draft = CriteriaRequest {
            weight: Some(Decimal::new(12_345, 4)),
            ..with_score(Some(50))
        }
        .normalize()
        .unwrap();

        assert_eq!(draft.weight, Decimal::new(123, 2));
    }

    #[test]
    fn weight_must_fit_the_column() {
        let with_weight = |weight: Decimal| CriteriaRequest {
            weight: Some(weight),
            ..with_score(None)
        };

        for accepted in [Decimal::ZERO, Decimal::new(99_999, 2), Decimal::new(999_994, 3)] {
            assert!(with_weight(accepted).normalize().is_ok(), "{accepted}");
        }

        for rejected in [
            Decimal::new(1000, 0),
            Decimal::new(999_995, 3),
            Decimal::new(-1, 2),
        ] {
            let errors = with_weight(rejected).normalize().unwrap_err();
            let fields = errors.field_errors();
            let message = fields["weight"][0].message.as_deref();
            assert_eq!(message, Some("Weight must be between 0 and 999.99"), "{rejected}");
        }
    }
}
