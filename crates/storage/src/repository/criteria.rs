use validator::ValidationErrors;

use super::{Draft, PgQuery, Reference, Resource, Target};
use crate::dto::criteria::{CriteriaDraft, CriteriaRequest};
use crate::models::Criteria;

pub struct CriteriaResource;

impl Resource for CriteriaResource {
    const TABLE: &'static str = "criteria";
    const NOUN: &'static str = "criteria";
    const TITLE: &'static str = "Criteria";
    const PLURAL: &'static str = "criteria";
    const CREATE_VERB: &'static str = "create";
    const CREATED_VERB: &'static str = "created";
    const FIELDS: &'static [&'static str] = &["name", "description", "max_score", "weight", "competition"];
    const REFERENCE: Option<Reference> = Some(Reference::required(Target::Competition));

    const LIST_SQL: &'static str = r#"
        SELECT cr.id, cr.name, cr.description, cr.max_score, cr.weight,
               c.name AS competition, cr.created_at, cr.updated_at
        FROM criteria cr
        LEFT JOIN competitions c ON cr.competition_id = c.id
        ORDER BY cr.created_at DESC, cr.id DESC
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO criteria (name, description, max_score, weight, competition_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE criteria
        SET name = $1,
            description = $2,
            max_score = $3,
            weight = $4,
            competition_id = $5,
            updated_at = now()
        WHERE id = $6
    "#;

    type Request = CriteriaRequest;
    type Draft = CriteriaDraft;
    type Record = Criteria;

    fn normalize(request: CriteriaRequest) -> Result<CriteriaDraft, ValidationErrors> {
        request.normalize()
    }
}

impl Draft for CriteriaDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_name(&self) -> Option<&str> {
        Some(&self.competition)
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.max_score)
            .bind(self.weight)
    }
}
