use validator::ValidationErrors;

use super::{Draft, PgQuery, Reference, Resource, Target};
use crate::dto::competition::{CompetitionDraft, CompetitionRequest};
use crate::models::Competition;

pub struct CompetitionResource;

impl Resource for CompetitionResource {
    const TABLE: &'static str = "competitions";
    const NOUN: &'static str = "competition";
    const TITLE: &'static str = "Competition";
    const PLURAL: &'static str = "competitions";
    const CREATE_VERB: &'static str = "create";
    const CREATED_VERB: &'static str = "created";
    const FIELDS: &'static [&'static str] = &["name", "description", "date", "event_type"];
    const REFERENCE: Option<Reference> = Some(Reference::optional(Target::EventType));

    const LIST_SQL: &'static str = r#"
        SELECT c.id, c.name, c.description, c.date, et.name AS event_type,
               c.status, c.created_at, c.updated_at
        FROM competitions c
        LEFT JOIN event_types et ON c.event_type_id = et.id
        ORDER BY c.created_at DESC, c.id DESC
    "#;

    // Status is not client-settable; new competitions start out active and
    // updates leave it alone.
    const INSERT_SQL: &'static str = r#"
        INSERT INTO competitions (name, description, date, event_type_id, status)
        VALUES ($1, $2, $3, $4, 'active')
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE competitions
        SET name = $1,
            description = $2,
            date = $3,
            event_type_id = $4,
            updated_at = now()
        WHERE id = $5
    "#;

    type Request = CompetitionRequest;
    type Draft = CompetitionDraft;
    type Record = Competition;

    fn normalize(request: CompetitionRequest) -> Result<CompetitionDraft, ValidationErrors> {
        request.normalize()
    }
}

impl Draft for CompetitionDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_name(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.date)
    }
}
