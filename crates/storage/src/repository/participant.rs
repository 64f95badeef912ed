use validator::ValidationErrors;

use super::{Draft, PgQuery, Reference, Resource, Target};
use crate::dto::participant::{ParticipantDraft, ParticipantRequest};
use crate::models::Participant;

pub struct ParticipantResource;

impl Resource for ParticipantResource {
    const TABLE: &'static str = "participants";
    const NOUN: &'static str = "participant";
    const TITLE: &'static str = "Participant";
    const PLURAL: &'static str = "participants";
    const CREATE_VERB: &'static str = "add";
    const CREATED_VERB: &'static str = "added";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "course",
        "category",
        "contact",
        "age",
        "year_level",
        "status",
    ];
    const REFERENCE: Option<Reference> = Some(Reference::optional(Target::Competition));

    const LIST_SQL: &'static str = r#"
        SELECT p.id, p.name, p.course, c.name AS category, p.contact, p.age,
               p.year_level, p.status, p.created_at, p.updated_at
        FROM participants p
        LEFT JOIN competitions c ON p.competition_id = c.id
        ORDER BY p.created_at DESC, p.id DESC
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO participants (name, course, contact, age, year_level, status, competition_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE participants
        SET name = $1,
            course = $2,
            contact = $3,
            age = $4,
            year_level = $5,
            status = $6,
            competition_id = $7,
            updated_at = now()
        WHERE id = $8
    "#;

    type Request = ParticipantRequest;
    type Draft = ParticipantDraft;
    type Record = Participant;

    fn normalize(request: ParticipantRequest) -> Result<ParticipantDraft, ValidationErrors> {
        request.normalize()
    }
}

impl Draft for ParticipantDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_name(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.course)
            .bind(&self.contact)
            .bind(self.age)
            .bind(&self.year_level)
            .bind(&self.status)
    }
}
