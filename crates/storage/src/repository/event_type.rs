use validator::ValidationErrors;

use super::{Draft, PgQuery, Resource};
use crate::dto::event_type::{EventTypeDraft, EventTypeRequest};
use crate::models::EventType;

pub struct EventTypeResource;

impl Resource for EventTypeResource {
    const TABLE: &'static str = "event_types";
    const NOUN: &'static str = "event type";
    const TITLE: &'static str = "Event type";
    const PLURAL: &'static str = "event types";
    const CREATE_VERB: &'static str = "create";
    const CREATED_VERB: &'static str = "created";
    const FIELDS: &'static [&'static str] = &["name", "description", "max_participants"];
    const DUPLICATE: Option<&'static str> = Some("Event type name already exists");

    const LIST_SQL: &'static str = r#"
        SELECT id, name, description, max_participants, created_at, updated_at
        FROM event_types
        ORDER BY name
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO event_types (name, description, max_participants)
        VALUES ($1, $2, $3)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE event_types
        SET name = $1,
            description = $2,
            max_participants = $3,
            updated_at = now()
        WHERE id = $4
    "#;

    type Request = EventTypeRequest;
    type Draft = EventTypeDraft;
    type Record = EventType;

    fn normalize(request: EventTypeRequest) -> Result<EventTypeDraft, ValidationErrors> {
        request.normalize()
    }
}

impl Draft for EventTypeDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.max_participants)
    }
}
