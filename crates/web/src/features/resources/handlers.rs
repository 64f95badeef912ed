//! HTTP handlers, one module per resource.
//!
//! The handlers are thin wrappers over the generic services; they exist per
//! resource so each route carries its own OpenAPI description.

use axum::{Json, extract::State};
use storage::{
    Database,
    dto::{
        common::{CreatedResponse, MessageResponse},
        competition::CompetitionRequest,
        criteria::CriteriaRequest,
        event_type::EventTypeRequest,
        judge::JudgeRequest,
        participant::ParticipantRequest,
    },
    models::{Competition, Criteria, EventType, Judge, Participant},
    repository::{
        CompetitionResource, CriteriaResource, EventTypeResource, JudgeResource,
        ParticipantResource,
    },
};

use crate::error::WebResult;
use crate::extract::{JsonBody, RowId};

use super::services;

macro_rules! resource_handlers {
    (
        $module:ident,
        resource = $resource:ident,
        request = $request:ident,
        record = $record:ident,
        collection = $collection:tt,
        item = $item:tt,
        tag = $tag:tt
    ) => {
        pub mod $module {
            use super::*;

            #[utoipa::path(
                get,
                path = $collection,
                responses(
                    (status = 200, description = "All rows with reference names joined in", body = Vec<$record>),
                    (status = 500, description = "Store failure")
                ),
                tag = $tag
            )]
            pub async fn list(State(db): State<Database>) -> WebResult<Json<Vec<$record>>> {
                let records = services::list::<$resource>(&db).await?;

                Ok(Json(records))
            }

            #[utoipa::path(
                post,
                path = $collection,
                request_body = $request,
                responses(
                    (status = 200, description = "Row created", body = CreatedResponse),
                    (status = 400, description = "Validation error or duplicate value"),
                    (status = 500, description = "Store failure")
                ),
                tag = $tag
            )]
            pub async fn create(
                State(db): State<Database>,
                JsonBody(request): JsonBody<$request>,
            ) -> WebResult<Json<CreatedResponse>> {
                let created = services::create::<$resource>(&db, request).await?;

                Ok(Json(created))
            }

            #[utoipa::path(
                put,
                path = $item,
                params(
                    ("id" = i32, Path, description = "Row id")
                ),
                request_body = $request,
                responses(
                    (status = 200, description = "Row updated", body = MessageResponse),
                    (status = 400, description = "Validation error or duplicate value"),
                    (status = 404, description = "No row with this id"),
                    (status = 500, description = "Store failure")
                ),
                tag = $tag
            )]
            pub async fn update(
                State(db): State<Database>,
                RowId(id): RowId,
                JsonBody(request): JsonBody<$request>,
            ) -> WebResult<Json<MessageResponse>> {
                let updated = services::update::<$resource>(&db, id, request).await?;

                Ok(Json(updated))
            }

            #[utoipa::path(
                delete,
                path = $item,
                params(
                    ("id" = i32, Path, description = "Row id")
                ),
                responses(
                    (status = 200, description = "Row deleted", body = MessageResponse),
                    (status = 404, description = "No row with this id"),
                    (status = 500, description = "Store failure")
                ),
                tag = $tag
            )]
            pub async fn delete(
                State(db): State<Database>,
                RowId(id): RowId,
            ) -> WebResult<Json<MessageResponse>> {
                let deleted = services::delete::<$resource>(&db, id).await?;

                Ok(Json(deleted))
            }
        }
    };
}

resource_handlers!(
    event_types,
    resource = EventTypeResource,
    request = EventTypeRequest,
    record = EventType,
    collection = "/api/event-types",
    item = "/api/event-types/{id}",
    tag = "event-types"
);

resource_handlers!(
    competitions,
    resource = CompetitionResource,
    request = CompetitionRequest,
    record = Competition,
    collection = "/api/competitions",
    item = "/api/competitions/{id}",
    tag = "competitions"
);

resource_handlers!(
    judges,
    resource = JudgeResource,
    request = JudgeRequest,
    record = Judge,
    collection = "/api/judges",
    item = "/api/judges/{id}",
    tag = "judges"
);

resource_handlers!(
    participants,
    resource = ParticipantResource,
    request = ParticipantRequest,
    record = Participant,
    collection = "/api/participants",
    item = "/api/participants/{id}",
    tag = "participants"
);

resource_handlers!(
    criteria,
    resource = CriteriaResource,
    request = CriteriaRequest,
    record = Criteria,
    collection = "/api/criteria",
    item = "/api/criteria/{id}",
    tag = "criteria"
);
