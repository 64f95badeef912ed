//! CRUD flow shared by every resource: normalize the request, run it
//! through the repository, and turn storage outcomes into client messages.

use storage::{
    Database,
    dto::common::{CreatedResponse, MessageResponse},
    error::StorageError,
    repository::{Draft, Repository, Resource},
};

use crate::error::{WebError, WebResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_message<R: Resource>(self) -> String {
        match self {
            Self::List => format!("Failed to fetch {}", R::PLURAL),
            Self::Create => format!("Failed to {} {}", R::CREATE_VERB, R::NOUN),
            Self::Update => format!("Failed to update {}", R::NOUN),
            Self::Delete => format!("Failed to delete {}", R::NOUN),
        }
    }
}

fn created_message<R: Resource>(name: &str) -> String {
    format!("Successfully {} {}: {}", R::CREATED_VERB, R::NOUN, name)
}

fn updated_message<R: Resource>(name: &str) -> String {
    format!("Successfully updated {}: {}", R::NOUN, name)
}

fn deleted_message<R: Resource>() -> String {
    format!("{} deleted successfully", R::TITLE)
}

/// Maps a storage outcome to the response the client sees
pub fn storage_failure<R: Resource>(operation: Operation, error: StorageError) -> WebError {
    let msg = match &error {
        StorageError::NotFound => return WebError::NotFound(format!("{} not found", R::TITLE)),
        StorageError::Duplicate(msg) => return WebError::BadRequest(msg.to_string()),
        StorageError::InvalidReference(msg) => return WebError::BadRequest(msg.clone()),
        StorageError::Lookup { target, .. } => format!("Failed to find {}", target),
        _ => operation.failure_message::<R>(),
    };

    WebError::Storage { msg, source: error }
}

pub async fn list<R: Resource>(db: &Database) -> WebResult<Vec<R::Record>> {
    let records = Repository::<R>::new(db.pool())
        .list()
        .await
        .map_err(|e| storage_failure::<R>(Operation::List, e))?;

    tracing::debug!("Returned {} {}", records.len(), R::PLURAL);

    Ok(records)
}

pub async fn create<R: Resource>(db: &Database, request: R::Request) -> WebResult<CreatedResponse> {
    let draft = R::normalize(request).map_err(|e| WebError::validation(e, R::FIELDS))?;

    let id = Repository::<R>::new(db.pool())
        .create(&draft)
        .await
        .map_err(|e| storage_failure::<R>(Operation::Create, e))?;

    tracing::info!("Created {}: {} with ID {}", R::NOUN, draft.name(), id);

    Ok(CreatedResponse {
        msg: created_message::<R>(draft.name()),
        id,
    })
}

pub async fn update<R: Resource>(
    db: &Database,
    id: i32,
    request: R::Request,
) -> WebResult<MessageResponse> {
    let draft = R::normalize(request).map_err(|e| WebError::validation(e, R::FIELDS))?;

    Repository::<R>::new(db.pool())
        .update(id, &draft)
        .await
        .map_err(|e| storage_failure::<R>(Operation::Update, e))?;

    tracing::info!("Updated {} ID {}", R::NOUN, id);

    Ok(MessageResponse::new(updated_message::<R>(draft.name())))
}

pub async fn delete<R: Resource>(db: &Database, id: i32) -> WebResult<MessageResponse> {
    Repository::<R>::new(db.pool())
        .delete(id)
        .await
        .map_err(|e| storage_failure::<R>(Operation::Delete, e))?;

    tracing::info!("Deleted {} ID {}", R::NOUN, id);

    Ok(MessageResponse::new(deleted_message::<R>()))
}
