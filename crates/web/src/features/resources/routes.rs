use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{competitions, criteria, event_types, judges, participants};

macro_rules! crud {
    ($handlers:ident) => {
        Router::new()
            .route("/", get($handlers::list).post($handlers::create))
            .route("/:id", put($handlers::update).delete($handlers::delete))
    };
}

/// CRUD routes for every resource, relative to `/api`
pub fn routes() -> Router<Database> {
    Router::new()
        .nest("/event-types", crud!(event_types))
        .nest("/competitions", crud!(competitions))
        .nest("/judges", crud!(judges))
        .nest("/participants", crud!(participants))
        .nest("/criteria", crud!(criteria))
}
