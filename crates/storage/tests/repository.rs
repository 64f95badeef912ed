//! Repository behaviour against a real PostgreSQL.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p storage -- --ignored

use std::sync::atomic::{AtomicU32, Ordering};

use rust_decimal::Decimal;
use storage::Database;
use storage::dto::competition::CompetitionRequest;
use storage::dto::criteria::CriteriaRequest;
use storage::dto::event_type::EventTypeRequest;
use storage::dto::judge::JudgeRequest;
use storage::dto::participant::ParticipantRequest;
use storage::error::StorageError;
use storage::repository::{
    CompetitionResource, CriteriaResource, EventTypeResource, JudgeResource, ParticipantResource,
    Repository,
};

async fn database() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let db = Database::new(&url).await.expect("connect");
    db.run_migrations().await.expect("migrations");
    db
}

/// Names that will not collide with rows left by other runs.
fn unique(prefix: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!(
        "{prefix} {nanos}-{}",
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

async fn create_competition(db: &Database, name: &str) -> i32 {
    let draft = CompetitionRequest {
        name: Some(name.to_string()),
        description: Some("test competition".into()),
        ..Default::default()
    }
    .normalize()
    .unwrap();

    Repository::<CompetitionResource>::new(db.pool())
        .create(&draft)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn judge_email_is_unique() {
    let db = database().await;
    let repo = Repository::<JudgeResource>::new(db.pool());
    let email = format!("{}@x.com", unique("ann").replace(' ', "."));

    let draft = JudgeRequest {
        name: Some("Ann Lee".into()),
        email: Some(email.clone()),
        ..Default::default()
    }
    .normalize()
    .unwrap();

    let id = repo.create(&draft).await.unwrap();

    let err = repo.create(&draft).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate("Email address already exists")));

    let judges = repo.list().await.unwrap();
    assert_eq!(judges.iter().filter(|j| j.email == email).count(), 1);

    let judge = judges.iter().find(|j| j.id == id).unwrap();
    assert_eq!(judge.name, "Ann Lee");
    assert_eq!(judge.status, "active");
    assert!(judge.updated_at.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn event_type_name_is_unique_after_trim() {
    let db = database().await;
    let repo = Repository::<EventTypeResource>::new(db.pool());
    let name = unique("Quiz Bee");

    let first = EventTypeRequest {
        name: Some(name.clone()),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    repo.create(&first).await.unwrap();

    let padded = EventTypeRequest {
        name: Some(format!("  {name}  ")),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    let err = repo.create(&padded).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate("Event type name already exists")));

    let rows = repo.list().await.unwrap();
    let matching: Vec<_> = rows.iter().filter(|e| e.name == name).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].max_participants, 50);
}

#[tokio::test]
#[ignore = "requires database"]
async fn competition_resolves_event_type_by_name() {
    let db = database().await;
    let event_type = unique("Hackathon");
    Repository::<EventTypeResource>::new(db.pool())
        .create(
            &EventTypeRequest {
                name: Some(event_type.clone()),
                ..Default::default()
            }
            .normalize()
            .unwrap(),
        )
        .await
        .unwrap();

    let repo = Repository::<CompetitionResource>::new(db.pool());
    let draft = CompetitionRequest {
        name: Some(unique("Code Sprint")),
        description: Some("24 hours".into()),
        date: Some("2025-11-02".into()),
        event_type: Some(event_type.clone()),
    }
    .normalize()
    .unwrap();
    let id = repo.create(&draft).await.unwrap();

    let competitions = repo.list().await.unwrap();
    let competition = competitions.iter().find(|c| c.id == id).unwrap();
    assert_eq!(competition.event_type.as_deref(), Some(event_type.as_str()));
    assert_eq!(competition.status, "active");
    assert_eq!(competition.date, chrono::NaiveDate::from_ymd_opt(2025, 11, 2));
}

#[tokio::test]
#[ignore = "requires database"]
async fn participant_with_unknown_competition_gets_null_reference() {
    let db = database().await;
    let repo = Repository::<ParticipantResource>::new(db.pool());

    let draft = ParticipantRequest {
        name: Some("Maria Santos".into()),
        course: Some("BSCS".into()),
        category: Some(unique("No Such Competition")),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    let id = repo.create(&draft).await.unwrap();

    let participants = repo.list().await.unwrap();
    let participant = participants.iter().find(|p| p.id == id).unwrap();
    assert_eq!(participant.category, None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn criteria_require_an_existing_competition() {
    let db = database().await;
    let repo = Repository::<CriteriaResource>::new(db.pool());
    let name = unique("Creativity");

    let draft = CriteriaRequest {
        name: Some(name.clone()),
        competition: Some(unique("Missing")),
        ..Default::default()
    }
    .normalize()
    .unwrap();

    let err = repo.create(&draft).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidReference(_)));
    assert!(err.to_string().starts_with("Competition '"));

    let rows = repo.list().await.unwrap();
    assert!(rows.iter().all(|c| c.name != name));
}

#[tokio::test]
#[ignore = "requires database"]
async fn criteria_update_replaces_fields() {
    let db = database().await;
    let competition = unique("Finals");
    create_competition(&db, &competition).await;

    let repo = Repository::<CriteriaResource>::new(db.pool());
    let created = CriteriaRequest {
        name: Some("Delivery".into()),
        description: Some("Stage presence".into()),
        competition: Some(competition.clone()),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    let id = repo.create(&created).await.unwrap();

    let replacement = CriteriaRequest {
        name: Some("Delivery".into()),
        max_score: Some(40),
        weight: Some(Decimal::new(25, 2)),
        competition: Some(competition.clone()),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    repo.update(id, &replacement).await.unwrap();

    let rows = repo.list().await.unwrap();
    let row = rows.iter().find(|c| c.id == id).unwrap();
    assert_eq!(row.max_score, 40);
    assert_eq!(row.weight, Decimal::new(25, 2));
    assert_eq!(row.description, None);
    assert_eq!(row.competition.as_deref(), Some(competition.as_str()));
    assert!(row.updated_at.is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_ids_are_not_found() {
    let db = database().await;
    let repo = Repository::<JudgeResource>::new(db.pool());

    let draft = JudgeRequest {
        name: Some("Nobody".into()),
        email: Some(format!("{}@x.com", unique("nobody").replace(' ', "."))),
        ..Default::default()
    }
    .normalize()
    .unwrap();

    assert!(matches!(
        repo.update(i32::MAX, &draft).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(repo.delete(i32::MAX).await, Err(StorageError::NotFound)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleted_rows_leave_the_list() {
    let db = database().await;
    let competition = unique("Ephemeral");
    let id = create_competition(&db, &competition).await;

    let repo = Repository::<CompetitionResource>::new(db.pool());
    repo.delete(id).await.unwrap();

    let rows = repo.list().await.unwrap();
    assert!(rows.iter().all(|c| c.id != id));
    assert!(matches!(repo.delete(id).await, Err(StorageError::NotFound)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn widest_accepted_values_are_stored() {
    let db = database().await;
    let competition = unique("Marathon");
    create_competition(&db, &competition).await;

    let repo = Repository::<CriteriaResource>::new(db.pool());
    let long_name = format!("{} {}", unique("Criterion"), "x".repeat(400));
    let draft = CriteriaRequest {
        name: Some(long_name.clone()),
        weight: Some(Decimal::new(99_999, 2)),
        competition: Some(competition.clone()),
        ..Default::default()
    }
    .normalize()
    .unwrap();
    let id = repo.create(&draft).await.unwrap();

    let rows = repo.list().await.unwrap();
    let row = rows.iter().find(|c| c.id == id).unwrap();
    assert_eq!(row.name, long_name);
    assert_eq!(row.weight, Decimal::new(99_999, 2));
}
