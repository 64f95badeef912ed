use validator::ValidationErrors;

use super::{Draft, PgQuery, Resource};
use crate::dto::judge::{JudgeDraft, JudgeRequest};
use crate::models::Judge;

pub struct JudgeResource;

impl Resource for JudgeResource {
    const TABLE: &'static str = "judges";
    const NOUN: &'static str = "judge";
    const TITLE: &'static str = "Judge";
    const PLURAL: &'static str = "judges";
    const CREATE_VERB: &'static str = "add";
    const CREATED_VERB: &'static str = "added";
    const FIELDS: &'static [&'static str] = &["name", "email", "expertise", "phone", "status"];
    const DUPLICATE: Option<&'static str> = Some("Email address already exists");

    const LIST_SQL: &'static str = r#"
        SELECT id, name, email, expertise, phone, status, created_at, updated_at
        FROM judges
        ORDER BY created_at DESC, id DESC
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO judges (name, email, expertise, phone, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE judges
        SET name = $1,
            email = $2,
            expertise = $3,
            phone = $4,
            status = $5,
            updated_at = now()
        WHERE id = $6
    "#;

    type Request = JudgeRequest;
    type Draft = JudgeDraft;
    type Record = Judge;

    fn normalize(request: JudgeRequest) -> Result<JudgeDraft, ValidationErrors> {
        request.normalize()
    }
}

impl Draft for JudgeDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.expertise)
            .bind(&self.phone)
            .bind(&self.status)
    }
}
