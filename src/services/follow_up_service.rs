use chrono::NaiveDate;
use sqlx::PgPool;

use crate::dto::follow_up_dto::FollowUpPayload;
use crate::error::{Error, Result};
use crate::models::follow_up::{
    FollowUp, OverdueFollowUp, DEFAULT_PRIORITY, FOLLOW_UP_COLUMNS, FOLLOW_UP_STATUSES, PENDING,
    PRIORITIES,
};
use crate::utils::validation::ensure_one_of;

#[derive(Clone)]
pub struct FollowUpService {
    pool: PgPool,
}

impl FollowUpService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a follow-up, or updates it when the payload carries an id.
    pub async fn save(&self, payload: FollowUpPayload) -> Result<FollowUp> {
        match payload.id {
            Some(id) => self.update(id, payload).await,
            None => self.create(payload).await,
        }
    }

    pub async fn create(&self, payload: FollowUpPayload) -> Result<FollowUp> {
        let lead_id = payload
            .lead_id
            .ok_or_else(|| Error::BadRequest("lead_id is required".into()))?;
        let (status, priority) = resolve_status_and_priority(&payload)?;

        let sql = format!(
            r#"
            INSERT INTO follow_ups
                (lead_id, status, last_follow_up_date, next_follow_up_date, notes, mode, priority, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            FOLLOW_UP_COLUMNS
        );
        let row = sqlx::query_as::<_, FollowUp>(&sql)
            .bind(lead_id)
            .bind(status)
            .bind(payload.last_follow_up_date)
            .bind(payload.next_follow_up_date)
            .bind(payload.notes)
            .bind(payload.mode)
            .bind(priority)
            .bind(payload.created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    Error::NotFound("Lead not found".into())
                }
                other => other.into(),
            })?;
        Ok(row)
    }

    pub async fn update(&self, id: i64, payload: FollowUpPayload) -> Result<FollowUp> {
        let status = resolve_update_status(&payload)?;

        let sql = format!(
            r#"
            UPDATE follow_ups SET
                status = $1,
                last_follow_up_date = $2,
                next_follow_up_date = $3,
                notes = $4,
                mode = $5,
                priority = COALESCE($6, priority),
                created_by = $7
            WHERE id = $8
            RETURNING {}
            "#,
            FOLLOW_UP_COLUMNS
        );
        sqlx::query_as::<_, FollowUp>(&sql)
            .bind(status)
            .bind(payload.last_follow_up_date)
            .bind(payload.next_follow_up_date)
            .bind(payload.notes)
            .bind(payload.mode)
            .bind(payload.priority)
            .bind(payload.created_by)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Follow-up not found".into()))
    }

    pub async fn list_for_lead(&self, lead_id: i64) -> Result<Vec<FollowUp>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM follow_ups
            WHERE lead_id = $1
            ORDER BY COALESCE(next_follow_up_date, last_follow_up_date) DESC NULLS LAST, id DESC
            "#,
            FOLLOW_UP_COLUMNS
        );
        let rows = sqlx::query_as::<_, FollowUp>(&sql)
            .bind(lead_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM follow_ups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Follow-up not found".into()));
        }
        Ok(())
    }

    /// Pending follow-ups whose due date is strictly before `today`.
    pub async fn overdue(&self, today: NaiveDate) -> Result<Vec<OverdueFollowUp>> {
        let rows = sqlx::query_as::<_, OverdueFollowUp>(
            r#"
            SELECT f.id, f.lead_id, f.status, f.last_follow_up_date, f.next_follow_up_date,
                   f.notes, f.mode, f.priority, f.created_by, f.created_at,
                   l.company_name
            FROM follow_ups f
            JOIN leads l ON f.lead_id = l.id
            WHERE f.next_follow_up_date < $1
              AND f.status = $2
            ORDER BY f.next_follow_up_date, f.id
            "#,
        )
        .bind(today)
        .bind(PENDING)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Defaults and checks for a new follow-up. A pending follow-up needs a due
/// date, otherwise it could never surface as due or overdue.
fn resolve_status_and_priority(payload: &FollowUpPayload) -> Result<(String, String)> {
    let status = payload.status.clone().unwrap_or_else(|| PENDING.to_string());
    let priority = payload
        .priority
        .clone()
        .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
    check_fields(payload, &status)?;
    Ok((status, priority))
}

/// Edits must say which state the follow-up ends up in; a missing status
/// would otherwise reopen finished follow-ups.
fn resolve_update_status(payload: &FollowUpPayload) -> Result<String> {
    let status = payload
        .status
        .clone()
        .ok_or_else(|| Error::BadRequest("status is required".into()))?;
    check_fields(payload, &status)?;
    Ok(status)
}

fn check_fields(payload: &FollowUpPayload, status: &str) -> Result<()> {
    ensure_one_of("status", status, FOLLOW_UP_STATUSES)?;
    if let Some(priority) = payload.priority.as_deref() {
        ensure_one_of("priority", priority, PRIORITIES)?;
    }
    if payload.notes.is_empty() {
        return Err(Error::BadRequest("notes are required".into()));
    }
    if status == PENDING && payload.next_follow_up_date.is_none() {
        return Err(Error::BadRequest(
            "next_follow_up_date is required for pending follow-ups".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> FollowUpPayload {
        FollowUpPayload {
            lead_id: Some(1),
            notes: "Call back".into(),
            next_follow_up_date: NaiveDate::from_ymd_opt(2026, 1, 10),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_pending_medium() {
        let (status, priority) = resolve_status_and_priority(&payload()).unwrap();
        assert_eq!(status, "Pending");
        assert_eq!(priority, "Medium");
    }

    #[test]
    fn pending_without_due_date_is_rejected() {
        let mut p = payload();
        p.next_follow_up_date = None;
        assert!(matches!(
            resolve_status_and_priority(&p),
            Err(Error::BadRequest(_))
        ));

        p.status = Some("Done".into());
        p.last_follow_up_date = NaiveDate::from_ymd_opt(2026, 1, 9);
        assert!(resolve_status_and_priority(&p).is_ok());
    }

    #[test]
    fn update_without_status_is_rejected() {
        let p = payload();
        assert!(matches!(
            resolve_update_status(&p),
            Err(Error::BadRequest(msg)) if msg == "status is required"
        ));
    }

    #[test]
    fn finished_follow_up_may_drop_its_due_date() {
        let mut p = payload();
        p.status = Some("Done".into());
        p.next_follow_up_date = None;
        assert_eq!(resolve_update_status(&p).unwrap(), "Done");

        p.status = Some("Pending".into());
        assert!(resolve_update_status(&p).is_err());
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let mut p = payload();
        p.priority = Some("Urgent".into());
        assert!(resolve_status_and_priority(&p).is_err());
    }
}
