use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::follow_up::PENDING;
use crate::models::notification::{
    DueFollowUp, Notification, NotificationItem, NotificationKind, UpcomingInterview,
};
use crate::utils::time::next_day;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Combined attention feed: interviews tomorrow, follow-ups due today and
    /// overdue follow-ups, oldest date first.
    pub async fn feed(&self, today: NaiveDate) -> Result<Vec<NotificationItem>> {
        let interviews = sqlx::query_as::<_, UpcomingInterview>(
            r#"
            SELECT i.id, i.interview_date, i.interview_time, c.id AS candidate_id,
                   c.name AS candidate_name, j.title AS job_title
            FROM interviews i
            JOIN candidates c ON i.candidate_id = c.id
            LEFT JOIN jobs j ON c.job_id = j.id
            WHERE i.interview_date = $1
            ORDER BY i.interview_time NULLS LAST, i.id
            "#,
        )
        .bind(next_day(today))
        .fetch_all(&self.pool)
        .await?;

        let follow_ups = sqlx::query_as::<_, DueFollowUp>(
            r#"
            SELECT f.id, f.lead_id, f.status, f.next_follow_up_date, f.notes, l.company_name
            FROM follow_ups f
            JOIN leads l ON f.lead_id = l.id
            WHERE f.status = $1
              AND f.next_follow_up_date <= $2
            ORDER BY f.next_follow_up_date, f.id
            "#,
        )
        .bind(PENDING)
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(build_feed(today, interviews, follow_ups))
    }

    /// Stored reminders that have come due and are still unread.
    pub async fn list_unread(&self, today: NaiveDate) -> Result<Vec<Notification>> {
        let rows = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, kind, message, related_id, notify_date, is_read, created_at
            FROM notifications
            WHERE is_read = FALSE AND notify_date <= $1
            ORDER BY notify_date, id
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn mark_read(&self, id: i64) -> Result<Notification> {
        sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications SET is_read = TRUE
            WHERE id = $1
            RETURNING id, kind, message, related_id, notify_date, is_read, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Notification not found".into()))
    }
}

/// Where a follow-up falls relative to `today`; `None` when it needs no attention.
pub fn classify_follow_up(
    status: &str,
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<NotificationKind> {
    if status != PENDING {
        return None;
    }
    let due = due?;
    if due == today {
        Some(NotificationKind::Followup)
    } else if due < today {
        Some(NotificationKind::FollowupOverdue)
    } else {
        None
    }
}

pub fn build_feed(
    today: NaiveDate,
    interviews: Vec<UpcomingInterview>,
    follow_ups: Vec<DueFollowUp>,
) -> Vec<NotificationItem> {
    let tomorrow = next_day(today);

    let interview_items = interviews
        .into_iter()
        .filter(|i| i.interview_date == tomorrow)
        .map(|i| NotificationItem {
            id: i.id,
            kind: NotificationKind::Interview,
            date: i.interview_date,
            time: i.interview_time,
            status: NotificationKind::Interview.status_label().to_string(),
            title: i.candidate_name,
            subtitle: i.job_title,
            redirect_id: i.candidate_id,
        });

    let follow_up_items = follow_ups.into_iter().filter_map(|f| {
        let kind = classify_follow_up(&f.status, f.next_follow_up_date, today)?;
        let date = f.next_follow_up_date?;
        Some(NotificationItem {
            id: f.id,
            kind,
            date,
            time: None,
            status: kind.status_label().to_string(),
            title: f.company_name,
            subtitle: Some(f.notes),
            redirect_id: f.lead_id,
        })
    });

    let mut items: Vec<NotificationItem> = interview_items.chain(follow_up_items).collect();
    items.sort_by_key(|item| item.date);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn follow_up(id: i64, status: &str, due: Option<NaiveDate>) -> DueFollowUp {
        DueFollowUp {
            id,
            lead_id: 100 + id,
            status: status.to_string(),
            next_follow_up_date: due,
            notes: format!("note {}", id),
            company_name: format!("Lead {}", id),
        }
    }

    fn interview(id: i64, date: NaiveDate) -> UpcomingInterview {
        UpcomingInterview {
            id,
            interview_date: date,
            interview_time: Some("10:30".into()),
            candidate_id: 200 + id,
            candidate_name: format!("Candidate {}", id),
            job_title: Some("Backend Engineer".into()),
        }
    }

    #[test]
    fn due_today_and_overdue_are_mutually_exclusive() {
        let today = day(2026, 10, 19);
        assert_eq!(
            classify_follow_up("Pending", Some(today), today),
            Some(NotificationKind::Followup)
        );
        assert_eq!(
            classify_follow_up("Pending", Some(day(2026, 10, 18)), today),
            Some(NotificationKind::FollowupOverdue)
        );
        assert_eq!(classify_follow_up("Pending", Some(day(2026, 10, 20)), today), None);
        assert_eq!(classify_follow_up("Pending", None, today), None);
    }

    #[test]
    fn done_follow_ups_drop_out() {
        let today = day(2026, 10, 19);
        assert_eq!(classify_follow_up("Done", Some(today), today), None);
        assert_eq!(classify_follow_up("Done", Some(day(2026, 1, 1)), today), None);

        let feed = build_feed(today, Vec::new(), vec![follow_up(1, "Done", Some(today))]);
        assert!(feed.is_empty());
    }

    #[test]
    fn feed_is_tagged_and_sorted_by_date() {
        let today = day(2026, 10, 19);
        let feed = build_feed(
            today,
            vec![interview(7, day(2026, 10, 20))],
            vec![
                follow_up(1, "Pending", Some(today)),
                follow_up(2, "Pending", Some(day(2026, 10, 1))),
            ],
        );

        let kinds: Vec<_> = feed.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::FollowupOverdue,
                NotificationKind::Followup,
                NotificationKind::Interview,
            ]
        );
        assert_eq!(feed[0].status, "Overdue");
        assert_eq!(feed[0].redirect_id, 102);
        assert_eq!(feed[1].status, "Due Today");
        assert_eq!(feed[2].title, "Candidate 7");
        assert_eq!(feed[2].subtitle.as_deref(), Some("Backend Engineer"));
        assert_eq!(feed[2].redirect_id, 207);
    }

    #[test]
    fn interviews_not_tomorrow_are_ignored() {
        let today = day(2026, 10, 19);
        let feed = build_feed(
            today,
            vec![interview(1, today), interview(2, day(2026, 10, 21))],
            Vec::new(),
        );
        assert!(feed.is_empty());
    }

    #[test]
    fn items_serialize_with_type_discriminator() {
        let today = day(2026, 10, 19);
        let feed = build_feed(
            today,
            Vec::new(),
            vec![follow_up(3, "Pending", Some(day(2026, 10, 2)))],
        );
        let json = serde_json::to_value(&feed[0]).unwrap();
        assert_eq!(json["type"], "followup_overdue");
        assert_eq!(json["date"], "2026-10-02");
        assert_eq!(json["title"], "Lead 3");
        assert!(json["time"].is_null());
    }
}
