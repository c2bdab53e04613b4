use chrono::NaiveDate;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{BookingRow, NewStudySession, StudySession};

/// Serialize schedule generation for a user until the surrounding transaction ends.
///
/// Two runs for the same user would otherwise both read the same booking
/// snapshot and reserve overlapping slots.
pub async fn lock_user_schedule<'e, E>(executor: E, user_id: Uuid) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))
        "#,
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Booked intervals for a user whose date falls within `[start, end]`.
pub async fn list_bookings_in_range<'e, E>(
    executor: E,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<BookingRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT session_date, start_hour, end_hour
            FROM study_sessions
            WHERE user_id = $1 AND session_date BETWEEN $2 AND $3
            ORDER BY session_date, start_hour
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(executor)
    .await
}

pub async fn list_sessions_in_range<'e, E>(
    executor: E,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<StudySession>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, study_plan_id, topic_id, topic_title,
                   session_date, start_hour, end_hour, duration_hours, created_at
            FROM study_sessions
            WHERE user_id = $1 AND session_date BETWEEN $2 AND $3
            ORDER BY session_date, start_hour
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(executor)
    .await
}

pub async fn insert_session<'e, E>(
    executor: E,
    session: &NewStudySession,
) -> Result<StudySession, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO study_sessions
                (user_id, study_plan_id, topic_id, topic_title,
                 session_date, start_hour, end_hour, duration_hours)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, study_plan_id, topic_id, topic_title,
                      session_date, start_hour, end_hour, duration_hours, created_at
        "#,
    )
    .bind(session.user_id)
    .bind(session.study_plan_id)
    .bind(session.topic_id)
    .bind(&session.topic_title)
    .bind(session.session_date)
    .bind(session.start_hour)
    .bind(session.end_hour)
    .bind(session.duration_hours)
    .fetch_one(executor)
    .await
}
