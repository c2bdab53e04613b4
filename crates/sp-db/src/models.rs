use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sp_scheduler::{ExistingBooking, GeneratedSession, TopicRef};
use uuid::Uuid;

/// A persisted study session
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StudySession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub study_plan_id: Uuid,
    /// Set when the topic was referenced by id
    pub topic_id: Option<Uuid>,
    /// Set when the topic was referenced by title
    pub topic_title: Option<String>,
    pub session_date: NaiveDate,
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration_hours: f64,
    pub created_at: DateTime<Utc>,
}

/// Booked interval, the only shape the conflict check needs
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct BookingRow {
    pub session_date: NaiveDate,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl From<BookingRow> for ExistingBooking {
    fn from(row: BookingRow) -> Self {
        Self::new(row.session_date, row.start_hour, row.end_hour)
    }
}

/// Insert payload for a generated session
#[derive(Debug, Clone)]
pub struct NewStudySession {
    pub user_id: Uuid,
    pub study_plan_id: Uuid,
    pub topic_id: Option<Uuid>,
    pub topic_title: Option<String>,
    pub session_date: NaiveDate,
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration_hours: f64,
}

impl From<&GeneratedSession> for NewStudySession {
    fn from(session: &GeneratedSession) -> Self {
        let (topic_id, topic_title) = match &session.topic {
            TopicRef::Id(id) => (Some(*id), None),
            TopicRef::Title(title) => (None, Some(title.clone())),
        };

        Self {
            user_id: session.user_id,
            study_plan_id: session.study_plan_id,
            topic_id,
            topic_title,
            session_date: session.date,
            start_hour: session.start_time,
            end_hour: session.end_time,
            duration_hours: session.duration_hours,
        }
    }
}
