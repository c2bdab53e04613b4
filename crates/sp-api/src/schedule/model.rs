use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sp_db::models::StudySession;
use sp_scheduler::{ScheduleRequest, TopicRequest};
use uuid::Uuid;

/// Body of `POST /study-plans/{study_plan_id}/schedule`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateScheduleRequest {
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sessions_per_day: u32,
    /// Hours
    pub session_length: f64,
    /// Hours from midnight
    pub study_start_time: f64,
    /// Hours from midnight
    pub study_end_time: f64,
    pub preferred_study_days: Vec<String>,
    pub topics: Vec<TopicRequest>,
}

impl GenerateScheduleRequest {
    pub fn into_schedule_request(self, study_plan_id: Uuid) -> ScheduleRequest {
        ScheduleRequest {
            study_plan_id,
            user_id: self.user_id,
            start_date: self.start_date,
            end_date: self.end_date,
            sessions_per_day: self.sessions_per_day,
            session_length: self.session_length,
            study_start_time: self.study_start_time,
            study_end_time: self.study_end_time,
            preferred_study_days: self.preferred_study_days,
            topics: self.topics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    pub study_plan_id: Uuid,
    pub total_hours: f64,
    pub sessions: Vec<StudySession>,
}

/// Query of `GET /users/{user_id}/sessions`
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
