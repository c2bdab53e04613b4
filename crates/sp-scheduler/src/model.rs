use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a topic is referred to by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicRef {
    /// Topic stored by the caller under this id
    Id(Uuid),
    /// Free-form topic title
    Title(String),
}

/// A topic and the total number of hours to spread across its sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: TopicRef,
    pub required_hours: f64,
}

impl TopicRequest {
    pub fn new(topic: TopicRef, required_hours: f64) -> Self {
        Self {
            topic,
            required_hours,
        }
    }
}

/// Everything needed for one generation run.
///
/// Times of day and durations are expressed in hours, so `8.5` is 08:30.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub study_plan_id: Uuid,
    pub user_id: Uuid,
    /// First day sessions may be placed on (inclusive)
    pub start_date: NaiveDate,
    /// Last day sessions may be placed on (inclusive)
    pub end_date: NaiveDate,
    /// Cap on sessions placed per day for each topic
    pub sessions_per_day: u32,
    /// Nominal session length in hours
    pub session_length: f64,
    /// Daily window start, hours from midnight
    pub study_start_time: f64,
    /// Daily window end, hours from midnight
    pub study_end_time: f64,
    /// Canonical English weekday names ("Monday" .. "Sunday")
    pub preferred_study_days: Vec<String>,
    /// Topics in priority order
    pub topics: Vec<TopicRequest>,
}

/// A session already committed for the user, as seen by the conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub date: NaiveDate,
    pub start_time: f64,
    pub end_time: f64,
}

impl ExistingBooking {
    pub fn new(date: NaiveDate, start_time: f64, end_time: f64) -> Self {
        Self {
            date,
            start_time,
            end_time,
        }
    }
}

/// A newly placed study session. The caller owns persisting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSession {
    pub date: NaiveDate,
    pub start_time: f64,
    pub end_time: f64,
    pub duration_hours: f64,
    pub topic: TopicRef,
    pub study_plan_id: Uuid,
    pub user_id: Uuid,
}

impl GeneratedSession {
    /// Start as a wall-clock time.
    pub fn start_clock(&self) -> Option<NaiveTime> {
        hours_to_time(self.start_time)
    }

    /// End as a wall-clock time. `None` for a session ending at midnight (24h).
    pub fn end_clock(&self) -> Option<NaiveTime> {
        hours_to_time(self.end_time)
    }

    pub fn as_booking(&self) -> ExistingBooking {
        ExistingBooking::new(self.date, self.start_time, self.end_time)
    }
}

/// Convert hours from midnight to a time of day, rounded to the second.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use sp_scheduler::model::hours_to_time;
///
/// assert_eq!(hours_to_time(8.5), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(hours_to_time(24.0), None);
/// ```
pub fn hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    let seconds = (hours * 3600.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
