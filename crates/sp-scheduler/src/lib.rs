//! Study-session schedule generator for Study Planner
//!
//! Given a date range, topics with required hours, per-day session limits, a
//! daily time window and preferred weekdays, this crate deterministically
//! places conflict-free study sessions covering every requested hour, or
//! reports that no placement exists.
//!
//! The crate is pure: no I/O, no clock, no logging. Existing bookings are
//! handed in as a snapshot and generated sessions are handed back for the
//! caller to persist.
//!
//! ```
//! use chrono::NaiveDate;
//! use sp_scheduler::{ScheduleRequest, TopicRef, TopicRequest, generate};
//! use uuid::Uuid;
//!
//! let request = ScheduleRequest {
//!     study_plan_id: Uuid::nil(),
//!     user_id: Uuid::nil(),
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), // Monday
//!     end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
//!     sessions_per_day: 2,
//!     session_length: 2.0,
//!     study_start_time: 8.0,
//!     study_end_time: 12.0,
//!     preferred_study_days: vec!["Monday".to_string()],
//!     topics: vec![TopicRequest::new(TopicRef::Title("Algebra".into()), 4.0)],
//! };
//!
//! let sessions = generate(&request, &[]).unwrap();
//! assert_eq!(sessions.len(), 2);
//! assert_eq!((sessions[1].start_time, sessions[1].end_time), (10.0, 12.0));
//! ```

pub mod conflict;
pub mod error;
pub mod generator;
pub mod model;
pub mod weekday;

pub use conflict::{BookingIndex, Interval, overlaps};
pub use error::{ScheduleError, ScheduleResult};
pub use generator::{generate, validate_request};
pub use model::{ExistingBooking, GeneratedSession, ScheduleRequest, TopicRef, TopicRequest};
pub use weekday::{PreferredDays, WEEKDAY_NAMES, parse_weekday};
