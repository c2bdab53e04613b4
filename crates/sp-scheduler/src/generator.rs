//! Greedy study-session placement.
//!
//! Topics are placed strictly in request order, each starting from the first
//! day of the range. On every preferred day the generator fills the window
//! from its start, one session after another, until it hits the per-day cap,
//! the window end, a conflict, or the topic's hours run out. Sessions placed
//! for earlier topics block later ones. The run is all-or-nothing.

use chrono::{Datelike, NaiveDate};

use crate::{
    conflict::{BookingIndex, Interval},
    error::{ScheduleError, ScheduleResult},
    model::{ExistingBooking, GeneratedSession, ScheduleRequest, TopicRequest},
    weekday::PreferredDays,
};

/// Tolerance used when comparing accumulated hours.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Check a request without placing anything.
///
/// Returns the resolved preferred-day set so callers that go on to generate
/// don't parse the names twice.
pub fn validate_request(request: &ScheduleRequest) -> ScheduleResult<PreferredDays> {
    let days = PreferredDays::from_names(&request.preferred_study_days)?;

    let (start, end) = (request.study_start_time, request.study_end_time);
    if !start.is_finite() || !end.is_finite() || start < 0.0 || end > 24.0 {
        return Err(ScheduleError::WindowOutOfDay { start, end });
    }
    if start >= end {
        return Err(ScheduleError::EmptyWindow { start, end });
    }

    if request.topics.is_empty() {
        return Err(ScheduleError::NoTopics);
    }

    if request.sessions_per_day == 0 {
        return Err(ScheduleError::InvalidSessionsPerDay);
    }
    if !request.session_length.is_finite() || request.session_length <= 0.0 {
        return Err(ScheduleError::InvalidSessionLength(request.session_length));
    }

    if let Some((index, topic)) = request
        .topics
        .iter()
        .enumerate()
        .find(|(_, t)| !t.required_hours.is_finite() || t.required_hours <= 0.0)
    {
        return Err(ScheduleError::InvalidRequiredHours {
            index,
            hours: topic.required_hours,
        });
    }

    Ok(days)
}

/// Place every topic's hours into the requested range.
///
/// `existing` is the caller's snapshot of sessions already booked for the
/// user. It is copied into a run-local index; the caller's data is never
/// touched. Either every requested hour is placed or nothing is returned.
///
/// # Errors
///
/// A configuration variant of [`ScheduleError`] for a malformed request, or
/// [`ScheduleError::Unsatisfiable`] when the date range runs out first.
pub fn generate(
    request: &ScheduleRequest,
    existing: &[ExistingBooking],
) -> ScheduleResult<Vec<GeneratedSession>> {
    let days = validate_request(request)?;

    let mut working = BookingIndex::from_bookings(existing);
    let mut sessions = Vec::new();

    for topic in &request.topics {
        place_topic(request, days, topic, &mut working, &mut sessions)?;
    }

    Ok(sessions)
}

fn place_topic(
    request: &ScheduleRequest,
    days: PreferredDays,
    topic: &TopicRequest,
    working: &mut BookingIndex,
    sessions: &mut Vec<GeneratedSession>,
) -> ScheduleResult<()> {
    let mut remaining = topic.required_hours;
    let mut cursor = Some(request.start_date);

    while remaining > HOURS_EPSILON {
        // A start date after the end date is an empty range
        let date = match cursor {
            Some(date) if date <= request.end_date => date,
            _ => return Err(ScheduleError::Unsatisfiable),
        };

        if days.contains(date.weekday()) {
            remaining = pack_day(request, date, topic, remaining, working, sessions);
        }

        cursor = date
            .succ_opt()
            .and_then(|next| days.next_on_or_after(next));
    }

    Ok(())
}

/// Fill one day's window for a topic. Returns the hours still unplaced.
fn pack_day(
    request: &ScheduleRequest,
    date: NaiveDate,
    topic: &TopicRequest,
    mut remaining: f64,
    working: &mut BookingIndex,
    sessions: &mut Vec<GeneratedSession>,
) -> f64 {
    let mut slot_start = request.study_start_time;
    let mut placed_today = 0;

    // The fit test uses the nominal length even when the session placed
    // would be a shorter final one.
    while placed_today < request.sessions_per_day
        && slot_start + request.session_length <= request.study_end_time + HOURS_EPSILON
        && remaining > HOURS_EPSILON
    {
        // Clamped so tolerance in the fit test never leaks past the window
        let slot_end = (slot_start + remaining.min(request.session_length))
            .min(request.study_end_time);
        let hours = slot_end - slot_start;

        // First conflict ends the day for this topic, later free slots included
        if working.overlaps(date, slot_start, slot_end) {
            break;
        }

        working.insert(date, Interval::new(slot_start, slot_end));
        sessions.push(GeneratedSession {
            date,
            start_time: slot_start,
            end_time: slot_end,
            duration_hours: hours,
            topic: topic.topic.clone(),
            study_plan_id: request.study_plan_id,
            user_id: request.user_id,
        });

        remaining -= hours;
        placed_today += 1;
        slot_start = slot_end;
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicRef;
    use uuid::Uuid;

    // 2024-01-01 is a Monday
    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn topic(title: &str, hours: f64) -> TopicRequest {
        TopicRequest::new(TopicRef::Title(title.to_string()), hours)
    }

    fn request(topics: Vec<TopicRequest>) -> ScheduleRequest {
        ScheduleRequest {
            study_plan_id: Uuid::nil(),
            user_id: Uuid::nil(),
            start_date: date(1),
            end_date: date(31),
            sessions_per_day: 2,
            session_length: 2.0,
            study_start_time: 8.0,
            study_end_time: 12.0,
            preferred_study_days: vec!["Monday".to_string()],
            topics,
        }
    }

    #[test]
    fn test_validate_request_order_of_checks() {
        // Weekday names are checked before the window
        let mut req = request(vec![]);
        req.preferred_study_days = vec!["Caturday".to_string()];
        req.study_start_time = 12.0;
        req.study_end_time = 8.0;
        assert_eq!(
            validate_request(&req),
            Err(ScheduleError::UnknownWeekday("Caturday".to_string()))
        );

        // Window before topics
        req.preferred_study_days = vec!["Monday".to_string()];
        assert_eq!(
            validate_request(&req),
            Err(ScheduleError::EmptyWindow {
                start: 12.0,
                end: 8.0
            })
        );

        req.study_start_time = 8.0;
        req.study_end_time = 12.0;
        assert_eq!(validate_request(&req), Err(ScheduleError::NoTopics));
    }

    #[test]
    fn test_validate_request_session_shape() {
        let mut req = request(vec![topic("Algebra", 2.0)]);
        assert!(validate_request(&req).is_ok());

        req.sessions_per_day = 0;
        assert_eq!(
            validate_request(&req),
            Err(ScheduleError::InvalidSessionsPerDay)
        );

        req.sessions_per_day = 1;
        req.session_length = 0.0;
        assert_eq!(
            validate_request(&req),
            Err(ScheduleError::InvalidSessionLength(0.0))
        );

        req.session_length = 1.0;
        req.topics.push(topic("Geometry", -1.0));
        assert_eq!(
            validate_request(&req),
            Err(ScheduleError::InvalidRequiredHours {
                index: 1,
                hours: -1.0
            })
        );
    }

    #[test]
    fn test_validate_request_window_bounds() {
        let mut req = request(vec![topic("Algebra", 2.0)]);
        req.study_end_time = 25.0;
        assert!(matches!(
            validate_request(&req),
            Err(ScheduleError::WindowOutOfDay { .. })
        ));

        req.study_end_time = 12.0;
        req.study_start_time = f64::NAN;
        assert!(matches!(
            validate_request(&req),
            Err(ScheduleError::WindowOutOfDay { .. })
        ));

        req.study_start_time = 12.0;
        assert!(matches!(
            validate_request(&req),
            Err(ScheduleError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn test_session_cap_per_day() {
        let mut req = request(vec![topic("Algebra", 4.0)]);
        req.sessions_per_day = 1;

        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].date, date(1));
        assert_eq!(sessions[1].date, date(8));
        assert_eq!(sessions[1].start_time, 8.0);
    }

    #[test]
    fn test_window_fit_uses_nominal_length() {
        // Window 08:00-11:00 holds one 2h slot. The 1h remainder would fit
        // at 10:00 but the fit test checks 10:00 + 2h, so it goes to next week.
        let mut req = request(vec![topic("Algebra", 3.0)]);
        req.study_end_time = 11.0;

        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(
            (sessions[0].date, sessions[0].start_time, sessions[0].end_time),
            (date(1), 8.0, 10.0)
        );
        assert_eq!(
            (sessions[1].date, sessions[1].start_time, sessions[1].end_time),
            (date(8), 8.0, 9.0)
        );
        assert_eq!(sessions[1].duration_hours, 1.0);
    }

    #[test]
    fn test_window_shorter_than_session_is_unsatisfiable() {
        let mut req = request(vec![topic("Algebra", 1.0)]);
        req.session_length = 5.0;
        assert_eq!(generate(&req, &[]), Err(ScheduleError::Unsatisfiable));
    }

    #[test]
    fn test_topics_share_the_working_set() {
        let req = request(vec![topic("Algebra", 2.0), topic("History", 2.0)]);
        let sessions = generate(&req, &[]).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].topic, TopicRef::Title("Algebra".to_string()));
        assert_eq!((sessions[0].start_time, sessions[0].end_time), (8.0, 10.0));

        // History's first candidate on day 1 is 08:00, taken by Algebra, so
        // day 1 is abandoned and it lands a week later.
        assert_eq!(sessions[1].topic, TopicRef::Title("History".to_string()));
        assert_eq!(sessions[1].date, date(8));
        assert_eq!((sessions[1].start_time, sessions[1].end_time), (8.0, 10.0));
    }

    #[test]
    fn test_start_after_end_is_unsatisfiable() {
        let mut req = request(vec![topic("Algebra", 1.0)]);
        req.start_date = date(20);
        req.end_date = date(10);
        assert_eq!(generate(&req, &[]), Err(ScheduleError::Unsatisfiable));
    }

    #[test]
    fn test_single_day_range() {
        let mut req = request(vec![topic("Algebra", 2.0)]);
        req.end_date = req.start_date;
        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].date, date(1));
    }

    #[test]
    fn test_start_on_non_preferred_day() {
        let mut req = request(vec![topic("Algebra", 2.0)]);
        req.start_date = date(2); // Tuesday
        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions[0].date, date(8));
    }

    #[test]
    fn test_fractional_hours_do_not_leave_slivers() {
        let mut req = request(vec![topic("Algebra", 0.3)]);
        req.session_length = 0.1;
        req.sessions_per_day = 10;

        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions.len(), 3);
        let total: f64 = sessions.iter().map(|s| s.duration_hours).sum();
        assert!((total - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_sessions_never_end_past_midnight_window() {
        // Ten 0.1h starts summed from 23:00 drift just past 24:00
        let mut req = request(vec![topic("Algebra", 1.0)]);
        req.end_date = req.start_date;
        req.session_length = 0.1;
        req.sessions_per_day = 100;
        req.study_start_time = 23.0;
        req.study_end_time = 24.0;

        let sessions = generate(&req, &[]).unwrap();
        assert_eq!(sessions.len(), 10);
        for session in &sessions {
            assert!(session.start_time >= req.study_start_time);
            assert!(session.end_time <= req.study_end_time);
            assert_eq!(session.end_time - session.start_time, session.duration_hours);
        }
        assert_eq!(sessions.last().unwrap().end_time, 24.0);
        assert!(sessions.last().unwrap().end_clock().is_none());
    }
}
