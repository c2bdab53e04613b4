use thiserror::Error;

/// Reasons a schedule could not be generated.
///
/// Every variant except [`ScheduleError::Unsatisfiable`] describes a malformed
/// request and is raised before any placement is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Unknown weekday name: '{0}'")]
    UnknownWeekday(String),
    #[error("At least one preferred study day is required")]
    NoPreferredDays,
    #[error("Study window is empty: start {start} must be before end {end}")]
    EmptyWindow { start: f64, end: f64 },
    #[error("Study window must lie within 0..=24 hours, got {start}..{end}")]
    WindowOutOfDay { start: f64, end: f64 },
    #[error("At least one topic is required")]
    NoTopics,
    #[error("Sessions per day must be at least 1")]
    InvalidSessionsPerDay,
    #[error("Session length must be a positive number of hours, got {0}")]
    InvalidSessionLength(f64),
    #[error("Topic at position {index} must require a positive number of hours, got {hours}")]
    InvalidRequiredHours { index: usize, hours: f64 },
    #[error("Could not fit all study hours into the requested date range")]
    Unsatisfiable,
}

impl ScheduleError {
    /// Whether the request itself is malformed, as opposed to well formed but
    /// impossible to pack.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Unsatisfiable)
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configuration() {
        assert!(ScheduleError::NoTopics.is_configuration());
        assert!(ScheduleError::UnknownWeekday("Funday".to_string()).is_configuration());
        assert!(ScheduleError::EmptyWindow { start: 12.0, end: 8.0 }.is_configuration());
        assert!(!ScheduleError::Unsatisfiable.is_configuration());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScheduleError::UnknownWeekday("monday".to_string()).to_string(),
            "Unknown weekday name: 'monday'"
        );
        assert_eq!(
            ScheduleError::Unsatisfiable.to_string(),
            "Could not fit all study hours into the requested date range"
        );
    }
}
