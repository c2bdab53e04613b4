//! Preferred study day handling.
//!
//! Weekday names form a closed vocabulary: the seven English names, matched
//! case-sensitively. Anything else is rejected rather than guessed at.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{ScheduleError, ScheduleResult};

/// Canonical weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse a canonical weekday name.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use sp_scheduler::weekday::parse_weekday;
///
/// assert_eq!(parse_weekday("Friday").unwrap(), Weekday::Fri);
/// assert!(parse_weekday("friday").is_err());
/// ```
pub fn parse_weekday(name: &str) -> ScheduleResult<Weekday> {
    match name {
        "Monday" => Ok(Weekday::Mon),
        "Tuesday" => Ok(Weekday::Tue),
        "Wednesday" => Ok(Weekday::Wed),
        "Thursday" => Ok(Weekday::Thu),
        "Friday" => Ok(Weekday::Fri),
        "Saturday" => Ok(Weekday::Sat),
        "Sunday" => Ok(Weekday::Sun),
        other => Err(ScheduleError::UnknownWeekday(other.to_string())),
    }
}

/// A non-empty set of weekdays on which sessions may be placed.
///
/// Stored as a bitmask indexed by days from Monday. The only constructors
/// reject an empty set, so date searches always terminate within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreferredDays(u8);

impl PreferredDays {
    /// Build the set from weekday names. Duplicates are harmless.
    pub fn from_names<I, S>(names: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = 0u8;
        for name in names {
            mask |= bit(parse_weekday(name.as_ref())?);
        }
        Self::from_mask(mask)
    }

    /// Build the set from already-parsed weekdays.
    pub fn from_weekdays<I>(days: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self::from_mask(days.into_iter().fold(0u8, |mask, day| mask | bit(day)))
    }

    fn from_mask(mask: u8) -> ScheduleResult<Self> {
        if mask == 0 {
            return Err(ScheduleError::NoPreferredDays);
        }
        Ok(Self(mask))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of distinct weekdays in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The earliest date on or after `from` whose weekday is in the set.
    ///
    /// Looks at most seven days ahead. Returns `None` only when the answer
    /// would fall past the end of the representable calendar.
    pub fn next_on_or_after(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut day = from.weekday();
        let mut offset = 0u64;
        while !self.contains(day) && offset < 7 {
            day = day.succ();
            offset += 1;
        }
        from.checked_add_days(Days::new(offset))
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}
