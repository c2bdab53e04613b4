//! Overlap detection between study sessions.
//!
//! Intervals are half-open, `[start, end)`, so a session ending at 10:00 and
//! one starting at 10:00 on the same day do not conflict.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::ExistingBooking;

/// A time-of-day interval in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Whether `[start, end)` on `date` overlaps any booking on that same date.
///
/// Linear in the number of bookings. [`BookingIndex`] answers the same
/// question without scanning other dates.
pub fn overlaps(date: NaiveDate, start: f64, end: f64, bookings: &[ExistingBooking]) -> bool {
    let candidate = Interval::new(start, end);
    bookings
        .iter()
        .filter(|booking| booking.date == date)
        .any(|booking| candidate.overlaps(&Interval::new(booking.start_time, booking.end_time)))
}

/// Run-scoped record of every booked interval, grouped by date.
///
/// Seeded from the caller's snapshot and extended as sessions are placed.
/// Owned by a single generation run and dropped when it returns.
#[derive(Debug, Clone, Default)]
pub struct BookingIndex {
    by_date: BTreeMap<NaiveDate, Vec<Interval>>,
}

impl BookingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookings<'a, I>(bookings: I) -> Self
    where
        I: IntoIterator<Item = &'a ExistingBooking>,
    {
        let mut index = Self::new();
        for booking in bookings {
            index.insert(
                booking.date,
                Interval::new(booking.start_time, booking.end_time),
            );
        }
        index
    }

    pub fn insert(&mut self, date: NaiveDate, interval: Interval) {
        self.by_date.entry(date).or_default().push(interval);
    }

    pub fn overlaps(&self, date: NaiveDate, start: f64, end: f64) -> bool {
        let candidate = Interval::new(start, end);
        self.by_date
            .get(&date)
            .is_some_and(|intervals| intervals.iter().any(|i| i.overlaps(&candidate)))
    }

    /// Total number of intervals across all dates.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.values().all(Vec::is_empty)
    }
}
