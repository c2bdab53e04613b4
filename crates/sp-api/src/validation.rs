use chrono::NaiveDate;

use crate::error::ApiError;

/// Reject schedule ranges longer than `max_days`.
///
/// A start after the end is let through: the generator treats it as an
/// empty range and reports it as unsatisfiable.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sp_api::validation::validate_schedule_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert!(validate_schedule_range(start, end, 90).is_ok());
/// assert!(validate_schedule_range(start, end, 30).is_err());
/// ```
pub fn validate_schedule_range(
    start: NaiveDate,
    end: NaiveDate,
    max_days: i64,
) -> Result<(), ApiError> {
    let span = (end - start).num_days();
    if span > max_days {
        return Err(ApiError::Validation(format!(
            "Date range spans {} days, the maximum is {}",
            span, max_days
        )));
    }
    Ok(())
}

/// Listing ranges must be ordered
pub fn validate_listing_range(start: NaiveDate, end: NaiveDate) -> Result<(), ApiError> {
    if start > end {
        return Err(ApiError::Validation(format!(
            "Start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_validate_schedule_range() {
        assert!(validate_schedule_range(date(1, 1), date(1, 31), 30).is_ok());
        assert!(validate_schedule_range(date(1, 1), date(2, 1), 30).is_err());
        assert!(validate_schedule_range(date(1, 1), date(1, 1), 0).is_ok());

        // Inverted ranges are left to the generator
        assert!(validate_schedule_range(date(6, 1), date(1, 1), 30).is_ok());
    }

    #[test]
    fn test_validate_listing_range() {
        assert!(validate_listing_range(date(1, 1), date(1, 1)).is_ok());
        assert!(validate_listing_range(date(1, 1), date(12, 31)).is_ok());

        let err = validate_listing_range(date(2, 1), date(1, 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Start date 2024-02-01 is after end date 2024-01-01"
        );
    }
}
