use cadence_core::model::Periodicity;
use chrono::{Datelike, Days, NaiveDate};

use super::calendar::{days_in_month, is_leap_year};

/// ## Summary
/// Computes the date that follows `anchor` in a recurrence of the given
/// periodicity.
///
/// - daily and weekly add 1 and 7 days;
/// - monthly keeps the anchor's day-of-month and skips every month too short
///   to contain it;
/// - yearly keeps month and day, except that a February 29 anchor moves to
///   the next leap year.
///
/// Monthly and February 29 results later than `horizon` yield `None`.
/// Daily, weekly and ordinary yearly steps are returned as is and bounded
/// by the caller.
///
/// Returns `None` for [`Periodicity::None`] and when the date would leave
/// the representable calendar range.
#[must_use]
pub fn next_occurrence(
    anchor: NaiveDate,
    periodicity: Periodicity,
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    match periodicity {
        Periodicity::None => None,
        Periodicity::Daily => anchor.checked_add_days(Days::new(1)),
        Periodicity::Weekly => anchor.checked_add_days(Days::new(7)),
        Periodicity::Monthly => next_monthly(anchor, horizon),
        Periodicity::Yearly => next_yearly(anchor, horizon),
    }
}

fn next_monthly(anchor: NaiveDate, horizon: NaiveDate) -> Option<NaiveDate> {
    let day = anchor.day();
    let (mut year, mut month) = (anchor.year(), anchor.month());

    loop {
        (year, month) = following_month(year, month)?;

        if NaiveDate::from_ymd_opt(year, month, 1)? > horizon {
            return None;
        }

        if day <= days_in_month(year, month) {
            let candidate = NaiveDate::from_ymd_opt(year, month, day)?;
            return (candidate <= horizon).then_some(candidate);
        }

        tracing::trace!(year, month, day, "Month too short for anchor day, skipping");
    }
}

fn following_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}

fn next_yearly(anchor: NaiveDate, horizon: NaiveDate) -> Option<NaiveDate> {
    if anchor.month() == 2 && anchor.day() == 29 {
        let mut year = anchor.year();
        loop {
            year = year.checked_add(1)?;
            if is_leap_year(year) {
                let candidate = NaiveDate::from_ymd_opt(year, 2, 29)?;
                return (candidate <= horizon).then_some(candidate);
            }
        }
    }

    NaiveDate::from_ymd_opt(anchor.year().checked_add(1)?, anchor.month(), anchor.day())
}
