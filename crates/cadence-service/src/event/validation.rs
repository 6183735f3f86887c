//! Input checks for event drafts.

use cadence_core::constants::DATE_FORMAT;
use cadence_core::model::{EventDraft, RepeatRule};
use chrono::NaiveDate;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Rejects drafts with a blank title or a start time not before the end time.
///
/// ## Errors
/// Returns `ValidationError` describing the first problem found.
pub fn validate_draft(draft: &EventDraft) -> ServiceResult<()> {
    if draft.title.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "title must not be empty".to_string(),
        ));
    }

    if draft.start_time >= draft.end_time {
        return Err(ServiceError::ValidationError(format!(
            "start time {} must be before end time {}",
            draft.start_time, draft.end_time
        )));
    }

    Ok(())
}

/// Why a repeat end date would not be accepted by an input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatEndDateIssue {
    BeforeStart { end: NaiveDate, start: NaiveDate },
    PastHorizon { end: NaiveDate, horizon: NaiveDate },
}

impl std::fmt::Display for RepeatEndDateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeStart { end, start } => write!(
                f,
                "repeat end date {} is before start date {}",
                end.format(DATE_FORMAT),
                start.format(DATE_FORMAT)
            ),
            Self::PastHorizon { end, horizon } => write!(
                f,
                "repeat end date {} is after {}",
                end.format(DATE_FORMAT),
                horizon.format(DATE_FORMAT)
            ),
        }
    }
}

/// ## Summary
/// Checks a repeat end date against the start date and the horizon.
///
/// A missing end date is always acceptable.
#[must_use]
pub fn check_repeat_end_date(
    rule: &RepeatRule,
    start: NaiveDate,
    horizon: NaiveDate,
) -> Option<RepeatEndDateIssue> {
    let end = rule.end_date?;
    if end < start {
        Some(RepeatEndDateIssue::BeforeStart { end, start })
    } else if end > horizon {
        Some(RepeatEndDateIssue::PastHorizon { end, horizon })
    } else {
        None
    }
}
