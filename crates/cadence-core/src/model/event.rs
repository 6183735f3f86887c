use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RepeatRule, TimeOfDay};

/// An event as entered by a user, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatRule,
    /// Minutes before the start at which a reminder fires.
    #[serde(default)]
    pub notification_time: u32,
}

/// A stored (or about to be stored) event.
///
/// Serialized flat: the draft's fields sit next to `id` and
/// `repeatParentId`, and `repeatParentId` is omitted entirely for events
/// that are not part of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Empty until the store assigns one.
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub draft: EventDraft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_parent_id: Option<String>,
}

impl Event {
    /// Builds a standalone event from a draft.
    #[must_use]
    pub fn single(id: impl Into<String>, draft: EventDraft) -> Self {
        Self {
            id: id.into(),
            draft,
            repeat_parent_id: None,
        }
    }

    /// Builds one occurrence of a series, with `date` replacing the draft's date.
    #[must_use]
    pub fn occurrence(
        id: impl Into<String>,
        draft: &EventDraft,
        date: NaiveDate,
        repeat_parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            draft: EventDraft {
                date,
                ..draft.clone()
            },
            repeat_parent_id: Some(repeat_parent_id.into()),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.draft.date
    }

    #[must_use]
    pub fn belongs_to_series(&self) -> bool {
        self.repeat_parent_id.is_some()
    }

    /// Removes the event from its series: it no longer repeats and drops
    /// its `repeatParentId`.
    #[must_use]
    pub fn detached(mut self) -> Self {
        self.draft.repeat.periodicity = super::Periodicity::None;
        self.repeat_parent_id = None;
        self
    }
}
