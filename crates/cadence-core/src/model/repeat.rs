use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often an event repeats.
///
/// `None` means the event does not repeat; interval and end date of the
/// surrounding [`RepeatRule`] are ignored in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Periodicity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub const fn is_repeating(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat rule attached to an event.
///
/// `interval` is carried for clients but recurrence always advances by a
/// single day, week, month or year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub periodicity: Periodicity,
    #[serde(default)]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    /// A rule for an event that does not repeat.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            periodicity: Periodicity::None,
            interval: 0,
            end_date: None,
        }
    }

    /// A single-step rule with no end date.
    #[must_use]
    pub const fn every(periodicity: Periodicity) -> Self {
        Self {
            periodicity,
            interval: 1,
            end_date: None,
        }
    }

    #[must_use]
    pub const fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.periodicity.is_repeating()
    }
}
