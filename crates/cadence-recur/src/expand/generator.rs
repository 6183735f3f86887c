use std::sync::Arc;

use cadence_core::config::RecurrenceConfig;
use cadence_core::model::{Event, EventDraft, Periodicity, RepeatRule};
use chrono::NaiveDate;

use super::generate::{effective_end_date, generate_recurring_events};
use super::next::next_occurrence;
use crate::id::{IdSource, id_source_for};

/// A horizon paired with the id source used for every expansion.
#[derive(Clone)]
pub struct OccurrenceGenerator {
    horizon: NaiveDate,
    ids: Arc<dyn IdSource>,
}

impl OccurrenceGenerator {
    #[must_use]
    pub fn new(horizon: NaiveDate, ids: Arc<dyn IdSource>) -> Self {
        Self { horizon, ids }
    }

    /// Builds a generator from the `recurrence` section of the settings.
    #[must_use]
    pub fn from_config(config: &RecurrenceConfig) -> Self {
        Self::new(config.horizon, id_source_for(config.id_format))
    }

    #[must_use]
    pub const fn horizon(&self) -> NaiveDate {
        self.horizon
    }

    /// The id source shared with callers that mint ids outside expansion.
    #[must_use]
    pub fn ids(&self) -> Arc<dyn IdSource> {
        Arc::clone(&self.ids)
    }

    #[must_use]
    pub fn generate(&self, draft: &EventDraft) -> Vec<Event> {
        generate_recurring_events(draft, self.horizon, &*self.ids)
    }

    #[must_use]
    pub fn next(&self, anchor: NaiveDate, periodicity: Periodicity) -> Option<NaiveDate> {
        next_occurrence(anchor, periodicity, self.horizon)
    }

    #[must_use]
    pub fn effective_end(&self, rule: &RepeatRule) -> NaiveDate {
        effective_end_date(rule, self.horizon)
    }
}

impl std::fmt::Debug for OccurrenceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OccurrenceGenerator")
            .field("horizon", &self.horizon)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use cadence_core::config::IdFormat;
    use cadence_core::model::TimeOfDay;

    use super::*;
    use crate::id::SequentialIds;

    #[test]
    fn test_generator_uses_its_horizon_and_ids() {
        let horizon = NaiveDate::from_ymd_opt(2025, 1, 3).expect("valid");
        let generator = OccurrenceGenerator::new(horizon, Arc::new(SequentialIds::new("g")));
        let draft = EventDraft {
            title: "Standup".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid"),
            start_time: TimeOfDay::from_hm(9, 0).expect("valid"),
            end_time: TimeOfDay::from_hm(9, 15).expect("valid"),
            description: String::new(),
            location: String::new(),
            category: "work".to_string(),
            repeat: RepeatRule::every(Periodicity::Daily),
            notification_time: 1,
        };

        let events = generator.generate(&draft);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].repeat_parent_id.as_deref(), Some("g-1"));
        assert_eq!(events[0].id, "g-2");
        assert_eq!(generator.effective_end(&draft.repeat), horizon);
        assert_eq!(generator.ids().next_id(), "g-5");
    }

    #[test]
    fn test_from_config() {
        let config = RecurrenceConfig {
            horizon: NaiveDate::from_ymd_opt(2030, 12, 31).expect("valid"),
            id_format: IdFormat::UuidV7,
        };

        let generator = OccurrenceGenerator::from_config(&config);

        assert_eq!(generator.horizon(), config.horizon);
        assert_eq!(
            generator.next(
                NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid"),
                Periodicity::Yearly
            ),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
        assert!(format!("{generator:?}").contains("2030-12-31"));
    }
}
