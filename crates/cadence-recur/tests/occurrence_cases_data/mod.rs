use cadence_core::model::{EventDraft, Periodicity, RepeatRule, TimeOfDay};
use chrono::NaiveDate;

use crate::expand::generate_recurring_events;
use crate::id::SequentialIds;

pub struct OccurrenceCase {
    pub name: &'static str,
    pub start: &'static str,
    pub periodicity: Periodicity,
    pub end_date: Option<&'static str>,
    pub horizon: &'static str,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn occurrence_cases() -> Vec<OccurrenceCase> {
    vec![
        OccurrenceCase {
            name: "daily_five_days",
            start: "2025-01-01",
            periodicity: Periodicity::Daily,
            end_date: Some("2025-01-05"),
            horizon: "2025-12-31",
            expected: &[
                "2025-01-01",
                "2025-01-02",
                "2025-01-03",
                "2025-01-04",
                "2025-01-05",
            ],
        },
        OccurrenceCase {
            name: "weekly_five_weeks",
            start: "2025-01-01",
            periodicity: Periodicity::Weekly,
            end_date: Some("2025-01-29"),
            horizon: "2025-12-31",
            expected: &[
                "2025-01-01",
                "2025-01-08",
                "2025-01-15",
                "2025-01-22",
                "2025-01-29",
            ],
        },
        OccurrenceCase {
            name: "monthly_mid_month",
            start: "2025-01-15",
            periodicity: Periodicity::Monthly,
            end_date: Some("2025-04-15"),
            horizon: "2025-12-31",
            expected: &["2025-01-15", "2025-02-15", "2025-03-15", "2025-04-15"],
        },
        OccurrenceCase {
            name: "monthly_31st_skips_short_months",
            start: "2025-01-31",
            periodicity: Periodicity::Monthly,
            end_date: Some("2025-12-31"),
            horizon: "2025-12-31",
            expected: &[
                "2025-01-31",
                "2025-03-31",
                "2025-05-31",
                "2025-07-31",
                "2025-08-31",
                "2025-10-31",
                "2025-12-31",
            ],
        },
        OccurrenceCase {
            name: "monthly_30th_skips_february",
            start: "2025-01-30",
            periodicity: Periodicity::Monthly,
            end_date: Some("2025-04-30"),
            horizon: "2025-12-31",
            expected: &["2025-01-30", "2025-03-30", "2025-04-30"],
        },
        OccurrenceCase {
            name: "monthly_29th_in_leap_year",
            start: "2024-01-29",
            periodicity: Periodicity::Monthly,
            end_date: Some("2024-03-29"),
            horizon: "2025-12-31",
            expected: &["2024-01-29", "2024-02-29", "2024-03-29"],
        },
        OccurrenceCase {
            name: "yearly_leap_day_past_horizon",
            start: "2024-02-29",
            periodicity: Periodicity::Yearly,
            end_date: Some("2030-12-31"),
            horizon: "2025-12-31",
            expected: &["2024-02-29"],
        },
        OccurrenceCase {
            name: "yearly_leap_day_skips_century",
            start: "2096-02-29",
            periodicity: Periodicity::Yearly,
            end_date: None,
            horizon: "2104-12-31",
            expected: &["2096-02-29", "2104-02-29"],
        },
        OccurrenceCase {
            name: "yearly_capped_by_horizon",
            start: "2025-06-01",
            periodicity: Periodicity::Yearly,
            end_date: Some("2027-06-01"),
            horizon: "2025-12-31",
            expected: &["2025-06-01"],
        },
        OccurrenceCase {
            name: "daily_open_ended",
            start: "2025-12-25",
            periodicity: Periodicity::Daily,
            end_date: None,
            horizon: "2025-12-31",
            expected: &[
                "2025-12-25",
                "2025-12-26",
                "2025-12-27",
                "2025-12-28",
                "2025-12-29",
                "2025-12-30",
                "2025-12-31",
            ],
        },
        OccurrenceCase {
            name: "daily_end_equals_start",
            start: "2025-01-01",
            periodicity: Periodicity::Daily,
            end_date: Some("2025-01-01"),
            horizon: "2025-12-31",
            expected: &["2025-01-01"],
        },
        OccurrenceCase {
            name: "daily_end_before_start",
            start: "2025-01-05",
            periodicity: Periodicity::Daily,
            end_date: Some("2025-01-01"),
            horizon: "2025-12-31",
            expected: &[],
        },
        OccurrenceCase {
            name: "none_keeps_date",
            start: "2025-03-10",
            periodicity: Periodicity::None,
            end_date: Some("2025-01-01"),
            horizon: "2025-12-31",
            expected: &["2025-03-10"],
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}

pub fn assert_case(case: &OccurrenceCase) {
    let mut repeat = RepeatRule::every(case.periodicity);
    repeat.end_date = case.end_date.map(parse_date);

    let draft = EventDraft {
        title: case.name.to_string(),
        date: parse_date(case.start),
        start_time: TimeOfDay::from_hm(10, 0).unwrap_or_else(|| panic!("valid time")),
        end_time: TimeOfDay::from_hm(11, 0).unwrap_or_else(|| panic!("valid time")),
        description: String::new(),
        location: String::new(),
        category: String::new(),
        repeat,
        notification_time: 10,
    };

    let ids = SequentialIds::new(case.name);
    let events = generate_recurring_events(&draft, parse_date(case.horizon), &ids);
    let actual: Vec<String> = events.iter().map(|e| e.date().to_string()).collect();

    assert_eq!(actual, case.expected, "Case {} did not match", case.name);

    if case.periodicity.is_repeating() {
        assert!(
            events
                .iter()
                .all(|e| e.repeat_parent_id.is_some() && e.repeat_parent_id == events[0].repeat_parent_id),
            "Case {} has inconsistent repeat parent ids",
            case.name
        );
    } else {
        assert!(
            events.iter().all(|e| e.repeat_parent_id.is_none()),
            "Case {} should not carry a repeat parent id",
            case.name
        );
    }
}
