use chrono::NaiveDate;

/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";

pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const EVENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", EVENTS_ROUTE_COMPONENT);

pub const RECURRING_ROUTE_COMPONENT: &str = "recurring";

/// Textual form of [`DEFAULT_HORIZON`], used as the configuration default.
pub const DEFAULT_HORIZON_STR: &str = "2025-12-31";

/// Last date any recurrence may produce unless configured otherwise.
pub const DEFAULT_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(date) => date,
    None => panic!("default horizon is a valid calendar date"),
};

/// Wire format of calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of times of day (`HH:MM`).
pub const TIME_FORMAT: &str = "%H:%M";
