use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CalendarEventEntry {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub kind: Option<String>,
    pub removable: bool,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityListViewModel {
    pub events: Vec<CalendarEventEntry>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityAddedViewModel {
    pub start_date: NaiveDate,
    /// Inclusive.
    pub last_day: NaiveDate,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityRemovedViewModel {
    pub id: String,
    pub title: String,
    pub removed: bool,
}
