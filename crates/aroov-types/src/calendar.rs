use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Event type the backend assigns to availability the user entered.
pub const USER_AVAILABILITY: &str = "user_avail";

/// Calendar feed entry (`GET /api/user/calendar`).
///
/// The feed mixes the user's own availability with read-only events such as
/// group trips. Custom properties may sit at the top level or, when echoed
/// back from a calendar widget, under `extendedProps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    pub start: String,

    #[serde(default)]
    pub end: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,

    #[serde(
        rename = "extendedProps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    extended_props: Option<ExtendedProps>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct ExtendedProps {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl CalendarEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: start.into(),
            end: None,
            kind: None,
            extended_props: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind
            .as_deref()
            .or_else(|| self.extended_props.as_ref()?.kind.as_deref())
    }

    /// Only availability the user entered can be removed from the client.
    pub fn is_user_availability(&self) -> bool {
        self.kind() == Some(USER_AVAILABILITY)
    }
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// A selected day range. The end is exclusive, as calendar selections are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end_exclusive: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end_exclusive: NaiveDate) -> Result<Self> {
        if end_exclusive <= start {
            return Err(Error::InvalidInput(format!(
                "Range end {} must be after start {}",
                end_exclusive, start
            )));
        }
        Ok(Self {
            start,
            end_exclusive,
        })
    }

    /// Build from an inclusive last day, as typed on the command line.
    pub fn inclusive(start: NaiveDate, last_day: NaiveDate) -> Result<Self> {
        let end = last_day
            .checked_add_days(Days::new(1))
            .ok_or_else(|| Error::InvalidInput(format!("Date out of range: {}", last_day)))?;
        Self::new(start, end)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end_exclusive
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.start)
    }

    /// Human label with the inclusive end, e.g. `2025-03-01 to 2025-03-03`.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.last_day().format("%Y-%m-%d")
        )
    }
}

/// Body of `POST /api/user/availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub note: String,
}

impl AvailabilityRequest {
    pub fn new(range: DateRange, note: impl Into<String>) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end_exclusive,
            note: note.into(),
        }
    }
}
