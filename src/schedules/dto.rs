use serde::{Deserialize, Serialize};
use time::{format_description::FormatItem, macros::format_description, Date};
use uuid::Uuid;

use crate::error::ApiError;

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(s: &str) -> Result<Date, ApiError> {
    Date::parse(s, DATE_FORMAT)
        .map_err(|_| ApiError::Validation(format!("invalid date: {s}, expected YYYY-MM-DD")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Weekly,
}

impl Recurrence {
    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::Once => "once",
            Recurrence::Weekly => "weekly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "once" => Some(Recurrence::Once),
            "weekly" => Some(Recurrence::Weekly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub workout_id: Uuid,
    /// YYYY-MM-DD.
    pub date: String,
    pub recurrence: Recurrence,
    /// Only meaningful for weekly recurrence.
    #[serde(default)]
    pub days_of_week: Option<Vec<DayOfWeek>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub date: String,
    pub recurrence: Recurrence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DayOfWeek>>,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_iso_dates_and_rejects_garbage() {
        assert!(parse_date("2026-08-06").is_ok());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("06/08/2026").is_err());
        assert!(parse_date("soon").is_err());
    }

    #[test]
    fn payload_uses_camel_case() {
        let payload: SchedulePayload = serde_json::from_value(json!({
            "workoutId": "8f8b7e8a-7f6e-4b49-9a52-333333333333",
            "date": "2026-08-10",
            "recurrence": "weekly",
            "daysOfWeek": ["monday", "thursday"]
        }))
        .unwrap();
        assert_eq!(payload.recurrence, Recurrence::Weekly);
        assert_eq!(
            payload.days_of_week,
            Some(vec![DayOfWeek::Monday, DayOfWeek::Thursday])
        );
    }

    #[test]
    fn recurrence_text_round_trips() {
        for r in [Recurrence::Once, Recurrence::Weekly] {
            assert_eq!(Recurrence::parse(r.as_str()), Some(r));
        }
        assert_eq!(Recurrence::parse("daily"), None);
    }
}
