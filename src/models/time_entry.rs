//! Time entry model.
//!
//! A [`TimeEntry`] is a single clocked block of work as it arrives from the
//! time-tracking store. Fields are optional because upstream records are
//! frequently incomplete; the helpers here resolve each entry to one
//! effective hour figure and one worker key before any aggregation happens.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Worker key used when an entry carries neither a personnel id nor a user id.
pub const UNKNOWN_WORKER_KEY: &str = "unknown";

/// A single time-tracking record.
///
/// # Example
///
/// ```
/// use labor_engine::models::TimeEntry;
///
/// let entry: TimeEntry = serde_json::from_str(
///     r#"{"personnel_id": "A", "hours": 8.5, "is_holiday": false, "hourly_rate": 32.0}"#,
/// ).unwrap();
///
/// assert_eq!(entry.worker_key(), "A");
/// assert_eq!(entry.effective_hours(), 8.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Identifier of the source record, carried through to audit output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Personnel record the entry belongs to.
    #[serde(default, alias = "personnelId")]
    pub personnel_id: Option<String>,
    /// Login account that clocked the entry.
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    /// Total hours worked in this entry.
    #[serde(default)]
    pub hours: Option<f64>,
    /// Regular hours, used together with `overtime_hours` when `hours` is absent.
    #[serde(default, alias = "regularHours")]
    pub regular_hours: Option<f64>,
    /// Overtime hours, used together with `regular_hours` when `hours` is absent.
    #[serde(default, alias = "overtimeHours")]
    pub overtime_hours: Option<f64>,
    /// Whether the hours were worked on a paid holiday. `null` reads as `false`.
    #[serde(default, alias = "isHoliday", deserialize_with = "null_as_false")]
    pub is_holiday: bool,
    /// Hourly pay rate recorded against the entry.
    #[serde(default, alias = "hourlyRate")]
    pub hourly_rate: Option<f64>,
    /// The date the work was performed.
    #[serde(default, alias = "workDate", alias = "date")]
    pub work_date: Option<NaiveDate>,
}

impl TimeEntry {
    /// Creates an entry for a personnel record with a plain hour count.
    pub fn for_personnel(personnel_id: impl Into<String>, hours: f64) -> Self {
        Self {
            personnel_id: Some(personnel_id.into()),
            hours: Some(hours),
            ..Self::default()
        }
    }

    /// Creates an entry keyed only by a user account.
    pub fn for_user(user_id: impl Into<String>, hours: f64) -> Self {
        Self {
            user_id: Some(user_id.into()),
            hours: Some(hours),
            ..Self::default()
        }
    }

    /// Marks the entry as holiday work.
    pub fn holiday(mut self) -> Self {
        self.is_holiday = true;
        self
    }

    /// Sets the entry's hourly rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Sets the entry's work date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.work_date = Some(date);
        self
    }

    /// Returns the hours this entry contributes to its worker's total.
    ///
    /// `hours` wins when present. Otherwise the split fields are summed,
    /// with a missing side counted as zero. Values are not validated, so a
    /// negative or `NaN` input comes straight back out.
    ///
    /// ```
    /// use labor_engine::models::TimeEntry;
    ///
    /// let entry = TimeEntry {
    ///     regular_hours: Some(38.0),
    ///     overtime_hours: Some(4.0),
    ///     ..TimeEntry::default()
    /// };
    /// assert_eq!(entry.effective_hours(), 42.0);
    /// ```
    pub fn effective_hours(&self) -> f64 {
        match self.hours {
            Some(hours) => hours,
            None => self.regular_hours.unwrap_or(0.0) + self.overtime_hours.unwrap_or(0.0),
        }
    }

    /// Returns the key that groups this entry with the rest of its worker's time.
    ///
    /// Resolution order is personnel id, then user id, then
    /// [`UNKNOWN_WORKER_KEY`]. Empty strings are skipped.
    pub fn worker_key(&self) -> &str {
        non_empty(self.personnel_id.as_deref())
            .or_else(|| non_empty(self.user_id.as_deref()))
            .unwrap_or(UNKNOWN_WORKER_KEY)
    }

    /// Returns the recorded rate if it is present and non-zero.
    pub fn known_rate(&self) -> Option<f64> {
        self.hourly_rate.filter(|rate| *rate != 0.0)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
