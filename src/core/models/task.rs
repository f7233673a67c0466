use crate::constants::NO_DUE_DATE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => f.write_str("Low"),
            Priority::Medium => f.write_str("Medium"),
            Priority::High => f.write_str("High"),
        }
    }
}

/// Due date/time as entered on the task form: `YYYY-MM-DD` or
/// `YYYY-MM-DD HH:MM`, or unset. Persists as the display string, with
/// `"No Due Date"` standing in for unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DueDateTime(Option<String>);

impl DueDateTime {
    pub fn none() -> Self {
        DueDateTime(None)
    }

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value == NO_DUE_DATE {
            DueDateTime(None)
        } else {
            DueDateTime(Some(value))
        }
    }

    /// Combines the date and time form fields. A time without a date is
    /// ignored, matching the task form.
    pub fn combine(date: &str, time: &str) -> Self {
        match (date.trim(), time.trim()) {
            ("", _) => DueDateTime(None),
            (date, "") => DueDateTime(Some(date.to_string())),
            (date, time) => DueDateTime(Some(format!("{} {}", date, time))),
        }
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Display string; the sentinel when unset.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(NO_DUE_DATE)
    }
}

impl fmt::Display for DueDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DueDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DueDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(DueDateTime::new(String::deserialize(deserializer)?))
    }
}

/// One to-do item. Field names persist in camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: u64,
    pub task: String,
    pub priority: Priority,
    pub due_date_time: DueDateTime,
    pub completed: bool,
}
