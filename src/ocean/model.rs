use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Date format produced by date pickers and accepted by `--due`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lenient parse: anything that is not a known level becomes `Medium`.
    pub fn coerce(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Next level in the low -> medium -> high -> low rotation.
    pub fn cycle(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Decodes leniently: any value that is not a known level string, including
/// `null` and numbers, becomes `Medium` instead of failing the whole record.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Priority::coerce).unwrap_or_default())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the collection is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!("Unknown filter: {}", other)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task entry.
///
/// Serialized with camelCase keys (`dueDate`, `createdAt`) so the stored
/// collection stays readable by any client sharing the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
}

impl Todo {
    /// Builds a fresh record. The caller is responsible for rejecting blank titles.
    pub fn new(title: &str, priority: Priority, due_date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            completed: false,
            priority,
            due_date: normalize_due_date(due_date),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// A todo is overdue when it is still open and its due date is before `today`.
    /// Dates that don't parse are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        self.due_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DUE_DATE_FORMAT).ok())
            .is_some_and(|due| due < today)
    }
}

/// Empty due dates mean "no due date".
pub fn normalize_due_date(due_date: Option<String>) -> Option<String> {
    due_date.filter(|d| !d.trim().is_empty())
}

/// Options accepted when adding a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Accepts raw user input; unknown levels are coerced to `Medium`.
    pub fn priority_str(mut self, raw: &str) -> Self {
        self.priority = Some(Priority::coerce(raw));
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Partial update of a todo. Only these fields can be changed after creation;
/// `id`, `completed` and `created_at` are out of reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    /// `Some(None)` clears the due date.
    pub due_date: Option<Option<String>>,
}

impl TodoUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn due_date(due_date: Option<String>) -> Self {
        Self {
            due_date: Some(due_date),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.due_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DUE_DATE_FORMAT).unwrap()
    }

    #[test]
    fn new_todo_has_defaults() {
        let todo = Todo::new("  Buy milk ", Priority::default(), None);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.priority, Priority::Medium);
        assert!(todo.due_date.is_none());
        assert!(todo.created_at > 0);
    }

    #[test]
    fn ids_are_unique() {
        let a = Todo::new("A", Priority::Low, None);
        let b = Todo::new("A", Priority::Low, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn priority_coerces_unknown_values() {
        assert_eq!(Priority::coerce("high"), Priority::High);
        assert_eq!(Priority::coerce("urgent"), Priority::Medium);
        assert_eq!(Priority::coerce(""), Priority::Medium);
        assert_eq!(Priority::coerce("HIGH"), Priority::Medium);
    }

    #[test]
    fn priority_cycles_through_all_levels() {
        assert_eq!(Priority::Low.cycle(), Priority::Medium);
        assert_eq!(Priority::Medium.cycle(), Priority::High);
        assert_eq!(Priority::High.cycle(), Priority::Low);
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_due_date() {
        let mut todo = Todo::new("Walk dog", Priority::High, None);
        todo.id = "abc".into();
        todo.created_at = 42;
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "title": "Walk dog",
                "completed": false,
                "priority": "high",
                "createdAt": 42
            })
        );

        todo.due_date = Some("2024-05-01".into());
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dueDate"], "2024-05-01");
    }

    #[test]
    fn stored_out_of_range_priority_decodes_as_medium() {
        let raw = r#"{"id":"x","title":"T","completed":true,"priority":"urgent","createdAt":1}"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(todo.completed);
    }

    #[test]
    fn non_string_priority_decodes_as_medium() {
        for raw in ["null", "3", "true", "[\"high\"]", "{\"level\":\"high\"}"] {
            let priority: Priority = serde_json::from_str(raw).unwrap();
            assert_eq!(priority, Priority::Medium, "decoding {}", raw);
        }
        let high: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(high, Priority::High);
    }

    #[test]
    fn empty_due_date_is_dropped() {
        let todo = Todo::new("T", Priority::Low, Some("".into()));
        assert!(todo.due_date.is_none());
    }

    #[test]
    fn overdue_only_for_open_todos_with_past_dates() {
        let today = date("2024-05-10");
        let mut todo = Todo::new("T", Priority::Low, Some("2024-05-09".into()));
        assert!(todo.is_overdue(today));

        todo.due_date = Some("2024-05-10".into());
        assert!(!todo.is_overdue(today));

        todo.due_date = Some("2024-05-01".into());
        todo.completed = true;
        assert!(!todo.is_overdue(today));

        todo.completed = false;
        todo.due_date = Some("next tuesday".into());
        assert!(!todo.is_overdue(today));
    }

    #[test]
    fn filter_parses_known_values_only() {
        assert_eq!("active".parse::<Filter>().unwrap(), Filter::Active);
        assert!("done".parse::<Filter>().is_err());
        assert_eq!(Filter::default(), Filter::All);
    }
}
