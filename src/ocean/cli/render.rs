//! # Rendering
//!
//! Layout calculations (width, truncation, padding) run on plain text first;
//! colors are applied last so they never skew the column math.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use colored::Colorize;
use ocean::api::{CmdMessage, MessageLevel};
use ocean::config::OceanConfig;
use ocean::index::DisplayTodo;
use ocean::model::{Filter, Priority};
use ocean::state::Counts;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const INDEX_WIDTH: usize = 6;
const CHECK_WIDTH: usize = 4;
const PRIORITY_WIDTH: usize = 7;
const DUE_WIDTH: usize = 17;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Everything the list view needs, gathered from a `CmdResult`.
pub struct ListView<'a> {
    pub todos: &'a [DisplayTodo],
    pub counts: Counts,
    pub filter: Filter,
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
}

/// Renders the filter chips, the todo lines and the footer.
pub fn render_todo_list(view: &ListView<'_>) -> String {
    let mut out = String::new();

    out.push_str(&render_chips(view.filter, view.counts));
    out.push_str("\n\n");

    if view.todos.is_empty() {
        out.push_str(&format!(
            "    {}\n",
            "No todos to show. Add one with `ocean add <title>`.".dimmed()
        ));
    } else {
        for dt in view.todos {
            out.push_str(&render_line(dt, view.today, view.now));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "    {}\n",
        format!(
            "{} active / {} completed - {} total",
            view.counts.active, view.counts.completed, view.counts.total
        )
        .dimmed()
    ));
    out
}

fn render_chips(active: Filter, counts: Counts) -> String {
    let chips: Vec<String> = Filter::ALL
        .iter()
        .map(|f| {
            let count = match f {
                Filter::All => counts.total,
                Filter::Active => counts.active,
                Filter::Completed => counts.completed,
            };
            let label = format!("{} ({})", capitalize(f.as_str()), count);
            if *f == active {
                format!("[{}]", label).bold().cyan().to_string()
            } else {
                format!(" {} ", label).dimmed().to_string()
            }
        })
        .collect();
    format!("  {}", chips.join("  "))
}

fn render_line(dt: &DisplayTodo, today: NaiveDate, now: DateTime<Utc>) -> String {
    let todo = &dt.todo;

    let index = format!("{:>4}. ", dt.index);
    let check = if todo.completed { "[x] " } else { "[ ] " };

    let priority = format!("{:<width$}", todo.priority.as_str(), width = PRIORITY_WIDTH);

    let overdue = todo.is_overdue(today);
    let due = match &todo.due_date {
        Some(date) if overdue => format!("due {} !", date),
        Some(date) => format!("due {}", date),
        None => String::new(),
    };
    let due = pad_to_width(&truncate_to_width(&due, DUE_WIDTH), DUE_WIDTH);

    let time_ago = format_time_ago(todo.created_at, now);

    let fixed = INDEX_WIDTH + CHECK_WIDTH + 1 + PRIORITY_WIDTH + DUE_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title = pad_to_width(&truncate_to_width(&todo.title, available), available);

    let index = index.yellow();
    let check = if todo.completed {
        check.green()
    } else {
        check.normal()
    };
    let title = if todo.completed {
        title.dimmed().strikethrough()
    } else {
        title.normal()
    };
    let priority = match todo.priority {
        Priority::High => priority.red(),
        Priority::Medium => priority.yellow(),
        Priority::Low => priority.blue(),
    };
    let due = if overdue { due.red().bold() } else { due.dimmed() };

    format!(
        "{}{}{} {}{}{}",
        index,
        check,
        title,
        priority,
        due,
        time_ago.dimmed()
    )
}

pub fn render_config(config: &OceanConfig) -> String {
    OceanConfig::KEYS
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Relative age of an epoch-millisecond timestamp, right-aligned.
pub fn format_time_ago(created_at_ms: i64, now: DateTime<Utc>) -> String {
    let Some(created) = Utc.timestamp_millis_opt(created_at_ms).single() else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = now.signed_duration_since(created);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean::index::index_todos;
    use ocean::model::Todo;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn truncates_long_titles_with_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a very long title indeed", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }

    #[test]
    fn list_shows_titles_counts_and_overdue_marker() {
        let mut late = Todo::new("Pay rent", Priority::High, Some("2024-05-01".into()));
        late.created_at = 0;
        let mut done = Todo::new("Walk dog", Priority::Low, None);
        done.completed = true;
        let todos = vec![late, done];
        let listed = index_todos(&todos);

        let out = render_todo_list(&ListView {
            todos: &listed,
            counts: Counts {
                total: 2,
                active: 1,
                completed: 1,
            },
            filter: Filter::All,
            today: today(),
            now: Utc::now(),
        });

        assert!(out.contains("Pay rent"));
        assert!(out.contains("Walk dog"));
        assert!(out.contains("due 2024-05-01 !"));
        assert!(out.contains("All (2)"));
        assert!(out.contains("1 active / 1 completed - 2 total"));
    }

    #[test]
    fn empty_list_shows_hint() {
        let out = render_todo_list(&ListView {
            todos: &[],
            counts: Counts::default(),
            filter: Filter::Active,
            today: today(),
            now: Utc::now(),
        });
        assert!(out.contains("No todos to show."));
        assert!(out.contains("Active (0)"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&OceanConfig::default());
        assert!(out.contains("default-priority = medium"));
        assert!(out.contains("confirm-clear-all = true"));
    }

    #[test]
    fn time_ago_is_fixed_width() {
        let now = Utc::now();
        let s = format_time_ago(now.timestamp_millis() - 5 * 60 * 1000, now);
        assert_eq!(s.chars().count(), TIME_WIDTH);
    }
}
