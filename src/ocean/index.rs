//! Display indexes.
//!
//! Ids are opaque and long, so the CLI lets users point at todos by their
//! 1-based position in the listed view instead. A raw id is still accepted
//! anywhere an index is.

use crate::model::Todo;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: Todo,
}

/// A user input pointing at a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSelector {
    Index(usize),
    Id(String),
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty todo selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(TodoSelector::Index(n)),
            Err(_) => Ok(TodoSelector::Id(s.to_string())),
        }
    }
}

impl fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoSelector::Index(n) => write!(f, "{}", n),
            TodoSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Numbers todos in the order given, starting at 1.
pub fn index_todos<'a, I>(todos: I) -> Vec<DisplayTodo>
where
    I: IntoIterator<Item = &'a Todo>,
{
    todos
        .into_iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            index: i + 1,
            todo: todo.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    #[test]
    fn parses_indexes_and_ids() {
        assert_eq!("3".parse::<TodoSelector>().unwrap(), TodoSelector::Index(3));
        assert_eq!(
            "lk2m_ab12cd".parse::<TodoSelector>().unwrap(),
            TodoSelector::Id("lk2m_ab12cd".into())
        );
        assert!("0".parse::<TodoSelector>().is_err());
        assert!("  ".parse::<TodoSelector>().is_err());
    }

    #[test]
    fn indexes_start_at_one() {
        let todos = vec![
            Todo::new("A", Priority::Low, None),
            Todo::new("B", Priority::Low, None),
        ];
        let indexed = index_todos(&todos);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].todo.title, "B");
    }
}
