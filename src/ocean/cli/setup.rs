use clap::{CommandFactory, Parser, Subcommand};
use ocean::model::Filter;

#[derive(Parser, Debug)]
#[command(
    name = "ocean",
    bin_name = "ocean",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "A small, local-first task list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Todo,
    Bulk,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Todo => "Per-Todo Commands:",
            CommandGroup::Bulk => "Bulk Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "add" | "filter" => Some(CommandGroup::Core),
            "toggle" | "edit" | "priority" | "due" | "delete" => Some(CommandGroup::Todo),
            "complete-all" | "uncomplete-all" | "clear-completed" | "clear-all" => {
                Some(CommandGroup::Bulk)
            }
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Todo,
            CommandGroup::Bulk,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("ocean {version}\n"));
    output.push_str("A small, local-first task list\n");
    output.push('\n');
    output.push_str("Usage: ocean [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<16} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Items are display indexes from `ocean list` (1 2 3) or full ids.\n");
    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Commands) {
    let mut cmd = Cli::command();
    let name = command.name();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos in the current filter
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Show another filter without changing the saved one
        #[arg(short, long)]
        filter: Option<Filter>,
    },

    /// Add a todo
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Priority: low, medium or high (anything else counts as medium)
        #[arg(short, long)]
        priority: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Title words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Choose which todos are listed: all, active or completed
    #[command(alias = "f", display_order = 3)]
    Filter { filter: Filter },

    /// Toggle one or more todos between active and completed
    #[command(alias = "t", display_order = 10)]
    Toggle {
        /// Items to toggle (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },

    /// Rename a todo
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Item to rename
        item: String,

        /// New title words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Set a todo's priority, or cycle it (low, medium, high) when no level is given
    #[command(alias = "p", display_order = 12)]
    Priority {
        item: String,
        level: Option<String>,
    },

    /// Set a todo's due date, or clear it when no date is given
    #[command(display_order = 13)]
    Due { item: String, date: Option<String> },

    /// Delete one or more todos
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Items to delete (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },

    /// Mark every todo as completed
    #[command(display_order = 20)]
    CompleteAll,

    /// Mark every todo as active
    #[command(display_order = 21)]
    UncompleteAll,

    /// Remove all completed todos
    #[command(display_order = 22)]
    ClearCompleted,

    /// Remove ALL todos (asks for confirmation)
    #[command(display_order = 23)]
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-priority, confirm-clear-all)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Add { .. } => "add",
            Commands::Filter { .. } => "filter",
            Commands::Toggle { .. } => "toggle",
            Commands::Edit { .. } => "edit",
            Commands::Priority { .. } => "priority",
            Commands::Due { .. } => "due",
            Commands::Delete { .. } => "delete",
            Commands::CompleteAll => "complete-all",
            Commands::UncompleteAll => "uncomplete-all",
            Commands::ClearCompleted => "clear-completed",
            Commands::ClearAll { .. } => "clear-all",
            Commands::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_a_help_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::try_parse_from([
            "ocean", "add", "-p", "high", "--due", "2024-06-01", "Write", "report",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                priority,
                due,
                title,
            }) => {
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(due.as_deref(), Some("2024-06-01"));
                assert_eq!(title, vec!["Write", "report"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn parses_filter_values() {
        let cli = Cli::try_parse_from(["ocean", "filter", "completed"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Filter {
                filter: Filter::Completed
            })
        ));
        assert!(Cli::try_parse_from(["ocean", "filter", "done"]).is_err());
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::try_parse_from(["ocean", "rm", "1", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { ref items }) if items.len() == 2));
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = get_grouped_help();
        assert!(help.contains("Bulk Commands:"));
        assert!(help.contains("clear-completed"));
    }
}
