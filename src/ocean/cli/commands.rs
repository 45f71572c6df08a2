//! Command dispatch for the CLI.
//!
//! - `run()`: parses arguments, builds the context, dispatches
//! - `init_context()`: data directory, config, and the `TodoApi`
//! - `handle_*()`: per-command handlers that call the API and print

use super::edit::{EditDraft, EditOutcome};
use super::logging::init_logging;
use super::render::{print_messages, render_config, render_todo_list, ListView};
use super::setup::{print_grouped_help, print_subcommand_help, Cli, Commands};
use chrono::{Local, Utc};
use clap::Parser;
use directories::ProjectDirs;
use ocean::api::{CmdMessage, ConfigAction, TodoApi};
use ocean::commands::config as config_cmd;
use ocean::config::OceanConfig;
use ocean::error::{OceanError, Result};
use ocean::model::{AddOptions, Filter, Priority, TodoUpdate};
use ocean::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Overrides the data directory (useful for tests and portable installs).
pub const HOME_ENV: &str = "OCEAN_TASKS_HOME";

struct AppContext {
    api: TodoApi<FsBackend>,
    config: OceanConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            None => print_grouped_help(),
            Some(cmd) => print_subcommand_help(cmd),
        }
        return Ok(());
    }

    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { filter }) => handle_list(&ctx, filter),
        Some(Commands::Add {
            priority,
            due,
            title,
        }) => handle_add(&mut ctx, title.join(" "), priority, due),
        Some(Commands::Filter { filter }) => handle_filter(&mut ctx, filter),
        Some(Commands::Toggle { items }) => handle_toggle(&mut ctx, &items),
        Some(Commands::Edit { item, title }) => handle_edit(&mut ctx, &item, title.join(" ")),
        Some(Commands::Priority { item, level }) => handle_priority(&mut ctx, &item, level),
        Some(Commands::Due { item, date }) => handle_due(&mut ctx, &item, date),
        Some(Commands::Delete { items }) => handle_delete(&mut ctx, &items),
        Some(Commands::CompleteAll) => handle_toggle_all(&mut ctx, true),
        Some(Commands::UncompleteAll) => handle_toggle_all(&mut ctx, false),
        Some(Commands::ClearCompleted) => handle_clear_completed(&mut ctx),
        Some(Commands::ClearAll { yes }) => handle_clear_all(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("com", "ocean", "ocean-tasks")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OceanError::Store("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = OceanConfig::load_or_default(&data_dir);
    let api = TodoApi::new(FsBackend::new(data_dir.clone()));

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_list(ctx: &AppContext, filter: Option<Filter>) -> Result<()> {
    let result = ctx.api.list(filter);
    let view = ListView {
        todos: &result.listed_todos,
        counts: result.counts.unwrap_or_default(),
        filter: result.filter.unwrap_or(ctx.api.filter()),
        today: Local::now().date_naive(),
        now: Utc::now(),
    };
    print!("{}", render_todo_list(&view));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    priority: Option<String>,
    due: Option<String>,
) -> Result<()> {
    let mut options = match priority {
        Some(raw) => {
            warn_unknown_priority(&raw);
            AddOptions::new().priority_str(&raw)
        }
        None => AddOptions::new().priority(ctx.config.default_priority),
    };
    if let Some(due) = due {
        options = options.due_date(due);
    }

    let result = ctx.api.add(&title, options);
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, filter: Filter) -> Result<()> {
    let result = ctx.api.set_filter(filter);
    print_messages(&result.messages);
    handle_list(ctx, None)
}

fn handle_toggle(ctx: &mut AppContext, items: &[String]) -> Result<()> {
    // Resolve everything first: toggling can reshape the filtered view
    let ids = ctx.api.resolve(items)?;
    for id in ids {
        let result = ctx.api.toggle(&id);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, item: &str, title: String) -> Result<()> {
    let id = resolve_one(ctx, item)?;
    let current = match ctx.api.get(&id) {
        Some(todo) => todo.title.clone(),
        None => return Err(OceanError::TodoNotFound(id)),
    };

    let mut draft = EditDraft::new(&current);
    draft.set(title);
    match draft.commit() {
        EditOutcome::Reverted => {
            print_messages(&[CmdMessage::info("Title is empty, keeping the current one.")])
        }
        EditOutcome::Unchanged => print_messages(&[CmdMessage::info("Title unchanged.")]),
        EditOutcome::Changed(title) => {
            let result = ctx.api.update(&id, TodoUpdate::title(title));
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_priority(ctx: &mut AppContext, item: &str, level: Option<String>) -> Result<()> {
    let id = resolve_one(ctx, item)?;
    let priority = match level {
        Some(raw) => {
            warn_unknown_priority(&raw);
            Priority::coerce(&raw)
        }
        None => match ctx.api.get(&id) {
            Some(todo) => todo.priority.cycle(),
            None => return Err(OceanError::TodoNotFound(id)),
        },
    };

    let result = ctx.api.update(&id, TodoUpdate::priority(priority));
    print_messages(&result.messages);
    Ok(())
}

fn handle_due(ctx: &mut AppContext, item: &str, date: Option<String>) -> Result<()> {
    let id = resolve_one(ctx, item)?;
    let result = ctx.api.update(&id, TodoUpdate::due_date(date));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, items: &[String]) -> Result<()> {
    let ids = ctx.api.resolve(items)?;
    for id in ids {
        let result = ctx.api.delete(&id);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_toggle_all(ctx: &mut AppContext, completed: bool) -> Result<()> {
    let result = ctx.api.toggle_all(completed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear_completed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed();
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear_all(ctx: &mut AppContext, skip_confirm: bool) -> Result<()> {
    let total = ctx.api.counts().total;
    if total == 0 {
        print_messages(&[CmdMessage::info("No todos to clear.")]);
        return Ok(());
    }

    if !skip_confirm && ctx.config.confirm_clear_all {
        let prompt = format!("Clear ALL {} todos? This cannot be undone. [y/N]: ", total);
        if !confirm(&prompt)? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.clear_all();
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config_cmd::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
        ctx.config = config.clone();
    }
    print_messages(&result.messages);
    Ok(())
}

fn resolve_one(ctx: &AppContext, item: &str) -> Result<String> {
    ctx.api
        .resolve(&[item])?
        .into_iter()
        .next()
        .ok_or_else(|| OceanError::Api(format!("Nothing matches {}", item)))
}

fn warn_unknown_priority(raw: &str) {
    if raw.parse::<Priority>().is_err() {
        print_messages(&[CmdMessage::warning(format!(
            "Unknown priority {:?}, using medium",
            raw
        ))]);
    }
}

/// Blocking yes/no prompt on stdin. Anything but y/yes declines.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().map_err(OceanError::Io)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(OceanError::Io)?;

    Ok(matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
