use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use todo_model::{TaskId, TaskList};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for KeyVal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got: {s}"))?;
        Ok(Self {
            key: k.trim().to_string(),
            value: v.trim().to_string(),
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "todo",
    version,
    about = "Keep a short list of things to do",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[arg(
        long = "rc",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
        action = ArgAction::Append
    )]
    pub rc_overrides: Vec<KeyVal>,

    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    #[arg(long = "data")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Show tasks through a filter (all, active, completed)
    List { filter: Option<String> },
    /// Flip a task between active and completed
    Toggle { id: String },
    /// Mark every task completed, or active with --clear
    ToggleAll {
        #[arg(long)]
        clear: bool,
    },
    /// Retitle a task; an empty title deletes it
    Edit {
        id: String,
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },
    /// Remove a task
    Delete { id: String },
    /// Remove every completed task
    ClearCompleted,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

/// Resolves a full id or an unambiguous id prefix against the list.
pub fn resolve_id(tasks: &TaskList, needle: &str) -> anyhow::Result<TaskId> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Err(anyhow!("task id cannot be empty"));
    }

    if let Some(task) = tasks.get(&TaskId::from(needle)) {
        return Ok(task.id.clone());
    }

    let mut matches = tasks
        .as_slice()
        .iter()
        .filter(|task| task.id.as_str().starts_with(needle));
    let first = matches
        .next()
        .ok_or_else(|| anyhow!("no task matches id {needle}"))?;

    if matches.next().is_some() {
        return Err(anyhow!("id prefix {needle} is ambiguous"));
    }
    Ok(first.id.clone())
}

#[cfg(test)]
mod tests {
    use todo_model::Task;

    use super::*;

    fn list(ids: &[&str]) -> TaskList {
        TaskList::from_tasks(
            ids.iter()
                .map(|id| Task {
                    id: (*id).into(),
                    title: format!("task {id}"),
                    completed: false,
                })
                .collect(),
        )
    }

    #[test]
    fn unique_prefix_resolves() {
        let tasks = list(&["abc123", "def456"]);
        assert_eq!(resolve_id(&tasks, "de").expect("match").as_str(), "def456");
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let tasks = list(&["abc123", "abd456"]);
        let err = resolve_id(&tasks, "ab").expect_err("ambiguous");
        assert!(err.to_string().contains("ambiguous"));
    }

    #[test]
    fn exact_id_wins_over_longer_match() {
        let tasks = list(&["abc", "abcdef"]);
        assert_eq!(resolve_id(&tasks, "abc").expect("exact").as_str(), "abc");
    }

    #[test]
    fn exact_id_wins_when_longer_match_comes_first() {
        let tasks = list(&["abcdef", "abc"]);
        assert_eq!(resolve_id(&tasks, "abc").expect("exact").as_str(), "abc");
        assert_eq!(resolve_id(&tasks, "abcd").expect("prefix").as_str(), "abcdef");
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(resolve_id(&list(&["abc"]), "zzz").is_err());
        assert!(resolve_id(&list(&["abc"]), " ").is_err());
    }

    #[test]
    fn parses_subcommands_and_overrides() {
        let cli = GlobalCli::try_parse_from([
            "todo", "--rc", "color=off", "-vv", "add", "Buy", "milk",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.rc_overrides[0].key, "color");
        assert_eq!(
            cli.command,
            Some(Command::Add {
                title: vec!["Buy".to_string(), "milk".to_string()]
            })
        );
    }

    #[test]
    fn edit_accepts_missing_title() {
        let cli = GlobalCli::try_parse_from(["todo", "edit", "abc"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Edit {
                id: "abc".to_string(),
                title: vec![]
            })
        );
    }

    #[test]
    fn keyval_requires_equals() {
        assert!("color".parse::<KeyVal>().is_err());
    }
}
