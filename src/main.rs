//! Todo CLI RS binary entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use todo_cli_rs::{Config, MarkOutcome, TaskStore};
use tracing_subscriber::{fmt, EnvFilter};

/// A simple command-line to-do list manager
#[derive(Parser)]
#[command(name = "todo-cli", version, about)]
struct Cli {
    /// Path to the tasks file (overrides configuration)
    #[arg(long, value_name = "PATH", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task
    Add {
        /// Description of the task to add
        description: String,
    },
    /// List all tasks
    List,
    /// Mark a task as done
    Done {
        /// 1-based index of the task to mark as done
        index: usize,
    },
    /// Remove a task
    Remove {
        /// 1-based index of the task to remove
        index: usize,
    },
    /// Show task statistics
    Stats,
}

fn main() {
    // Warnings go to stderr so command output on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> todo_cli_rs::Result<()> {
    let data_file = Config::resolve_data_file(cli.file)?;
    let mut store = TaskStore::open(data_file);

    match cli.command {
        Command::Add { description } => {
            let task = store.add_task(&description)?;
            println!("Task added: {}", task.description);
        }
        Command::List => {
            if store.is_empty() {
                println!("No tasks found. Add some tasks to get started!");
            } else {
                println!("Your to-do list:");
                for (position, task) in store.tasks().iter().enumerate() {
                    println!("{}. [{}] {}", position + 1, task.status_icon(), task.description);
                }
            }
        }
        Command::Done { index } => match store.mark_task_done(index)? {
            MarkOutcome::Marked(description) => {
                println!("Task {} marked as done: {}", index, description);
            }
            MarkOutcome::AlreadyDone(_) => {
                println!("Task {} is already marked as done", index);
            }
        },
        Command::Remove { index } => {
            let removed = store.remove_task(index)?;
            println!("Task {} removed: {}", index, removed.description);
        }
        Command::Stats => {
            let counts = store.task_counts();
            println!("Task Statistics:");
            println!("  Total tasks: {}", counts.total);
            println!("  Completed: {}", counts.completed);
            println!("  Pending: {}", counts.pending);
        }
    }

    Ok(())
}
