//! TaskBoard CLI - inspect and reorder a Kanban board stored in a JSON task file.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use taskboard_binding::{BoardBinding, InMemoryTaskStore, MoveOutcome, TracingNotifier};
use taskboard_core::{
    reconcile, Board, Location, MoveDescriptor, Task, TaskFilter, TaskId, TaskStatus,
    UpdateEntry,
};

mod config;
mod tasks_file;

use config::Config;

/// TaskBoard CLI - Kanban board tool
#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Inspect and reorder a Kanban task board", long_about = None)]
struct Cli {
    /// Task file (JSON array of tasks)
    #[arg(short, long, default_value = "tasks.json")]
    tasks: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board
    Board {
        #[command(flatten)]
        scope: Scope,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Move a task, e.g. `move TODO:2 DONE:0`
    #[command(name = "move")]
    Move {
        /// Source slot as STATUS:INDEX
        #[arg(value_parser = parse_location)]
        from: Location,

        /// Destination slot as STATUS:INDEX (omit for a cancelled drag)
        #[arg(value_parser = parse_location)]
        to: Option<Location>,

        #[command(flatten)]
        scope: Scope,

        /// Print the update batch as JSON
        #[arg(long)]
        json: bool,

        /// Compute the batch without writing the task file
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a task at the bottom of its column
    Create {
        /// Task name
        #[arg(short, long)]
        name: String,

        /// Workspace ID
        #[arg(short, long)]
        workspace: String,

        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Assignee member ID
        #[arg(short, long)]
        assignee: String,

        /// Column, e.g. TODO or in-progress
        #[arg(short, long, default_value = "TODO")]
        status: TaskStatus,

        /// Due date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        due: Option<NaiveDate>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },
}

/// Which tasks make up the board.
#[derive(clap::Args)]
struct Scope {
    /// Only tasks in this workspace
    #[arg(long)]
    workspace: Option<String>,

    /// Only tasks in this project
    #[arg(long)]
    project: Option<String>,
}

impl Scope {
    fn filter(&self) -> TaskFilter {
        TaskFilter {
            workspace_id: self.workspace.as_deref().map(Into::into),
            project_id: self.project.as_deref().map(Into::into),
            ..TaskFilter::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config {
        tasks_path: cli.tasks,
        log_level: if cli.verbose { Level::DEBUG } else { Level::INFO },
        ..Config::default()
    };

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Board { scope, json } => {
            show_board(&config, &scope.filter(), json)?;
        }
        Commands::Move {
            from,
            to,
            scope,
            json,
            dry_run,
        } => {
            let mv = MoveDescriptor {
                source: from,
                destination: to,
            };
            move_task(config, scope.filter(), mv, json, dry_run).await?;
        }
        Commands::Create {
            name,
            workspace,
            project,
            assignee,
            status,
            due,
            description,
        } => {
            let due = due.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let mut task = Task::new(name, workspace, project, assignee, status, due);
            task.description = description;
            create_task(config, task).await?;
        }
    }

    Ok(())
}

fn show_board(
    config: &Config,
    filter: &TaskFilter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = tasks_file::load(&config.tasks_path)?;
    let names = task_names(&tasks);
    let board = Board::partition(
        tasks
            .iter()
            .filter(|task| filter.matches(task))
            .map(Task::summary),
    );

    if json {
        let columns: Vec<_> = board.columns().collect();
        println!("{}", serde_json::to_string_pretty(&columns)?);
    } else {
        print!("{}", render_board(&board, &names));
    }

    Ok(())
}

async fn move_task(
    mut config: Config,
    filter: TaskFilter,
    mv: MoveDescriptor,
    json: bool,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = tasks_file::load(&config.tasks_path)?;

    if dry_run {
        let board = Board::partition(
            tasks
                .iter()
                .filter(|task| filter.matches(task))
                .map(Task::summary),
        );
        let result = reconcile(&board, &mv)?;
        print_batch(&result.batch, json)?;
        return Ok(());
    }

    let names = task_names(&tasks);
    let store = Arc::new(InMemoryTaskStore::with_tasks(tasks));
    config.binding.filter = filter;
    let binding = BoardBinding::new(
        store.clone(),
        store.clone(),
        Arc::new(TracingNotifier),
        config.binding,
    );
    binding.refresh().await?;

    let outcome = binding.handle_move(mv).await;
    if let MoveOutcome::Rejected(e) = &outcome {
        return Err(e.clone().into());
    }
    print_batch(outcome.batch(), json)?;
    outcome.wait().await;

    tasks_file::save(&config.tasks_path, &store.snapshot().await)?;
    if !json {
        println!();
        print!("{}", render_board(&binding.board().await, &names));
    }

    Ok(())
}

async fn create_task(config: Config, task: Task) -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryTaskStore::with_tasks(tasks_file::load(&config.tasks_path)?);
    let created = store.create_task(task).await;
    tasks_file::save(&config.tasks_path, &store.snapshot().await)?;

    info!(task_id = %created.id, "Task created");
    println!("Task created:");
    println!("  ID:       {}", created.id);
    println!("  Name:     {}", created.name);
    println!("  Status:   {}", created.status);
    println!("  Position: {}", created.position);
    println!("  Due:      {}", created.due_date);

    Ok(())
}

/// Parse a `STATUS:INDEX` slot.
fn parse_location(s: &str) -> Result<Location, String> {
    let (status, index) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected STATUS:INDEX, got '{s}'"))?;
    let status: TaskStatus = status.parse().map_err(|e| format!("{e}"))?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid index '{index}'"))?;
    Ok(Location::new(status, index))
}

fn task_names(tasks: &[Task]) -> HashMap<TaskId, String> {
    tasks
        .iter()
        .map(|task| (task.id.clone(), task.name.clone()))
        .collect()
}

fn render_board(board: &Board, names: &HashMap<TaskId, String>) -> String {
    let mut out = String::new();
    for column in board.columns() {
        out.push_str(&format!("{} ({})\n", column.status().title(), column.len()));
        for task in column.tasks() {
            let name = names.get(&task.id).map(String::as_str).unwrap_or("");
            out.push_str(&format!("  {:>9}  {:<36}  {}\n", task.position, task.id, name));
        }
    }
    out
}

fn print_batch(batch: &[UpdateEntry], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(batch)?);
        return Ok(());
    }

    if batch.is_empty() {
        println!("No updates.");
        return Ok(());
    }

    println!("Updates ({}):", batch.len());
    println!("{:<36}  {:<12}  {}", "ID", "STATUS", "POSITION");
    println!("{}", "-".repeat(60));
    for entry in batch {
        println!("{:<36}  {:<12}  {}", entry.id, entry.status, entry.position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::TaskSummary;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            parse_location("in-progress:3"),
            Ok(Location::new(TaskStatus::InProgress, 3))
        );
        assert_eq!(
            parse_location("DONE:0"),
            Ok(Location::new(TaskStatus::Done, 0))
        );
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location("TODO").is_err());
        assert!(parse_location("TODO:-1").is_err());
        assert!(parse_location("BLOCKED:0")
            .unwrap_err()
            .contains("Unknown task status"));
    }

    #[test]
    fn test_render_board_lists_every_column() {
        let board = Board::partition(vec![TaskSummary::new("t-1", TaskStatus::Todo, 1000)]);
        let names = HashMap::from([(TaskId::new("t-1"), "Write tests".to_string())]);

        let out = render_board(&board, &names);

        assert!(out.contains("Backlog (0)"));
        assert!(out.contains("Todo (1)"));
        assert!(out.contains("In Progress (0)"));
        assert!(out.contains("Write tests"));
    }

    #[test]
    fn test_cli_parses_cancelled_move() {
        let cli = Cli::try_parse_from(["taskboard", "move", "TODO:1", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Move { from, to, dry_run, .. } => {
                assert_eq!(from, Location::new(TaskStatus::Todo, 1));
                assert!(to.is_none());
                assert!(dry_run);
            }
            _ => panic!("expected move"),
        }
    }
}
