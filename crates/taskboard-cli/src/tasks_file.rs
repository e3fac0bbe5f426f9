//! Reading and writing the JSON task file.

use std::fs;
use std::io;
use std::path::Path;

use taskboard_core::Task;
use tracing::debug;

/// Load tasks from `path`. A missing file is an empty task list.
pub fn load(path: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Task file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(format!("Failed to read task file '{}': {}", path.display(), e).into())
        }
    };

    let tasks: Vec<Task> = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid task file '{}': {}", path.display(), e))?;
    debug!(path = %path.display(), count = tasks.len(), "Loaded tasks");
    Ok(tasks)
}

/// Write tasks to `path` as pretty-printed JSON.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(path, json + "\n")
        .map_err(|e| format!("Failed to write task file '{}': {}", path.display(), e))?;
    debug!(path = %path.display(), count = tasks.len(), "Saved tasks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taskboard_core::TaskStatus;

    fn scratch_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("taskboard-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let tasks = load(&scratch_path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let task = Task::new(
            "Review PR",
            "ws",
            "proj",
            "alice",
            TaskStatus::InReview,
            NaiveDate::from_ymd_opt(2026, 10, 25).unwrap(),
        )
        .with_description("second pass");

        save(&path, std::slice::from_ref(&task)).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, vec![task]);
    }

    #[test]
    fn test_invalid_file_names_path() {
        let path = scratch_path();
        fs::write(&path, "{ not json").unwrap();
        let err = load(&path).unwrap_err().to_string();
        fs::remove_file(&path).ok();

        assert!(err.contains("Invalid task file"));
    }
}
