use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::task::{NewTask, Task};

/// JSON-file-backed task store.
///
/// Tasks live in a single array at `<data-dir>/tasks.json`. Every mutation
/// rewrites the file atomically (temp file then rename), so a crash mid-save
/// leaves the previous contents intact.
#[derive(Debug)]
pub struct TaskStore {
    tasks_path: PathBuf,
    tasks: Mutex<HashMap<String, Task>>,
}

impl TaskStore {
    /// Open the store over the platform data directory.
    pub async fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("ticklist");
        Self::new_in_dir(&data_dir).await
    }

    /// Open the store over an explicit directory. Used for `--data-dir` and tests.
    pub async fn new_in_dir(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).await?;

        let tasks_path = data_dir.join("tasks.json");
        let tasks = Self::load_tasks(&tasks_path).await?;

        Ok(Self {
            tasks_path,
            tasks: Mutex::new(tasks),
        })
    }

    async fn load_tasks(path: &Path) -> Result<HashMap<String, Task>> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).await?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks.into_iter().map(|t| (t.id.clone(), t)).collect())
    }

    /// Insert a new task. The store assigns the id.
    pub async fn add_task(&self, draft: NewTask) -> Result<Task> {
        let task = Task::from_draft(Uuid::new_v4().to_string(), draft);
        task.validate()?;
        let mut tasks = self.tasks.lock().await;
        if tasks.contains_key(&task.id) {
            return Err(StoreError::Duplicate(task.id));
        }
        tasks.insert(task.id.clone(), task.clone());
        self.save_tasks(&tasks).await?;
        tracing::debug!(id = %task.id, "task added");
        Ok(task)
    }

    pub async fn update_task(&self, id: &str, f: impl FnOnce(&mut Task)) -> Result<()> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        f(task);
        task.updated_at = chrono::Utc::now();
        self.save_tasks(&tasks).await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let mut tasks = self.tasks.lock().await;
        if tasks.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.save_tasks(&tasks).await?;
        tracing::debug!(id, "task deleted");
        Ok(())
    }

    /// All tasks in insertion order.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.lock().await;
        let mut list: Vec<_> = tasks.values().cloned().collect();
        list.sort_by(insertion_order);
        Ok(list)
    }

    pub async fn get_task(&self, id: &str) -> Option<Task> {
        self.tasks.lock().await.get(id).cloned()
    }

    async fn save_tasks(&self, tasks: &HashMap<String, Task>) -> Result<()> {
        let mut list: Vec<_> = tasks.values().cloned().collect();
        list.sort_by(insertion_order);
        let content = serde_json::to_string_pretty(&list)?;

        // Atomic write: write to temp file then rename
        let temp_path = self.tasks_path.with_extension("tmp");
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.tasks_path).await?;
        Ok(())
    }
}

// Creation time first, id as a tie-break for same-instant inserts.
fn insertion_order(a: &Task, b: &Task) -> Ordering {
    a.created_at
        .cmp(&b.created_at)
        .then_with(|| a.id.cmp(&b.id))
}
