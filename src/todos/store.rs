//! File-backed todo store.
//!
//! The whole collection lives in memory behind a lock and is mirrored to a
//! pretty-printed JSON document on every successful mutation. The in-memory
//! collection is authoritative: a failed disk write is logged and the
//! mutation still succeeds, so the file catches up on the next write that
//! lands.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};

use super::model::{TodoItem, UpdateFields};

struct StoreInner {
    todos: Vec<TodoItem>,
    next_id: u64,
}

/// In-memory todo collection mirrored to a JSON file.
pub struct TodoStore {
    data_path: PathBuf,
    inner: RwLock<StoreInner>,
}

impl TodoStore {
    /// Load the store from `data_path`.
    ///
    /// A missing file is normal first-run state. An unreadable or corrupt
    /// file degrades to an empty collection so the service still starts.
    pub async fn load(data_path: PathBuf) -> Self {
        let todos = read_todos(&data_path).await;
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1);

        info!(
            path = %data_path.display(),
            count = todos.len(),
            "Todo store loaded"
        );

        Self {
            data_path,
            inner: RwLock::new(StoreInner { todos, next_id }),
        }
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.inner.read().await.todos.clone()
    }

    /// Create a todo. The title must be non-empty after trimming.
    pub async fn create(&self, title: &str, description: &str) -> Result<TodoItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation {
                reason: "Title is required".to_string(),
            });
        }

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let todo = TodoItem::new(id, title, description.trim());
        inner.todos.push(todo.clone());

        info!(id = todo.id, title = %todo.title, "Todo created");

        self.persist(&inner.todos).await;
        Ok(todo)
    }

    /// Apply a partial update. Unset fields keep their current value;
    /// `updated_at` always refreshes, even when nothing else changed.
    pub async fn update(&self, id: u64, fields: UpdateFields) -> Result<TodoItem> {
        // Validate up front so a rejected update leaves the item untouched.
        let title = match fields.title {
            Some(t) => {
                let t = t.trim().to_string();
                if t.is_empty() {
                    return Err(StoreError::Validation {
                        reason: "Title must be a non-empty string".to_string(),
                    });
                }
                Some(t)
            }
            None => None,
        };

        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(description) = fields.description {
            todo.description = description.trim().to_string();
        }
        if let Some(completed) = fields.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();
        let updated = todo.clone();

        info!(id = updated.id, "Todo updated");

        self.persist(&inner.todos).await;
        Ok(updated)
    }

    /// Delete a todo by id.
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;
        inner.todos.remove(pos);

        info!(id, "Todo deleted");

        self.persist(&inner.todos).await;
        Ok(())
    }

    /// Write the whole collection to disk. Failures are logged and swallowed;
    /// the in-memory collection stays authoritative.
    async fn persist(&self, todos: &[TodoItem]) {
        if let Err(e) = write_todos(&self.data_path, todos).await {
            warn!(
                path = %self.data_path.display(),
                error = %e,
                "Failed to persist todos, keeping in-memory state"
            );
        }
    }
}

async fn read_todos(path: &Path) -> Vec<TodoItem> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No todo file yet, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read todo file, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(todos) => todos,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not parse todo file, starting empty");
            Vec::new()
        }
    }
}

async fn write_todos(path: &Path, todos: &[TodoItem]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(todos).map_err(std::io::Error::other)?;
    fs::write(path, json).await
}
