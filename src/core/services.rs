use crate::config::CONFIG;
use crate::constants::{
    TASK_ADDED, TASK_DELETED, TASK_EDITED, TASK_TOGGLED, USER_LOGGED_IN, USER_LOGGED_OUT,
    USER_SIGNED_UP,
};
use crate::core::errors::TodoError;
use crate::core::models::{
    activity::ActivityEntry,
    session::Session,
    task::{DueDateTime, Priority, TaskRecord},
    user::UserRecord,
};
use crate::infrastructure::logging::ActivityLogger;
use crate::infrastructure::storage::Storage;
use log::{debug, info, warn};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// The credential and task store behind the to-do app. Owns its storage
/// back-end, activity logger, and session state, so independent
/// instances run in isolation.
pub struct TodoService<L: ActivityLogger, S: Storage> {
    storage: S,
    logging: L,
    session: RwLock<Option<Session>>,
    next_task_id: AtomicU64,
}

impl<L: ActivityLogger, S: Storage> TodoService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        TodoService {
            storage,
            logging,
            session: RwLock::new(None),
            next_task_id: AtomicU64::new(0),
        }
    }

    // AUTH

    /// Overwrites the stored credential record and activates the session.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, TodoError> {
        info!("Signing up user with email: {}", email);
        Self::require_present("name", name)?;
        Self::require_present("email", email)?;
        Self::require_present("password", password)?;

        let hash = bcrypt::hash(password, CONFIG.bcrypt_cost)
            .map_err(|e| TodoError::InternalError(format!("Password hashing error: {}", e)))?;
        let user = UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password: hash,
        };
        self.storage.save_user(user.clone()).await?;

        let session = self.activate_session(&user).await;
        self.logging
            .log_action(
                USER_SIGNED_UP,
                json!({ "name": user.name, "email": user.email }),
                Some(&user.email),
            )
            .await?;
        debug!("Sign-up complete for {}", user.email);
        Ok(session)
    }

    /// Succeeds iff the submitted email matches the stored record exactly
    /// and the password verifies against the stored hash. A rejected
    /// attempt leaves the current session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, TodoError> {
        info!("Login attempt for email: {}", email);
        let user = self
            .storage
            .get_user()
            .await?
            .ok_or(TodoError::InvalidCredentials)?;
        if user.email != email {
            warn!("Login rejected for email: {}", email);
            return Err(TodoError::InvalidCredentials);
        }
        let verified = bcrypt::verify(password, &user.password)
            .map_err(|e| TodoError::InternalError(format!("Password verification error: {}", e)))?;
        if !verified {
            warn!("Login rejected for email: {}", email);
            return Err(TodoError::InvalidCredentials);
        }

        let session = self.activate_session(&user).await;
        self.logging
            .log_action(USER_LOGGED_IN, json!({ "email": user.email }), Some(&user.email))
            .await?;
        debug!("Login complete for {}", user.email);
        Ok(session)
    }

    /// Clears the session and the persisted task list. The credential
    /// record itself is kept. No-op when no session is active.
    pub async fn logout(&self) -> Result<(), TodoError> {
        let mut session = self.session.write().await;
        if let Some(active) = session.take() {
            info!("Logging out {}", active.email);
            self.storage.clear_tasks().await?;
            self.logging
                .log_action(
                    USER_LOGGED_OUT,
                    json!({ "email": active.email }),
                    Some(&active.email),
                )
                .await?;
        }
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    // TASKS

    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>, TodoError> {
        self.require_session().await?;
        self.storage.get_tasks().await
    }

    /// Appends a new task with `completed = false` and persists the list.
    pub async fn add_task(
        &self,
        task: &str,
        priority: Priority,
        due_date_time: DueDateTime,
    ) -> Result<TaskRecord, TodoError> {
        let session = self.require_session().await?;
        let text = Self::require_task_text(task)?;

        let mut tasks = self.storage.get_tasks().await?;
        let record = TaskRecord {
            id: self.allocate_task_id(&tasks),
            task: text,
            priority,
            due_date_time,
            completed: false,
        };
        tasks.push(record.clone());
        self.storage.save_tasks(&tasks).await?;

        debug!("Task {} added", record.id);
        self.logging
            .log_action(
                TASK_ADDED,
                json!({ "task_id": record.id, "priority": record.priority.to_string() }),
                Some(&session.email),
            )
            .await?;
        Ok(record)
    }

    /// Flips `completed` on the matching record. No-op if the id is absent.
    pub async fn toggle_complete(&self, id: u64) -> Result<Option<TaskRecord>, TodoError> {
        let session = self.require_session().await?;

        let mut tasks = self.storage.get_tasks().await?;
        let Some(record) = tasks.iter_mut().find(|t| t.id == id) else {
            debug!("Toggle for unknown task {} ignored", id);
            return Ok(None);
        };
        record.completed = !record.completed;
        let updated = record.clone();
        self.storage.save_tasks(&tasks).await?;

        debug!("Task {} toggled to completed={}", id, updated.completed);
        self.logging
            .log_action(
                TASK_TOGGLED,
                json!({ "task_id": id, "completed": updated.completed }),
                Some(&session.email),
            )
            .await?;
        Ok(Some(updated))
    }

    /// Replaces the three mutable fields in place, preserving `id` and
    /// `completed`. No-op if the id is absent.
    pub async fn edit_task(
        &self,
        id: u64,
        task: &str,
        priority: Priority,
        due_date_time: DueDateTime,
    ) -> Result<Option<TaskRecord>, TodoError> {
        let session = self.require_session().await?;
        let text = Self::require_task_text(task)?;

        let mut tasks = self.storage.get_tasks().await?;
        let Some(record) = tasks.iter_mut().find(|t| t.id == id) else {
            debug!("Edit for unknown task {} ignored", id);
            return Ok(None);
        };
        record.task = text;
        record.priority = priority;
        record.due_date_time = due_date_time;
        let updated = record.clone();
        self.storage.save_tasks(&tasks).await?;

        debug!("Task {} edited", id);
        self.logging
            .log_action(TASK_EDITED, json!({ "task_id": id }), Some(&session.email))
            .await?;
        Ok(Some(updated))
    }

    /// Removes the matching record. Returns `false` (no-op) if absent.
    pub async fn delete_task(&self, id: u64) -> Result<bool, TodoError> {
        let session = self.require_session().await?;

        let mut tasks = self.storage.get_tasks().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            debug!("Delete for unknown task {} ignored", id);
            return Ok(false);
        }
        self.storage.save_tasks(&tasks).await?;

        debug!("Task {} deleted", id);
        self.logging
            .log_action(TASK_DELETED, json!({ "task_id": id }), Some(&session.email))
            .await?;
        Ok(true)
    }

    pub async fn activity(&self) -> Result<Vec<ActivityEntry>, TodoError> {
        self.logging.entries().await
    }

    // HELPERS

    async fn activate_session(&self, user: &UserRecord) -> Session {
        let session = Session::for_user(user);
        *self.session.write().await = Some(session.clone());
        session
    }

    async fn require_session(&self) -> Result<Session, TodoError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(TodoError::SessionRequired)
    }

    fn require_present(field: &'static str, value: &str) -> Result<(), TodoError> {
        if value.trim().is_empty() {
            return Err(TodoError::MissingField(field));
        }
        Ok(())
    }

    fn require_task_text(task: &str) -> Result<String, TodoError> {
        let text = task.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyTask);
        }
        Ok(text.to_string())
    }

    /// Ids are strictly monotonic within a service instance and never
    /// fall back below the highest stored id, so deletes and restarts
    /// cannot cause reuse.
    fn allocate_task_id(&self, tasks: &[TaskRecord]) -> u64 {
        let floor = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.next_task_id.fetch_max(floor, Ordering::SeqCst);
        self.next_task_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}
