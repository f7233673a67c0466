use crate::core::errors::TodoError;
use crate::core::models::{
    session::Session,
    task::{DueDateTime, Priority, TaskRecord},
};
use crate::core::services::TodoService;
use crate::infrastructure::logging::ActivityLogger;
use crate::infrastructure::storage::Storage;

/// Sign-up form state.
#[derive(Clone, Debug, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub async fn submit<L, S>(&self, service: &TodoService<L, S>) -> Result<Session, TodoError>
    where
        L: ActivityLogger,
        S: Storage,
    {
        service
            .sign_up(&self.name, &self.email, &self.password)
            .await
    }
}

/// Login form state. A rejected attempt leaves the displayed message in
/// `error` until the next submit.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub async fn submit<L, S>(&mut self, service: &TodoService<L, S>) -> Option<Session>
    where
        L: ActivityLogger,
        S: Storage,
    {
        match service.login(&self.email, &self.password).await {
            Ok(session) => {
                self.error = None;
                Some(session)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

/// Task entry form. Doubles as the edit form: `start_edit` loads an
/// existing record and the next submit rewrites it instead of appending.
#[derive(Clone, Debug, Default)]
pub struct TaskForm {
    pub task: String,
    pub priority: Priority,
    pub due_date: String,
    pub due_time: String,
    editing: Option<u64>,
}

impl TaskForm {
    pub fn new() -> Self {
        TaskForm::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn start_edit(&mut self, record: &TaskRecord) {
        self.task = record.task.clone();
        self.priority = record.priority;
        self.due_date.clear();
        self.due_time.clear();
        if record.due_date_time.is_set() {
            match record.due_date_time.as_str().split_once(' ') {
                Some((date, time)) => {
                    self.due_date = date.to_string();
                    self.due_time = time.to_string();
                }
                None => self.due_date = record.due_date_time.as_str().to_string(),
            }
        }
        self.editing = Some(record.id);
    }

    pub fn due_date_time(&self) -> DueDateTime {
        DueDateTime::combine(&self.due_date, &self.due_time)
    }

    /// Runs the add or edit operation and clears the form on success. In
    /// edit mode, `None` means the edited task no longer exists.
    pub async fn submit<L, S>(
        &mut self,
        service: &TodoService<L, S>,
    ) -> Result<Option<TaskRecord>, TodoError>
    where
        L: ActivityLogger,
        S: Storage,
    {
        let due = self.due_date_time();
        let outcome = match self.editing {
            Some(id) => service.edit_task(id, &self.task, self.priority, due).await?,
            None => Some(service.add_task(&self.task, self.priority, due).await?),
        };
        *self = TaskForm::default();
        Ok(outcome)
    }
}
