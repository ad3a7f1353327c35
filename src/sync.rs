//! State Synchronization
//!
//! Every user action is one local change (optimistic flip or loader mark)
//! followed by one backend request per affected todo. Successful responses
//! replace the local copy; failures roll back and raise the error banner.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, ApiResult, TodoApi};
use crate::models::{Filter, NewTodo, Todo, TodoId, TodoPatch, UserId};
use crate::store::{TodoState, TodoStore};

pub const LOAD_FAILED: &str = "Unable to load todos";
pub const EMPTY_TITLE: &str = "Title should not be empty";
pub const CREATE_FAILED: &str = "Unable to add a todo";
pub const UPDATE_FAILED: &str = "Unable to update a todo";
pub const TOGGLE_ALL_FAILED: &str = "Unable to toggle all items";
pub const EDIT_FAILED: &str = "Unable to edit item";
pub const DELETE_FAILED: &str = "Unable to delete a todo";

/// Access to the UI state from async operations
pub trait StateHandle: Clone + 'static {
    /// Read the state without subscribing to it
    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;

    /// Mutate the state and notify readers
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R;

    /// Run `f` against the state once `delay_ms` has elapsed
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce(&mut TodoState)>);
}

impl StateHandle for TodoStore {
    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&*self.read_untracked())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        f(&mut *self.write())
    }

    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce(&mut TodoState)>) {
        let store = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            store.mutate(f);
        });
    }
}

/// Pairs the backend API with the UI state
pub struct TodoSync<A, S> {
    api: Rc<A>,
    state: S,
    user_id: UserId,
    error_timeout_ms: u32,
}

impl<A, S: Clone> Clone for TodoSync<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            user_id: self.user_id,
            error_timeout_ms: self.error_timeout_ms,
        }
    }
}

impl<A: TodoApi, S: StateHandle> TodoSync<A, S> {
    pub fn new(api: A, state: S, user_id: UserId, error_timeout_ms: u32) -> Self {
        Self {
            api: Rc::new(api),
            state,
            user_id,
            error_timeout_ms,
        }
    }

    /// Show `message` and clear it after the timeout unless a newer error replaced it
    fn fail(&self, message: &str) {
        let seq = self.state.mutate(|s| s.show_error(message));
        self.state
            .after(self.error_timeout_ms, Box::new(move |s| s.clear_error(seq)));
    }

    fn unmark(&self, id: TodoId) {
        self.state.mutate(|s| s.busy.remove(&id));
    }

    /// Fetch the user's full list
    pub async fn load(&self) {
        self.state.mutate(|s| s.loading = true);
        match self.api.list(self.user_id).await {
            Ok(todos) => {
                tracing::info!("loaded {} todos for user {}", todos.len(), self.user_id);
                self.state.mutate(|s| s.todos = todos);
            }
            Err(e) => {
                tracing::error!("load failed: {}", e);
                self.fail(LOAD_FAILED);
            }
        }
        self.state.mutate(|s| s.loading = false);
    }

    /// Create a todo from the input text, showing a placeholder meanwhile
    pub async fn create(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.fail(EMPTY_TITLE);
            return;
        }
        if self.state.inspect(|s| s.submitting) {
            return;
        }

        let placeholder = Todo::pending(self.user_id, title.to_string());
        self.state.mutate(|s| {
            s.pending = Some(placeholder);
            s.submitting = true;
        });

        let new_todo = NewTodo {
            user_id: self.user_id,
            title: title.to_string(),
            completed: false,
        };
        match self.api.create(&new_todo).await {
            Ok(todo) => {
                tracing::info!("created todo {}", todo.id);
                self.state.mutate(|s| {
                    s.todos.push(todo);
                    s.draft.clear();
                });
            }
            Err(e) => {
                tracing::error!("create failed: {}", e);
                self.fail(CREATE_FAILED);
            }
        }

        self.state.mutate(|s| {
            s.pending = None;
            s.submitting = false;
        });
    }

    /// Send a completion change; rolls the local flag back on failure
    async fn push_completed(&self, id: TodoId, completed: bool) -> ApiResult<()> {
        match self.api.update(id, &TodoPatch::completed(completed)).await {
            Ok(todo) => {
                self.state.mutate(|s| s.replace(todo));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("update of todo {} failed: {}", id, e);
                self.state.mutate(|s| s.set_completed(id, !completed));
                Err(e)
            }
        }
    }

    /// Flip one todo's completion flag
    pub async fn toggle(&self, id: TodoId) {
        let flipped = self.state.mutate(|s| {
            if s.busy.contains(&id) {
                return None;
            }
            let completed = !s.get(id)?.completed;
            s.set_completed(id, completed);
            s.busy.insert(id);
            Some(completed)
        });
        let Some(completed) = flipped else {
            return;
        };

        if self.push_completed(id, completed).await.is_err() {
            self.fail(UPDATE_FAILED);
        }
        self.unmark(id);
    }

    /// Complete everything, or reopen everything if all are already done
    pub async fn toggle_all(&self) {
        let (target, ids) = self.state.mutate(|s| {
            let target = !s.all_completed();
            let ids: Vec<TodoId> = s
                .todos
                .iter()
                .filter(|todo| todo.completed != target && !s.busy.contains(&todo.id))
                .map(|todo| todo.id)
                .collect();
            for id in &ids {
                s.set_completed(*id, target);
                s.busy.insert(*id);
            }
            (target, ids)
        });
        tracing::debug!("toggling {} todos to completed={}", ids.len(), target);

        let mut failed = 0;
        for id in ids {
            if self.push_completed(id, target).await.is_err() {
                failed += 1;
            }
            self.unmark(id);
        }
        if failed > 0 {
            self.fail(TOGGLE_ALL_FAILED);
        }
    }

    /// Save an edited title; an empty title deletes the todo
    ///
    /// Returns `Err` when the request failed, or another request for the
    /// same todo is still in flight, so the editor can stay open.
    pub async fn rename(&self, id: TodoId, title: &str) -> ApiResult<()> {
        let title = title.trim();
        let Some(current) = self.state.inspect(|s| s.get(id).map(|todo| todo.title.clone())) else {
            return Ok(());
        };
        if title == current {
            return Ok(());
        }
        if title.is_empty() {
            return self.delete(id).await;
        }

        if !self.state.mutate(|s| s.busy.insert(id)) {
            return Err(ApiError::Busy(id));
        }
        let result = self.api.update(id, &TodoPatch::title(title)).await;
        match &result {
            Ok(todo) => self.state.mutate(|s| s.replace(todo.clone())),
            Err(e) => {
                tracing::warn!("rename of todo {} failed: {}", id, e);
                self.fail(EDIT_FAILED);
            }
        }
        self.unmark(id);
        result.map(|_| ())
    }

    /// Delete one todo; it stays listed (with a loader) until the backend confirms
    pub async fn delete(&self, id: TodoId) -> ApiResult<()> {
        // One request per todo at a time; the loader belongs to the first one
        if !self.state.mutate(|s| s.busy.insert(id)) {
            return Err(ApiError::Busy(id));
        }
        let result = self.api.delete(id).await;
        self.state.mutate(|s| {
            s.busy.remove(&id);
            if result.is_ok() {
                s.remove(id);
            }
        });
        match &result {
            Ok(()) => tracing::info!("deleted todo {}", id),
            Err(e) => {
                tracing::warn!("delete of todo {} failed: {}", id, e);
                self.fail(DELETE_FAILED);
            }
        }
        result
    }

    /// Delete every completed todo, one request each
    pub async fn clear_completed(&self) {
        let ids: Vec<TodoId> = self.state.inspect(|s| {
            s.todos
                .iter()
                .filter(|todo| todo.completed && !s.busy.contains(&todo.id))
                .map(|todo| todo.id)
                .collect()
        });
        for id in ids {
            // Failures are already reported per todo
            let _ = self.delete(id).await;
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.mutate(|s| s.filter = filter);
    }

    pub fn set_draft(&self, text: String) {
        self.state.mutate(|s| s.draft = text);
    }

    pub fn dismiss_error(&self) {
        self.state.mutate(|s| s.dismiss_error());
    }
}
