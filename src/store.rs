//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Everything the
//! list shows is derived from `todos`, `filter` and `pending` on read.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo, TodoId};

/// Current error banner; `seq` tells a newer error from a stale one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub seq: u64,
    pub message: String,
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos of the user, in backend order
    pub todos: Vec<Todo>,
    /// Active view filter (never sent to the backend)
    pub filter: Filter,
    /// Placeholder shown while a create is in flight
    pub pending: Option<Todo>,
    /// Ids with an in-flight mutation
    pub busy: BTreeSet<TodoId>,
    /// New-todo input text
    pub draft: String,
    /// Create in flight
    pub submitting: bool,
    /// Initial load in flight
    pub loading: bool,
    /// Single current error message
    pub error: Option<ErrorNotice>,
    /// Sequence of the last error shown
    pub error_seq: u64,
}

impl TodoState {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Filtered list followed by the pending placeholder
    pub fn visible(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .cloned()
            .chain(self.pending.clone())
            .collect()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    /// True for an empty list too, matching how the toggle-all button reads
    pub fn all_completed(&self) -> bool {
        self.todos.iter().all(|todo| todo.completed)
    }

    /// Whether a row should show its loader
    pub fn is_busy(&self, id: TodoId) -> bool {
        self.busy.contains(&id) || self.pending.as_ref().is_some_and(|todo| todo.id == id)
    }

    /// Replace the local copy of a todo with `updated`
    pub fn replace(&mut self, updated: Todo) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *todo = updated;
        }
    }

    pub fn remove(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Set the completion flag; returns the previous value if the todo exists
    pub fn set_completed(&mut self, id: TodoId, completed: bool) -> Option<bool> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .map(|todo| std::mem::replace(&mut todo.completed, completed))
    }

    pub fn show_error(&mut self, message: impl Into<String>) -> u64 {
        self.error_seq += 1;
        self.error = Some(ErrorNotice {
            seq: self.error_seq,
            message: message.into(),
        });
        self.error_seq
    }

    /// Clear the error only if it is still the one numbered `seq`
    pub fn clear_error(&mut self, seq: u64) {
        if self.error.as_ref().is_some_and(|notice| notice.seq == seq) {
            self.error = None;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: TodoId, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn state_with(todos: Vec<Todo>) -> TodoState {
        TodoState {
            todos,
            ..Default::default()
        }
    }

    #[test]
    fn test_visible_applies_filter() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)]);

        let ids = |state: &TodoState| state.visible().iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(&state), vec![1, 2, 3]);

        state.filter = Filter::Active;
        assert_eq!(ids(&state), vec![1, 3]);

        state.filter = Filter::Completed;
        assert_eq!(ids(&state), vec![2]);
    }

    #[test]
    fn test_visible_appends_pending_regardless_of_filter() {
        let mut state = state_with(vec![make_todo(1, true)]);
        state.pending = Some(Todo::pending(1, "New".to_string()));
        state.filter = Filter::Completed;

        let visible = state.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible[1].is_pending());
    }

    #[test]
    fn test_counts() {
        let state = state_with(vec![make_todo(1, false), make_todo(2, true), make_todo(3, true)]);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 2);
        assert!(!state.all_completed());

        let done = state_with(vec![make_todo(1, true)]);
        assert!(done.all_completed());
        assert!(state_with(vec![]).all_completed());
    }

    #[test]
    fn test_is_busy_covers_pending_row() {
        let mut state = state_with(vec![make_todo(1, false)]);
        assert!(!state.is_busy(1));

        state.busy.insert(1);
        assert!(state.is_busy(1));

        state.pending = Some(Todo::pending(1, "x".to_string()));
        assert!(state.is_busy(0));
    }

    #[test]
    fn test_replace_and_remove() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false)]);

        state.replace(Todo { title: "Renamed".to_string(), ..make_todo(2, true) });
        assert_eq!(state.get(2).unwrap().title, "Renamed");
        assert!(state.get(2).unwrap().completed);

        // Unknown id leaves the list alone
        state.replace(make_todo(9, true));
        assert_eq!(state.todos.len(), 2);

        state.remove(1);
        assert!(state.get(1).is_none());
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn test_set_completed_returns_previous() {
        let mut state = state_with(vec![make_todo(1, false)]);
        assert_eq!(state.set_completed(1, true), Some(false));
        assert!(state.get(1).unwrap().completed);
        assert_eq!(state.set_completed(5, true), None);
    }

    #[test]
    fn test_stale_error_clear_keeps_newer_error() {
        let mut state = TodoState::default();
        let first = state.show_error("first");
        let second = state.show_error("second");
        assert_ne!(first, second);

        state.clear_error(first);
        assert_eq!(state.error.as_ref().unwrap().message, "second");

        state.clear_error(second);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = TodoState::default();
        state.show_error("boom");
        state.dismiss_error();
        assert!(state.error.is_none());
    }
}
