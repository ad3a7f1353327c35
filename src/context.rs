//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::store::TodoStore;
use crate::sync::TodoSync;

pub type AppSync = TodoSync<HttpTodoApi, TodoStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sync layer; lives in local storage because its API client isn't `Send`
    sync: StoredValue<AppSync, LocalStorage>,
}

impl AppContext {
    pub fn new(sync: AppSync) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
        }
    }

    pub fn sync(&self) -> AppSync {
        self.sync.get_value()
    }

    /// Run an async sync operation on the local executor
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppSync) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.sync()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
