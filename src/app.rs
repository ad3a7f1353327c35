//! Todos Frontend App
//!
//! Root component: owns the store, loads the list on mount and lays out
//! header, list, footer and error banner.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{ErrorNotification, Footer, Header, TodoRow, UserWarning};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Filter;
use crate::store::{TodoState, TodoStateStoreFields};
use crate::sync::TodoSync;

/// Filter named by the current location hash (`#/active`, `#/completed`)
fn location_filter() -> Filter {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Filter::from_hash(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    if !config.has_user() {
        tracing::warn!("no user id configured, showing warning");
        return view! { <UserWarning /> }.into_any();
    }

    // State
    let store = Store::new(TodoState::new(location_filter()));
    provide_context(store);

    let sync = TodoSync::new(
        HttpTodoApi::new(config.api_base_url.as_str()),
        store,
        config.user_id,
        config.error_timeout_ms,
    );
    let ctx = AppContext::new(sync);
    provide_context(ctx);

    // Filter links and back/forward navigation both land here
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        ctx.sync().set_filter(location_filter());
    });
    on_cleanup(move || hash_listener.remove());

    // Load todos on mount
    Effect::new(move |_| {
        ctx.spawn(|sync| async move { sync.load().await });
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <section class="todoapp__main" data-cy="TodoList">
                    <Show when=move || store.loading().get()>
                        <div class="todoapp__loading" data-cy="TodosLoading">
                            <div class="loader"></div>
                        </div>
                    </Show>
                    <For
                        each=move || store.read().visible()
                        key=|todo| (todo.id, todo.title.clone(), todo.completed)
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </section>

                <Show when=move || !store.todos().read().is_empty()>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
