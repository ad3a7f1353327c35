//! Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let input_ref = NodeRef::<html::Input>::new();

    // Refocus the input whenever a create finishes
    Effect::new(move |_| {
        let submitting = store.submitting().get();
        if let Some(input) = input_ref.get() {
            if !submitting {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.draft().get_untracked();
        ctx.spawn(move |sync| async move { sync.create(&title).await });
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || !store.todos().read().is_empty()>
                <button
                    type="button"
                    data-cy="ToggleAllButton"
                    class=move || {
                        if store.read().all_completed() {
                            "todoapp__toggle-all active"
                        } else {
                            "todoapp__toggle-all"
                        }
                    }
                    on:click=move |_| ctx.spawn(|sync| async move { sync.toggle_all().await })
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || store.draft().get()
                    prop:disabled=move || store.submitting().get()
                    on:input=move |ev| ctx.sync().set_draft(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
