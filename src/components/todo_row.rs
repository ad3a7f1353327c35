//! Todo Row Component
//!
//! One todo with checkbox, title, delete button and inline title editor.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::use_todo_store;

/// A single todo in the list
///
/// Double-click opens the editor. Enter, blur and Escape all save; a failed
/// save reopens the editor with the typed text.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let is_pending = todo.is_pending();
    let title = todo.title;

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if editing.get() {
                let _ = input.focus();
            }
        }
    });

    let save = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let new_title = edit_title.get_untracked();
        ctx.spawn(move |sync| async move {
            if sync.rename(id, &new_title).await.is_err() {
                set_edit_title.set(new_title);
                set_editing.set(true);
            }
        });
    };

    let start_editing = {
        let title = title.clone();
        move |_| {
            if is_pending {
                return;
            }
            set_edit_title.set(title.clone());
            set_editing.set(true);
        }
    };

    let row_class = if completed { "todo completed" } else { "todo" };
    let loader_class = move || {
        if store.read().is_busy(id) {
            "modal overlay is-active"
        } else {
            "modal overlay"
        }
    };

    view! {
        <div data-cy="Todo" class=row_class on:dblclick=start_editing>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    on:change=move |_| ctx.spawn(move |sync| async move { sync.toggle(id).await })
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <span data-cy="TodoTitle" class="todo__title">{title.clone()}</span>
                        <button
                            type="button"
                            class="todo__remove"
                            data-cy="TodoDelete"
                            on:click=move |_| {
                                ctx.spawn(move |sync| async move {
                                    let _ = sync.delete(id).await;
                                })
                            }
                        >
                            "×"
                        </button>
                    }
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    save();
                }>
                    <input
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=input_ref
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                save();
                            }
                        }
                    />
                </form>
            </Show>

            <div data-cy="TodoLoader" class=loader_class>
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
