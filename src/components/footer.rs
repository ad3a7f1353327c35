//! Footer Component
//!
//! Remaining-count, filter links and clear-completed. The links only change
//! the location hash; `App` maps hash changes onto the filter.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::store::{use_todo_store, TodoStateStoreFields};

fn items_left(count: usize) -> String {
    match count {
        1 => "1 item left".to_string(),
        n => format!("{} items left", n),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || items_left(store.read().active_count())}
            </span>

            <nav class="filter" data-cy="Filter">
                {Filter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <a
                                href=filter.href()
                                data-cy=format!("FilterLink{}", filter.label())
                                class=move || {
                                    if store.filter().get() == filter {
                                        "filter__link selected"
                                    } else {
                                        "filter__link"
                                    }
                                }
                            >
                                {filter.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                prop:disabled=move || store.read().completed_count() == 0
                on:click=move |_| ctx.spawn(|sync| async move { sync.clear_completed().await })
            >
                "Clear completed"
            </button>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_pluralizes() {
        assert_eq!(items_left(0), "0 items left");
        assert_eq!(items_left(1), "1 item left");
        assert_eq!(items_left(3), "3 items left");
    }
}
