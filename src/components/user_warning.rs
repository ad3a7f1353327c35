//! User Warning Component

use leptos::prelude::*;

/// Shown instead of the app when no user id was configured at build time
#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please get your " <b>"userId"</b> " and build the app with "
                <code>"TODOS_USER_ID"</code> " set"
            </p>
        </section>
    }
}
