use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::storage;

/// Component that requires the session auth flag.
/// Redirects to the login route if the flag is absent.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || storage::is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
