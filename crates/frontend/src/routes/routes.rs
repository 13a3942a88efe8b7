use crate::chat::ChatPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::upload::UploadPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Route table. `/` and `/upload` sit behind the session-flag guard,
/// `/login` is open; anything else falls back to the chat route.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/")
                    view=|| view! { <RequireAuth><ChatPage /></RequireAuth> }
                />
                <Route
                    path=path!("/upload")
                    view=|| view! { <RequireAuth><UploadPage /></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
