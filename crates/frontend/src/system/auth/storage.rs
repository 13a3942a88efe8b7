use web_sys::window;

const AUTH_FLAG_KEY: &str = "isAuthenticated";

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Mark the browser session as authenticated.
pub fn set_authenticated() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(AUTH_FLAG_KEY, "true");
    }
}

/// Check the session flag; absent means unauthenticated.
pub fn is_authenticated() -> bool {
    session_storage()
        .and_then(|s| s.get_item(AUTH_FLAG_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}

/// Clear the session flag (logout).
pub fn clear_authenticated() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(AUTH_FLAG_KEY);
    }
}
