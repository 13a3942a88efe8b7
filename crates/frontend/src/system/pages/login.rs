use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{self, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if auth::check_password(&password.get()) {
            storage::set_authenticated();
            navigate("/", Default::default());
        } else {
            // keep the entered password so the user can fix a typo
            set_error_message.set(Some("Incorrect password, please try again".to_string()));
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"HR Assistant"</h1>
                <h2>"Login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || password.get().is_empty()
                    >
                        "Enter"
                    </button>
                </form>
            </div>
        </div>
    }
}
