//! Chat page - View Component

use contracts::chat::{Message, MessageStatus, Sender, ThinkingStep};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::model;
use super::stream::{StreamCallbacks, StreamHandle};
use super::view_model::ChatVm;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use crate::shared::session_store::{clear_chat_history, load_chat_history, save_chat_history};
use crate::shared::theme::ThemeToggle;
use crate::system::auth::storage;

#[component]
fn ThinkingSteps(steps: Vec<ThinkingStep>) -> impl IntoView {
    view! {
        <div class="thinking-steps">
            {steps
                .into_iter()
                .map(|step| {
                    view! {
                        <div class="thinking-step">
                            <span class="thinking-step-kind">{step.step.as_str()}</span>
                            <span>{step.message}</span>
                            {step
                                .count
                                .map(|count| {
                                    view! {
                                        <span class="thinking-step-count">{format!("({count})")}</span>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ChatMessageBubble(message: Message) -> impl IntoView {
    let is_user = message.sender == Sender::User;
    let bubble_class = match (is_user, message.status) {
        (true, _) => "message-bubble user",
        (false, Some(MessageStatus::Error)) => "message-bubble bot error",
        (false, _) => "message-bubble bot",
    };
    let show_steps = !is_user && message.is_streaming && !message.thinking_steps.is_empty();
    let waiting = !is_user && message.is_streaming && message.text.is_empty();

    // User text renders verbatim; bot answers go through the markdown renderer.
    let body = if is_user {
        view! { <div class="message-text">{message.text.clone()}</div> }.into_any()
    } else {
        view! {
            <div class="message-text markdown-body" inner_html=render_markdown(&message.text)></div>
        }
        .into_any()
    };

    view! {
        <div class=format!("message-row {}", if is_user { "user" } else { "bot" })>
            <div class=bubble_class>
                {show_steps.then(|| view! { <ThinkingSteps steps=message.thinking_steps.clone() /> })}
                {body}
                {waiting.then(|| view! { <div class="typing-indicator">"Thinking..."</div> })}
            </div>
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new(load_chat_history());
    let stream_handle = StoredValue::new_local(None::<StreamHandle>);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let navigate = use_navigate();

    // Persist every list change and keep the view pinned to the newest message.
    Effect::new(move |_| {
        let messages = vm.messages.get();
        save_chat_history(&messages);
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let send = move || {
        let text = vm.input.get();
        if text.trim().is_empty() || vm.is_loading.get() {
            return;
        }

        vm.messages.update(|messages| messages.push(Message::user(text.clone())));
        vm.input.set(String::new());
        vm.is_loading.set(true);

        let placeholder = Message::streaming_placeholder();
        let bot_id = placeholder.id;
        vm.messages.update(|messages| messages.push(placeholder));

        let callbacks = StreamCallbacks {
            on_step: Box::new(move |event| {
                if event.step.is_terminal() {
                    // terminal state shows via the message status, not the trace
                    return;
                }
                let step = ThinkingStep::from_event(&event, js_sys::Date::now());
                vm.push_step(bot_id, step);
            }),
            on_complete: Box::new(move |result, _meta| {
                vm.complete_message(bot_id, result);
                stream_handle.set_value(None);
            }),
            on_error: Box::new(move |detail| {
                vm.fail_message(bot_id, &detail);
                stream_handle.set_value(None);
            }),
        };

        match model::query_streaming(&text, callbacks) {
            Ok(handle) => stream_handle.set_value(Some(handle)),
            Err(err) => {
                log::warn!("streaming unavailable, falling back to plain query: {err}");
                spawn_local(async move {
                    match model::query(&text).await {
                        Ok(answer) => vm.complete_message(bot_id, answer),
                        Err(e) => vm.fail_message(bot_id, &e),
                    }
                });
            }
        }
    };

    let clear_chat = move |_| {
        vm.messages.set(Vec::new());
        clear_chat_history();
    };

    let goto_upload = {
        let navigate = navigate.clone();
        move |_| navigate("/upload", Default::default())
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            storage::clear_authenticated();
            navigate("/login", Default::default());
        }
    };

    // Close any in-flight stream so no callback outlives the page.
    on_cleanup(move || {
        stream_handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.close();
            }
        });
    });

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1>"HR Assistant"</h1>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <ThemeToggle />
                    <Button appearance=ButtonAppearance::Secondary on_click=clear_chat>
                        {icon("trash")}
                        " Clear chat"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=goto_upload>
                        {icon("upload")}
                        " Upload Document"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=logout>
                        {icon("logout")}
                        " Logout"
                    </Button>
                </Flex>
            </header>

            <div class="chat-messages" node_ref=messages_container_ref>
                {move || {
                    vm.messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <ChatMessageBubble message=message /> })
                        .collect_view()
                }}
            </div>

            <footer class="chat-input">
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Input
                        value=vm.input
                        placeholder="Type your message..."
                        disabled=vm.is_loading
                        attr:style="flex: 1;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=vm.is_loading
                        on_click=move |_| send()
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </Flex>
            </footer>
        </div>
    }
}
