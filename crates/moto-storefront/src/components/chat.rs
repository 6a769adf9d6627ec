//! Floating chat widget around the scripted assistant.

use std::time::Duration;

use leptos::prelude::*;
use moto_commerce::assistant;

use crate::state::use_store;

/// One transcript line.
#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    text: String,
    from_user: bool,
}

impl ChatMessage {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: false,
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: true,
        }
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = use_store();

    let messages = RwSignal::new(vec![ChatMessage::bot(assistant::GREETING)]);
    let draft = RwSignal::new(String::new());
    let typing = RwSignal::new(false);

    // The typing delay is pure theater; the input stays disabled while
    // it runs, so replies can never interleave.
    let send = move || {
        let text = draft.get().trim().to_string();
        if text.is_empty() || typing.get() {
            return;
        }
        messages.update(|m| m.push(ChatMessage::user(&text)));
        draft.set(String::new());
        typing.set(true);
        set_timeout(
            move || {
                messages.update(|m| m.push(ChatMessage::bot(assistant::respond(&text))));
                typing.set(false);
            },
            Duration::from_millis(assistant::TYPING_DELAY_MS),
        );
    };

    view! {
        <button class="chat-toggle" on:click=move |_| state.toggle_chat()>
            {move || if state.chat_open.get() { "\u{2715}" } else { "\u{1f4ac}" }}
        </button>
        <Show when=move || state.chat_open.get()>
            <div class="chat-window">
                <div class="chat-header">"MotoMart Assistant"</div>
                <div class="transcript">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|msg| {
                                let side = if msg.from_user { "msg user" } else { "msg bot" };
                                view! { <div class=side>{msg.text}</div> }
                            })
                            .collect_view()
                    }}
                    <Show when=move || typing.get()>
                        <div class="msg bot">"..."</div>
                    </Show>
                </div>
                <div class="composer">
                    <input
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || draft.get()
                        on:input:target=move |ev| draft.set(ev.target().value())
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button
                        class="btn"
                        disabled=move || typing.get() || draft.with(|d| d.trim().is_empty())
                        on:click=move |_| send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
