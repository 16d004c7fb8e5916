//! Input row: question entry with Enter-to-send, plus send/clear buttons.

use leptos::prelude::*;

use crate::controller::Controller;

/// Question input bound to the conversation controller. Validation
/// failures surface as a modal alert and never touch the transcript.
#[component]
pub fn AskBar() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let question = input.get();
        match controller.submit(&question) {
            Ok(()) => input.set(String::new()),
            Err(err) => alert(&err.to_string()),
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="ask-bar">
            <input
                class="ask-bar__input"
                id="input-dialog"
                type="text"
                placeholder="请输入您的问题"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn ask-bar__clear" id="clear-btn" on:click=move |_| input.set(String::new())>
                "清空"
            </button>
            <button class="btn btn--primary ask-bar__send" id="send-btn" on:click=move |_| do_send()>
                "发送"
            </button>
        </div>
    }
}

/// Modal-style alert, browser-only.
fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
