//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::ask_bar::AskBar;
use crate::components::transcript::Transcript;
use crate::controller::Controller;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: one conversation per page load, no routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One controller per session; transcript and counters live for the
    // page's lifetime only.
    let controller = Controller::new();
    provide_context(controller);

    view! {
        <Stylesheet id="leptos" href="/pkg/xiaohang-client.css"/>
        <Title text="小航 — 民航知识问答"/>

        <main class="chat-page">
            <header class="chat-page__header">"小航 — 民航知识问答"</header>
            <Transcript/>
            <AskBar/>
        </main>
    }
}
