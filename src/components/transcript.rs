//! Transcript renderer: the ordered visual log of questions, answers, and
//! errors, with auto-scroll and the one-time placeholder shrink.
//!
//! Answer bodies carry the annotator's inline markup and render as rich
//! content; question and error bodies render as plain text so user input
//! and error messages cannot inject markup.

use leptos::prelude::*;

use crate::components::chart_slot::ChartSlot;
use crate::controller::Controller;
use crate::state::conversation::TranscriptEntry;

/// The `#output-area` log. Entries are keyed by their append position so
/// already-mounted chart surfaces survive later appends.
#[component]
pub fn Transcript() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Measure the empty-state region once, at mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = output_ref.get() {
            let height = f64::from(el.client_height());
            controller.conversation.update(|c| c.placeholder.measure(height));
        }
    });

    // Pin to bottom after every append; while the placeholder is active,
    // the scroll overflow is what shrinks it.
    Effect::new(move || {
        let _ = controller.entries.get().len();

        #[cfg(feature = "hydrate")]
        if let Some(el) = output_ref.get() {
            let overflow = el.scroll_height() - el.client_height();
            el.set_scroll_top(overflow);
            controller
                .conversation
                .update(|c| c.placeholder.absorb(f64::from(overflow)));
        }
    });

    let placeholder_height = move || {
        controller
            .conversation
            .get()
            .placeholder
            .css_height()
            .unwrap_or_default()
    };

    view! {
        <div class="output-area" id="output-area" node_ref=output_ref>
            <div class="null" style:height=placeholder_height></div>
            <For
                each=move || controller.entries.get().into_iter().enumerate()
                key=|(position, _)| *position
                children=|(_, entry)| entry_view(entry)
            />
        </div>
    }
}

/// One visual block per entry, tagged by kind. Answers are followed by
/// their chart slots.
fn entry_view(entry: TranscriptEntry) -> impl IntoView {
    let class = entry.kind_class();
    let label = entry.label().unwrap_or_default();

    match entry {
        TranscriptEntry::Answer {
            ordinal,
            body,
            chart_count,
        } => {
            let slots = (0..chart_count)
                .map(|index| view! { <ChartSlot ordinal=ordinal index=index/> })
                .collect::<Vec<_>>();
            view! {
                <div class=class>{label}<span inner_html=body></span></div>
                {slots}
            }
            .into_any()
        }
        TranscriptEntry::Question { body, .. } | TranscriptEntry::Error { body, .. } => {
            view! { <div class=class>{format!("{label}{body}")}</div> }.into_any()
        }
    }
}
