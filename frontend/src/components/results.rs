//! Per-file analysis results.

use leptos::*;

use crate::SessionView;

#[component]
pub fn ResultsSection(session_view: Memo<SessionView>) -> impl IntoView {
    view! {
        <Show
            when=move || session_view.with(SessionView::has_results)
            fallback=|| view! { }
        >
            <div class="results-section">
                <h3>"Analysis Results:"</h3>
                <For
                    each=move || session_view.with(|v| v.results.clone()).into_iter().enumerate()
                    key=|(idx, block)| (*idx, block.filename.clone())
                    children=move |(_, block)| {
                        view! {
                            <div class="result-item">
                                <h4 class="result-filename">{block.filename}</h4>
                                <pre class="result-body">{block.body}</pre>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
