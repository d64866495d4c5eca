//! Batch-level error banner.

use leptos::*;

use crate::SessionView;

#[component]
pub fn ErrorBanner(session_view: Memo<SessionView>) -> impl IntoView {
    let message = move || session_view.with(|v| v.error_banner.clone());

    view! {
        <Show
            when=move || message().is_some()
            fallback=|| view! { }
        >
            <div class="error-message" role="alert">
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
