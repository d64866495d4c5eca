//! File picker and analyze trigger.
//!
//! Selecting files replaces the session's selection. Submitting moves the
//! session to `Pending` synchronously, then the request runs on
//! `spawn_local` and its outcome is written back when it resolves.

use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{AnalysisClient, HttpAnalysisClient};
use crate::{SessionView, UploadSession, ACCEPTED_EXTENSIONS};

#[component]
pub fn UploadSection(
    session: RwSignal<UploadSession<File>>,
    session_view: Memo<SessionView>,
    client: HttpAnalysisClient,
) -> impl IntoView {
    // Picker change: replace the selection
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        session.update(|s| s.select_files(files));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Empty selection or a batch already in flight: nothing to send
        let Some(batch) = session.try_update(UploadSession::begin_submission).flatten() else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.submit_batch(&batch).await;
            session.update(|s| {
                s.complete_submission(result);
            });
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <form on:submit=on_submit>
                <input
                    type="file"
                    id="fileInput"
                    accept=ACCEPTED_EXTENSIONS
                    multiple=true
                    on:change=on_file_change
                />

                <Show
                    when=move || session_view.with(|v| !v.selected_files.is_empty())
                    fallback=|| view! { }
                >
                    <ul class="selected-files">
                        <For
                            each=move || session_view.with(|v| v.selected_files.clone()).into_iter().enumerate()
                            key=|(idx, name)| (*idx, name.clone())
                            children=|(_, name)| view! { <li>{name}</li> }
                        />
                    </ul>
                </Show>

                <button
                    type="submit"
                    class="upload-button"
                    class:pending=move || session_view.with(|v| v.pending)
                    disabled=move || !session_view.with(|v| v.trigger_enabled)
                >
                    {move || session_view.with(|v| v.trigger_label.clone())}
                </button>
            </form>
        </div>
    }
}
