//! File source panel: drag-and-drop upload plus the uploaded-document list.
//!
//! Upload batches are filtered against the extension allowlist before any
//! network traffic, with a single toast when anything was dropped. Accepted
//! files upload sequentially, each as an independent multipart request, and
//! the list refetches after every successful mutation.

use leptos::prelude::*;

use crate::components::sources::{SourceItemRow, fetch_documents};
use crate::net::http::ApiClient;
use crate::net::types::{SourceDocument, SourceKind};
use crate::state::notify::Notifier;
use crate::state::sources::SourceList;

/// Toast for a batch that contained unsupported extensions.
pub const UNSUPPORTED_FILES_MESSAGE: &str = "Some files were not supported and were removed";

#[component]
pub fn FilesSourcePanel(bot_id: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let list = RwSignal::new(SourceList::default());
    let pending_delete = RwSignal::new(None::<SourceDocument>);
    let drag_active = RwSignal::new(false);

    // Initial list load.
    fetch_documents(&client, notify, list, &bot_id, SourceKind::File);

    let on_input_change = {
        let client = client.clone();
        let bot_id = bot_id.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "hydrate")]
            {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                if let Some(file_list) = input.files() {
                    start_upload_batch(&client, notify, list, &bot_id, collect_files(&file_list));
                    input.set_value("");
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&ev, &client, &bot_id);
            }
        }
    };

    let on_drop = {
        let client = client.clone();
        let bot_id = bot_id.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            drag_active.set(false);
            #[cfg(feature = "hydrate")]
            {
                if let Some(file_list) = ev.data_transfer().and_then(|dt| dt.files()) {
                    start_upload_batch(&client, notify, list, &bot_id, collect_files(&file_list));
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&ev, &client, &bot_id);
            }
        }
    };

    let on_confirm_delete = {
        let client = client;
        let bot_id = bot_id;
        Callback::new(move |_: ()| {
            let Some(doc) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let Some(armed) = list.try_update(|l| l.begin_delete(&doc.id)) else {
                return;
            };
            if !armed {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let bot_id = bot_id.clone();
                leptos::task::spawn_local(async move {
                    match client.remove_document_by_name(&bot_id, &doc.filename).await {
                        Ok(_) => {
                            notify.success("File deleted successfully");
                            fetch_documents(&client, notify, list, &bot_id, SourceKind::File);
                        }
                        Err(_) => notify.error("Failed to delete file"),
                    }
                    list.update(|l| l.finish_delete(&doc.id));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &bot_id, doc);
            }
        })
    };

    let on_cancel_delete = Callback::new(move |_: ()| pending_delete.set(None));
    let on_request_delete = Callback::new(move |id: String| {
        let doc = list
            .get_untracked()
            .items
            .iter()
            .find(|d| d.id == id)
            .cloned();
        pending_delete.set(doc);
    });

    view! {
        <div class="source-panel">
            <div class="source-panel__header">
                <h2>"Files"</h2>
                <p class="source-panel__hint">
                    "Upload and manage documents to train your AI agent."
                </p>
            </div>

            <label
                class=move || {
                    if drag_active.get() {
                        "dropzone dropzone--active"
                    } else {
                        "dropzone"
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                <input
                    class="dropzone__input"
                    type="file"
                    multiple=true
                    accept=".pdf,.doc,.docx,.txt"
                    on:change=on_input_change
                />
                <span>
                    {move || {
                        if drag_active.get() {
                            "Drop the files here..."
                        } else {
                            "Drag and drop files here, or click to select files"
                        }
                    }}
                </span>
                <span class="dropzone__hint">"Supported formats: PDF, DOC, DOCX, TXT"</span>
            </label>

            <div class="source-panel__list">
                <Show
                    when=move || !list.get().loading
                    fallback=|| view! { <p class="source-panel__empty">"Loading files..."</p> }
                >
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| {
                            view! { <p class="source-panel__empty">"No files uploaded yet"</p> }
                        }
                    >
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|doc| {
                                    let row_id = doc.id.clone();
                                    let deleting =
                                        Signal::derive(move || list.get().is_deleting(&row_id));
                                    view! {
                                        <SourceItemRow
                                            id=doc.id
                                            filename=doc.filename
                                            created_at=doc.created_at
                                            deleting=deleting
                                            on_delete=on_request_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </Show>
            </div>

            <p class="source-panel__note">
                "Note: For PDFs, ensure text selection/highlighting is possible."
            </p>

            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_cancel_delete.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Document"</h2>
                        <p class="dialog__danger">
                            "Are you sure you want to delete this document? This action cannot be undone."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_cancel_delete.run(())>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_confirm_delete.run(())
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Filter a dropped or picked batch against the allowlist (one toast when
/// anything was removed) and upload the accepted files one at a time.
#[cfg(feature = "hydrate")]
fn start_upload_batch(
    client: &ApiClient,
    notify: Notifier,
    list: RwSignal<SourceList>,
    bot_id: &str,
    files: Vec<web_sys::File>,
) {
    use crate::util::validate::plan_upload_batch;

    let names: Vec<String> = files.iter().map(web_sys::File::name).collect();
    let plan = plan_upload_batch(&names);
    if plan.rejected > 0 {
        notify.error(UNSUPPORTED_FILES_MESSAGE);
    }
    if plan.accepted.is_empty() {
        return;
    }

    let accepted: Vec<web_sys::File> = files
        .into_iter()
        .filter(|file| plan.accepted.contains(&file.name()))
        .collect();
    let client = client.clone();
    let bot_id = bot_id.to_owned();
    leptos::task::spawn_local(async move {
        // One request at a time; each file is its own upload.
        for file in accepted {
            let name = file.name();
            match client.upload_file(&bot_id, &file).await {
                Ok(_) => {
                    notify.success(format!("Successfully uploaded {name}"));
                    fetch_documents(&client, notify, list, &bot_id, SourceKind::File);
                }
                Err(_) => notify.error(format!("Failed to upload {name}")),
            }
        }
    });
}

/// Materialize a `FileList` into a vector of `File` handles.
#[cfg(feature = "hydrate")]
fn collect_files(file_list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..file_list.length())
        .filter_map(|index| file_list.item(index))
        .collect()
}
