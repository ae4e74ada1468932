use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::file_drop::FileDropZone;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_documents::files::{
    accept_attribute, is_accepted, MAX_FILE_SIZE_MB,
};
use contracts::usecases::u501_upload_documents::{
    validate_selection, SelectedFile, UploadDocuments, UploadState, UploadTracker,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const HOW_IT_WORKS: [(&str, &str); 4] = [
    ("Upload:", "Select or drag PDF/CSV files containing your documents"),
    ("Process:", "Files are automatically parsed and split into searchable chunks"),
    ("Embed:", "Text chunks are converted to vector embeddings for similarity search"),
    ("Chat:", "Ask questions and get AI-powered answers based on your documents"),
];

#[component]
pub fn UploadDocumentsView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let tracker = RwSignal::new(UploadTracker::default());
    let state = Memo::new(move |_| tracker.with(|t| t.state().clone()));
    let drag_active = RwSignal::new(false);
    let skipped = RwSignal::new(Vec::<SelectedFile>::new());

    let finish = move |next: UploadState| {
        let Some(timer) = tracker.try_update(|t| t.settle(next)).flatten() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(timer.delay_ms).await;
            if tracker.try_update(|t| t.expire(timer.generation)) == Some(true) {
                skipped.set(Vec::new());
            }
        });
    };

    let on_files = Callback::new(move |files: Vec<web_sys::File>| {
        if tracker.with_untracked(|t| t.state().is_uploading()) {
            return;
        }

        let selected: Vec<SelectedFile> = files
            .iter()
            .map(|f| SelectedFile::new(f.name(), f.size() as u64))
            .collect();
        let (accepted, rejected) = match validate_selection(selected) {
            Ok(split) => split,
            Err(e) => {
                log::warn!("upload selection rejected: {}", e);
                finish(UploadState::fail(e.user_message()));
                return;
            }
        };
        if !rejected.is_empty() {
            log::warn!("skipping {} unsupported file(s)", rejected.len());
        }

        let to_send: Vec<web_sys::File> = files
            .into_iter()
            .filter(|f| is_accepted(&f.name()))
            .collect();
        if tracker.try_update(|t| t.begin(accepted)) != Some(true) {
            return;
        }
        skipped.set(rejected);
        log::info!("uploading {} file(s)", to_send.len());

        spawn_local(async move {
            let next = match api::upload_files(&to_send).await {
                Ok(resp) => {
                    log::info!(
                        "upload done: {} file(s), {} chunks",
                        resp.file_count(),
                        resp.total_chunks
                    );
                    ctx.refresh_stats();
                    UploadState::succeed(resp)
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    UploadState::fail(e.to_string())
                }
            };
            finish(next);
        });
    });

    let status_icon = move || match state.get() {
        UploadState::Idle => view! { <span class="upload-icon">{icon("upload")}</span> }.into_any(),
        UploadState::Uploading { .. } => view! { <Spinner /> }.into_any(),
        UploadState::Success(_) => {
            view! { <span class="status-icon success">{icon("check")}</span> }.into_any()
        }
        UploadState::Failed(_) => {
            view! { <span class="status-icon error">{icon("x")}</span> }.into_any()
        }
    };

    let status_message = move || state.with(|s| s.status_message(drag_active.get()));

    let processing_files = move || match state.get() {
        UploadState::Uploading { files } if !files.is_empty() => Some(view! {
            <div class="file-list">
                <h4>"Processing Files:"</h4>
                {files
                    .into_iter()
                    .map(|file| {
                        view! {
                            <div class="file-item">
                                {icon("file")}
                                <span>{file.name.clone()}</span>
                                <span class="file-size">{file.size_label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }),
        _ => None,
    };

    let results = move || match state.get() {
        UploadState::Success(resp) => Some(view! {
            <div class="upload-results">
                <h4>"Upload Results:"</h4>
                {resp
                    .files
                    .into_iter()
                    .map(|file| {
                        view! {
                            <div class="result-item">
                                {icon("file")}
                                <span>{file.filename}</span>
                                <span class="chunk-count">{format!("{} chunks", file.chunks)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }),
        _ => None,
    };

    view! {
        <div class="upload-section">
            <h2>{UploadDocuments::display_name()}</h2>
            <p>{UploadDocuments::description()}</p>

            <div class="file-upload-container">
                <FileDropZone
                    accept=accept_attribute()
                    disabled=Signal::derive(move || state.with(|s| s.is_uploading()))
                    state_class=Signal::derive(move || state.with(|s| s.css_class()))
                    drag_active=drag_active
                    on_files=on_files
                >
                    <div class="upload-content">
                        {status_icon}
                        <div class="upload-text">
                            <p class="primary-text">{status_message}</p>
                            <Show when=move || state.with(|s| s.is_idle())>
                                <p class="secondary-text">
                                    {format!("Supported formats: PDF, CSV \u{2022} Max size: {}MB per file", MAX_FILE_SIZE_MB)}
                                </p>
                            </Show>
                            {move || {
                                state.with(|s| s.error().map(str::to_string)).map(|e| {
                                    view! {
                                        <div class="error-details">
                                            {icon("alert-circle")}
                                            <span>{e}</span>
                                        </div>
                                    }
                                })
                            }}
                        </div>
                    </div>
                    {processing_files}
                    {results}
                </FileDropZone>

                {move || {
                    let names: Vec<String> = skipped.get().into_iter().map(|f| f.name).collect();
                    (!names.is_empty()).then(|| {
                        view! {
                            <div class="warning-box">
                                {icon("alert-circle")}
                                <span class="warning-box__text">
                                    {format!("Skipped unsupported files: {}", names.join(", "))}
                                </span>
                            </div>
                        }
                    })
                }}
            </div>

            <div class="upload-info">
                <h3>"How it works:"</h3>
                <ol>
                    {HOW_IT_WORKS
                        .iter()
                        .map(|(step, text)| {
                            view! {
                                <li>
                                    <strong>{*step}</strong>
                                    {format!(" {}", text)}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}
