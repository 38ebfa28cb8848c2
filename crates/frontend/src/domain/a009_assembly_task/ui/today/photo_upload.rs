use contracts::domain::a009_assembly_task::today::UploadPurpose;
use leptos::ev::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_document::api::upload_job_photo;
use crate::shared::dialogs::alert;
use crate::shared::file_utils::{clear_file_input, selected_file};

/// File picker that files the chosen photo into the job archive and
/// reports the stored reference.
#[component]
pub fn PhotoUpload(
    #[prop(into)]
    label: String,
    job_id: String,
    purpose: UploadPurpose,
    uploading: RwSignal<bool>,
    on_uploaded: Callback<String>,
) -> impl IntoView {
    let job_id = StoredValue::new(job_id);

    let on_change = move |ev: Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        clear_file_input(&ev);
        let job_id = job_id.get_value();
        uploading.set(true);
        spawn_local(async move {
            match upload_job_photo(&file, &job_id, Some(purpose)).await {
                Ok(location) => {
                    log::info!("Uploaded {} for job {}", purpose.doc_type(), job_id);
                    on_uploaded.run(location);
                }
                Err(e) => {
                    log::error!("Photo upload failed: {}", e);
                    alert(&e.to_string());
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <label class="photo-upload">
            <span class="photo-upload__label">{label}</span>
            <input
                type="file"
                accept="image/*"
                disabled=move || uploading.get()
                on:change=on_change
            />
        </label>
    }
}

/// Thumbnails of already uploaded photos
#[component]
pub fn PhotoStrip(#[prop(into)] photos: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="photo-strip">
            {move || {
                photos
                    .get()
                    .into_iter()
                    .map(|src| view! { <img class="photo-strip__item" src=src /> })
                    .collect_view()
            }}
        </div>
    }
}
