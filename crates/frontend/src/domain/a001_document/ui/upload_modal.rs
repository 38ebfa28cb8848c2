use contracts::domain::a001_document::archive::{document_type_info, ArchiveTab};
use contracts::domain::a001_document::request::UploadDocumentForm;
use contracts::domain::a002_folder::aggregate::company_subfolders;
use leptos::ev::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use super::state::ArchiveState;
use crate::domain::a001_document::api::upload_document;
use crate::shared::dialogs::alert;
use crate::shared::file_utils::{format_file_size, selected_file};
use crate::shared::modal::Modal;

fn doc_type_label(key: &str) -> String {
    document_type_info(key)
        .map(|info| info.label.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[component]
pub fn UploadModal(state: ArchiveState) -> impl IntoView {
    let tab = state.tab.get_untracked();
    let file = RwSignal::new_local(None::<File>);
    let doc_type = RwSignal::new(tab.default_doc_type().to_string());
    let description = RwSignal::new(String::new());
    let job_id = RwSignal::new(String::new());
    let supplier_id = RwSignal::new(String::new());
    // Компания: текущая выбранная подпапка подставляется сразу
    let folder_id = RwSignal::new(if tab == ArchiveTab::Company {
        state.folder_id.get_untracked().unwrap_or_default()
    } else {
        String::new()
    });
    let uploading = RwSignal::new(false);

    let close = Callback::new(move |_| state.show_upload.set(false));

    let on_file = move |ev: Event| {
        file.set(selected_file(&ev));
    };

    let submit = move |_| {
        let form = UploadDocumentForm {
            doc_type: doc_type.get_untracked(),
            description: description.get_untracked().trim().to_string(),
            job_id: job_id.get_untracked(),
            supplier_id: supplier_id.get_untracked(),
            folder_id: folder_id.get_untracked(),
        };
        let chosen = file.get_untracked();
        if let Err(e) = form.validate(chosen.is_some()) {
            alert(&e.to_string());
            return;
        }
        let Some(chosen) = chosen else {
            return;
        };
        uploading.set(true);
        spawn_local(async move {
            match upload_document(&chosen, &form).await {
                Ok(doc) => {
                    log::info!("Document {} uploaded", doc.id);
                    state.prepend(doc);
                    state.show_upload.set(false);
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    alert(&e.to_string());
                }
            }
            uploading.set(false);
        });
    };

    let reference_field = match tab {
        ArchiveTab::Jobs => view! {
            <div class="form-field">
                <label>"Job *"</label>
                <Select value=job_id>
                    <option value="">"Select a job"</option>
                    {move || {
                        state
                            .jobs
                            .get()
                            .into_iter()
                            .map(|j| {
                                let caption = format!(
                                    "{} - {}",
                                    j.display_title(),
                                    j.display_customer().unwrap_or("-")
                                );
                                view! { <option value=j.id.clone()>{caption}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
            </div>
        }
        .into_any(),
        ArchiveTab::Company => view! {
            <div class="form-field">
                <label>"Folder *"</label>
                <Select value=folder_id>
                    <option value="">"Select a folder"</option>
                    {move || {
                        state
                            .folders
                            .with(|f| company_subfolders(f))
                            .into_iter()
                            .map(|f| {
                                let caption = format!("{} {}", f.icon_or_default(), f.name);
                                view! { <option value=f.id.clone()>{caption}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
            </div>
        }
        .into_any(),
        ArchiveTab::Suppliers => view! {
            <div class="form-field">
                <label>"Supplier *"</label>
                <Select value=supplier_id>
                    <option value="">"Select a supplier"</option>
                    {move || {
                        state
                            .suppliers
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> })
                            .collect_view()
                    }}
                </Select>
            </div>
        }
        .into_any(),
    };

    view! {
        <Modal title=format!("Upload: {}", tab.label()) on_close=close>
            <div class="form-grid">
                <div class="form-field form-field--wide">
                    <label>"File *"</label>
                    <input type="file" on:change=on_file />
                    {move || file.with(|f| f.as_ref().map(|f| format!(
                        "{} ({})",
                        f.name(),
                        format_file_size(f.size() as u64)
                    )))}
                </div>
                <div class="form-field">
                    <label>"Document type"</label>
                    <Select value=doc_type>
                        {tab
                            .doc_type_options()
                            .iter()
                            .map(|key| view! { <option value=*key>{doc_type_label(key)}</option> })
                            .collect_view()}
                    </Select>
                </div>
                {reference_field}
                <div class="form-field form-field--wide">
                    <label>"Description"</label>
                    <Input value=description placeholder="Optional description" />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=uploading
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>
        </Modal>
    }
}
