use contracts::domain::a001_document::aggregate::Document;
use leptos::prelude::*;
use thaw::*;

use super::state::ArchiveState;
use super::{category_of, uploaded_label};
use crate::domain::a001_document::api::download_url;
use crate::shared::file_utils::format_optional_size;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn PreviewModal(doc: Document, state: ArchiveState) -> impl IntoView {
    let close = Callback::new(move |_| state.preview.set(None));
    let href = download_url(&doc.id);
    let src = doc.stored_location().map(str::to_string).unwrap_or_else(|| href.clone());
    let (category_label, _) = category_of(&doc);
    let name = doc.display_name().to_string();
    let size = format_optional_size(doc.size);
    let uploaded = uploaded_label(&doc);
    let description = doc.description.clone().filter(|d| !d.is_empty());

    let body = if doc.is_image() {
        view! { <img class="preview__image" src=src alt=name.clone() /> }.into_any()
    } else if doc.is_pdf() {
        view! { <iframe class="preview__pdf" src=src></iframe> }.into_any()
    } else {
        view! { <div class="preview__none">"No preview for this file type"</div> }.into_any()
    };

    let to_delete = StoredValue::new(doc);

    view! {
        <Modal title=name on_close=close wide=true>
            <div class="preview">
                {body}
                <div class="preview__meta">
                    <div class="detail-row">
                        <span class="detail-row__label">"Type"</span>
                        <span class="detail-row__value">{category_label}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Size"</span>
                        <span class="detail-row__value">{size}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Uploaded"</span>
                        <span class="detail-row__value">{uploaded}</span>
                    </div>
                    {description.map(|d| view! {
                        <div class="detail-row">
                            <span class="detail-row__label">"Description"</span>
                            <span class="detail-row__value">{d}</span>
                        </div>
                    })}
                </div>
            </div>
            <div class="modal-footer">
                <a class="button button--secondary" href=href target="_blank" download="">
                    {icon("download")}
                    " Download"
                </a>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=state.deleting
                    on_click=move |_| state.delete(to_delete.get_value())
                >
                    {icon("trash")}
                    " Delete"
                </Button>
            </div>
        </Modal>
    }
}
