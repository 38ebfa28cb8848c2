use contracts::domain::a001_document::aggregate::Document;
use contracts::domain::a001_document::request::UploadDocumentForm;
use contracts::domain::a009_assembly_task::today::{upload_doc_type, UploadPurpose};
use contracts::shared::api_error::ApiError;
use gloo_net::http::Request;
use web_sys::{File, FormData, Url};

use crate::shared::api_utils::{api_base, api_url, delete, get_json, network_error, read_json};

pub async fn fetch_documents() -> Result<Vec<Document>, ApiError> {
    get_json("/api/documents").await
}

fn form_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("Failed to build form data: {:?}", e))
}

/// Multipart upload; returns the stored document including its url.
pub async fn upload_document(file: &File, form: &UploadDocumentForm) -> Result<Document, ApiError> {
    let form_data = FormData::new().map_err(form_error)?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(form_error)?;
    for (name, value) in form.multipart_fields() {
        form_data.append_with_str(name, &value).map_err(form_error)?;
    }

    let response = Request::post(&api_url("/api/documents/upload"))
        .body(form_data)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Uploads an assembly photo or signature into the job archive and
/// returns the reference to store on the task.
pub async fn upload_job_photo(
    file: &File,
    job_id: &str,
    purpose: Option<UploadPurpose>,
) -> Result<String, ApiError> {
    let form = UploadDocumentForm {
        doc_type: upload_doc_type(purpose).to_string(),
        description: purpose
            .map(|p| p.description())
            .unwrap_or("Assembly photo")
            .to_string(),
        job_id: job_id.to_string(),
        ..Default::default()
    };
    let document = upload_document(file, &form).await?;
    if let Some(location) = document.stored_location() {
        return Ok(location.to_string());
    }
    // backend did not echo a location; keep a local preview reference
    Url::create_object_url_with_blob(file).map_err(form_error)
}

pub async fn delete_document(id: &str) -> Result<(), ApiError> {
    delete(&format!("/api/documents/{}", id)).await
}

pub fn download_url(id: &str) -> String {
    format!("{}/api/documents/{}/download", api_base(), id)
}
