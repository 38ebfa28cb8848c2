use contracts::domain::a002_folder::aggregate::{CreateFolderDto, Folder};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_folders() -> Result<Vec<Folder>, ApiError> {
    get_json("/api/folders").await
}

pub async fn create_folder(dto: &CreateFolderDto) -> Result<Folder, ApiError> {
    post_json("/api/folders", dto).await
}

pub async fn delete_folder(id: &str) -> Result<(), ApiError> {
    delete(&format!("/api/folders/{}", id)).await
}
