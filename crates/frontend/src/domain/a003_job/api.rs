use contracts::domain::a003_job::aggregate::Job;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_jobs() -> Result<Vec<Job>, ApiError> {
    get_json("/api/jobs").await
}

pub async fn fetch_job(id: &str) -> Result<Job, ApiError> {
    get_json(&format!("/api/jobs/{}", urlencoding::encode(id))).await
}
