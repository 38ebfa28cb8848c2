use contracts::domain::a007_job_role::aggregate::{JobRoleConfig, JobRoleDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

pub async fn fetch_job_roles() -> Result<Vec<JobRoleConfig>, ApiError> {
    get_json("/api/job-roles").await
}

pub async fn create_job_role(dto: &JobRoleDto) -> Result<JobRoleConfig, ApiError> {
    post_json("/api/job-roles", dto).await
}

pub async fn update_job_role(id: &str, dto: &JobRoleDto) -> Result<JobRoleConfig, ApiError> {
    put_json(&format!("/api/job-roles/{}", id), dto).await
}

/// The backend deactivates the role instead of removing it.
pub async fn deactivate_job_role(id: &str) -> Result<(), ApiError> {
    delete(&format!("/api/job-roles/{}", id)).await
}
