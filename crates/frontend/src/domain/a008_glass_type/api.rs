use contracts::domain::a008_glass_type::aggregate::{GlassType, GlassTypeDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_glass_types() -> Result<Vec<GlassType>, ApiError> {
    get_json("/api/glass-types").await
}

pub async fn create_glass_type(dto: &GlassTypeDto) -> Result<GlassType, ApiError> {
    post_json("/api/glass-types", dto).await
}

pub async fn delete_glass_type(id: &str) -> Result<(), ApiError> {
    delete(&format!("/api/glass-types/{}", id)).await
}
