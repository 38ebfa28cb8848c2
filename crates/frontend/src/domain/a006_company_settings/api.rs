use contracts::domain::a006_company_settings::aggregate::{CompanyInfo, SettingsBundle};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, put_json};

/// Company info and general settings in one call
pub async fn fetch_settings() -> Result<SettingsBundle, ApiError> {
    get_json("/api/settings/all").await
}

pub async fn update_company(info: &CompanyInfo) -> Result<CompanyInfo, ApiError> {
    put_json("/api/settings/company", info).await
}
