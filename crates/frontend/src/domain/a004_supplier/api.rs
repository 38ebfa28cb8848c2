use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    get_json("/api/suppliers").await
}
