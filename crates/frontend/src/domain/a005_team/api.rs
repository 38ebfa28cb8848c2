use contracts::domain::a005_team::aggregate::Team;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_teams() -> Result<Vec<Team>, ApiError> {
    get_json("/api/teams").await
}
