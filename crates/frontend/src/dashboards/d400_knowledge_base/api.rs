use crate::shared::api_utils::{delete_json, get_json, ApiError};
use contracts::dashboards::d400_knowledge_base::DatabaseStats;
use contracts::shared::api::{ApiEndpoint, ClearResponse};

/// Current snapshot of the index
pub async fn fetch_stats() -> Result<DatabaseStats, ApiError> {
    get_json(ApiEndpoint::Stats).await
}

/// Remove every indexed document
pub async fn clear_database() -> Result<ClearResponse, ApiError> {
    delete_json(ApiEndpoint::Clear).await
}
