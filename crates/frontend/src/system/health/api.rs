use crate::shared::api_utils::{get_json, ApiError};
use contracts::shared::api::{ApiEndpoint, HealthResponse};

/// Ping the backend
pub async fn fetch_health() -> Result<HealthResponse, ApiError> {
    get_json(ApiEndpoint::Health).await
}
