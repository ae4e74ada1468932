pub mod api;

use contracts::shared::api::HealthResponse;

/// Result of the last backend health check
#[derive(Debug, Clone, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Checking,
    Up(HealthResponse),
    Down(String),
}

impl HealthStatus {
    pub fn from_result<E: std::fmt::Display>(result: Result<HealthResponse, E>) -> Self {
        match result {
            Ok(resp) if resp.is_healthy() => HealthStatus::Up(resp),
            Ok(resp) => HealthStatus::Down(format!("Backend reported status '{}'", resp.status)),
            Err(e) => HealthStatus::Down(e.to_string()),
        }
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, HealthStatus::Checking)
    }

    pub fn label(&self) -> String {
        match self {
            HealthStatus::Unknown => "Not checked".to_string(),
            HealthStatus::Checking => "Checking...".to_string(),
            HealthStatus::Up(resp) => match &resp.service {
                Some(service) => format!("Online ({})", service),
                None => "Online".to_string(),
            },
            HealthStatus::Down(reason) => format!("Unreachable: {}", reason),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HealthStatus::Unknown | HealthStatus::Checking => "health health--unknown",
            HealthStatus::Up(_) => "health health--up",
            HealthStatus::Down(_) => "health health--down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, service: Option<&str>) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            service: service.map(str::to_string),
        }
    }

    #[test]
    fn test_healthy_response_is_up() {
        let status =
            HealthStatus::from_result::<String>(Ok(response("healthy", Some("RAG Chatbot API"))));
        assert!(matches!(status, HealthStatus::Up(_)));
        assert_eq!(status.label(), "Online (RAG Chatbot API)");
        assert_eq!(status.css_class(), "health health--up");
    }

    #[test]
    fn test_unexpected_status_is_down() {
        let status = HealthStatus::from_result::<String>(Ok(response("degraded", None)));
        assert_eq!(status.label(), "Unreachable: Backend reported status 'degraded'");
    }

    #[test]
    fn test_transport_error_is_down() {
        let status = HealthStatus::from_result(Err("Failed to fetch"));
        assert_eq!(status.label(), "Unreachable: Failed to fetch");
        assert!(!status.is_checking());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(HealthStatus::default().label(), "Not checked");
    }
}
