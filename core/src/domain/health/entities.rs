use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub is_healthy: bool,
    /// Round trip of the probe query, in milliseconds.
    pub response_time_ms: u64,
    pub details: String,
}
