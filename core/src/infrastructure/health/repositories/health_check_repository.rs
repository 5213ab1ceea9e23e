use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs `SELECT 1` and returns the round trip in milliseconds.
    async fn ping(&self) -> Result<u64, String> {
        let started = Instant::now();

        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(|e| e.to_string())?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.ping().await {
            Ok(response_time_ms) => Ok(DatabaseHealthStatus {
                is_healthy: true,
                response_time_ms,
                details: "database connection is healthy".to_string(),
            }),
            Err(e) => {
                error!("Database readiness probe failed: {}", e);
                Ok(DatabaseHealthStatus {
                    is_healthy: false,
                    response_time_ms: 0,
                    details: e,
                })
            }
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await.map_err(|e| {
            error!("Database health probe failed: {}", e);
            CoreError::ServiceUnavailable("database is unreachable".to_string())
        })
    }
}
