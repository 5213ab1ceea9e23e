use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::{
    compatibility::entities::CandidatePolicy, diet_chart::entities::PlannerConfig,
    specialist::entities::SimilarityConfig,
};

pub mod entities;
pub mod policies;
pub mod services;

#[cfg(test)]
pub(crate) mod test_utils;

#[derive(Clone, Debug)]
pub struct AahaaraConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub auth: AuthConfig,
    pub planner: PlannerConfig,
    pub similarity: SimilarityConfig,
    pub candidates: CandidatePolicy,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

/// Rounds to two decimals, the precision stored for derived nutrients.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
