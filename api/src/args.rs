use aahaara_core::domain::{
    common::{AahaaraConfig, AuthConfig, DatabaseConfig, LLMConfig},
    compatibility::entities::{CandidateFallback, CandidatePolicy},
    diet_chart::entities::PlannerConfig,
    specialist::entities::SimilarityConfig,
};
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "aahaara-api", version, about = "Ayurvedic diet planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub planner: PlannerArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "aahaara")]
    pub name: String,

    #[arg(long = "database-max-connections", env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long, env = "JWT_ISSUER")]
    pub jwt_issuer: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PlannerArgs {
    /// Fixed seed for meal sampling; entropy when unset.
    #[arg(long, env = "PLANNER_RNG_SEED")]
    pub rng_seed: Option<u64>,

    #[arg(long, env = "PLANNER_DEFAULT_DURATION_DAYS", default_value_t = 7)]
    pub default_duration_days: i32,

    #[arg(long, env = "PLANNER_MAX_DURATION_DAYS", default_value_t = 90)]
    pub max_duration_days: i32,

    #[arg(
        long,
        env = "PLANNER_GENERATE_RECIPES",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub generate_recipes: bool,

    /// Fail generation instead of serving the unfiltered catalog when
    /// restrictions exclude every food.
    #[arg(long, env = "PLANNER_STRICT_CANDIDATES")]
    pub strict_candidates: bool,

    #[arg(long, env = "SIMILARITY_THRESHOLD", default_value_t = 0.3)]
    pub similarity_threshold: f64,
}

impl From<Args> for AahaaraConfig {
    fn from(args: Args) -> Self {
        let planner = PlannerConfig {
            rng_seed: args.planner.rng_seed,
            default_duration_days: args.planner.default_duration_days,
            max_duration_days: args.planner.max_duration_days,
            generate_recipes: args.planner.generate_recipes,
            ..PlannerConfig::default()
        };

        let candidates = CandidatePolicy {
            fallback: if args.planner.strict_candidates {
                CandidateFallback::Reject
            } else {
                CandidateFallback::Unfiltered
            },
            ..CandidatePolicy::default()
        };

        let similarity = SimilarityConfig {
            threshold: args.planner.similarity_threshold,
            ..SimilarityConfig::default()
        };

        AahaaraConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_issuer: args.auth.jwt_issuer,
            },
            planner,
            similarity,
            candidates,
        }
    }
}
