use clap::Parser;
use sajian_core::domain::common::{DatabaseConfig, MessagingConfig, SajianConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "sajian-api", about = "Sajian restaurant catalog service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub kafka: KafkaArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/catalog"
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "sajian")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct KafkaArgs {
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    pub brokers: String,

    #[arg(long, env = "KAFKA_GROUP_ID", default_value = "sajian-catalog")]
    pub group_id: String,

    #[arg(long, env = "KAFKA_CLIENT_ID")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// Shared secret used to verify bearer tokens
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,
}

impl From<Args> for SajianConfig {
    fn from(args: Args) -> Self {
        SajianConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            messaging: MessagingConfig {
                brokers: args.kafka.brokers,
                group_id: args.kafka.group_id,
                client_id: args.kafka.client_id,
            },
        }
    }
}
