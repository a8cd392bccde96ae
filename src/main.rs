use anyhow::Result;
use blog_project::server::{self, MigrateDirection, ServerConfig};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the blog and TestModel GraphQL APIs
    Serve {
        #[clap(short, long, default_value = "8000")]
        port: u16,
        #[clap(short, long, default_value = "blog.db")]
        database: String,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Apply or roll back schema migrations
    Migrate {
        #[clap(short, long, default_value = "blog.db")]
        database: String,
        #[clap(subcommand)]
        direction: MigrateDirection,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(args.log_level.as_deref());

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
        } => {
            let config = ServerConfig {
                port,
                database_path: database,
                cors_origin,
            };
            info!("Starting server on port {}", config.port);
            server::start_server(&config).await?;
        }
        Commands::Migrate {
            database,
            direction,
        } => {
            server::migrate_database(&database, direction).await?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over `--log-level`; unknown levels fall back to info.
fn setup_logging(log_level: Option<&str>) {
    let level = log_level
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sqlx=warn,sea_orm=warn,{}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
