use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;

use innkeeper::{cli, db, seed, server, HotelManager};

#[derive(Parser)]
#[command(name = "innkeeper", version, about = "Hotel management system")]
struct Args {
    /// SQLite database URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://hotel.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the JSON web API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Run the interactive text menu
    Menu,
    /// Populate the sample rooms
    Seed,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    log::info!("Connecting to database...");
    let pool = db::connect(&args.database_url)
        .await
        .context("failed to open database")?;

    log::info!("Running migrations...");
    db::MIGRATOR
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    match args.command {
        Command::Serve { bind } => server::run(pool, &bind).await?,
        Command::Menu => cli::run(&HotelManager::new(pool)).await?,
        Command::Seed => seed::run(&HotelManager::new(pool)).await?,
    }

    Ok(())
}
