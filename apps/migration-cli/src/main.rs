use backend::{connect_db, DbKind};
use clap::{Parser, Subcommand, ValueEnum};
use migration::{migrate, seed, MigrationCommand};
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

impl From<Db> for DbKind {
    fn from(db: Db) -> Self {
        match db {
            Db::Postgres => DbKind::Postgres,
            Db::SqliteFile => DbKind::SqliteFile,
        }
    }
}

#[derive(Clone, Copy, Subcommand)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Roll back the last applied migration
    Down,
    /// Drop all tables, then apply every migration
    Fresh,
    /// Roll back every applied migration
    Reset,
    /// Roll back every applied migration, then apply them again
    Refresh,
    /// Show applied and pending migrations
    Status,
    /// Apply pending migrations and insert the fixed seed games
    Seed,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Hangman database migration tool")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Database type. In-memory SQLite is not offered: it would vanish when the command exits.
    #[arg(short, long, value_enum, default_value = "postgres", global = true)]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!(error = %e, "migration command failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let db = connect_db(args.db.into()).await?;

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
        Command::Seed => {
            migrate(&db, MigrationCommand::Up).await?;
            let written = seed(&db).await?;
            info!(written, "seed complete");
            return Ok(());
        }
    };

    migrate(&db, command).await?;
    Ok(())
}
