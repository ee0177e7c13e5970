use clap::Parser;
use log::debug;

use hkaudit::cli::{
    AppsCommand, Cli, Command, DomainsCommand, EnvCommand, PostgresCommand, RedisCommand,
    UsersCommand,
};
use hkaudit::heroku::{apps, domains, env, postgres, redis, users};
use hkaudit::{ApiKeyResolver, HerokuClient, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let api_key = ApiKeyResolver::resolve(cli.api_key.as_deref())?;
    let client = HerokuClient::new(api_key);
    let quiet = cli.quiet;

    debug!("Running command: {:?}", cli.command);

    match &cli.command {
        Command::Apps(command) => match command {
            AppsCommand::Formation(args) => apps::run_formation(&client, args, quiet).await,
            AppsCommand::Addon(args) => apps::run_addon(&client, args, quiet).await,
            AppsCommand::Access(args) => apps::run_access(&client, args, quiet).await,
            AppsCommand::Domains(args) => apps::run_domains(&client, args, quiet).await,
        },
        Command::Env(command) => match command {
            EnvCommand::ValueOf(args) => env::run_value_of(&client, args, quiet).await,
            EnvCommand::Contains(args) => env::run_contains(&client, args, quiet).await,
        },
        Command::Domains(command) => match command {
            DomainsCommand::Matches(args) => domains::run_matches(&client, args, quiet).await,
        },
        Command::Postgres(command) => match command {
            PostgresCommand::MajorVersion(args) => {
                postgres::run_major_version(&client, args, quiet).await
            }
            PostgresCommand::Plan(args) => postgres::run_plan(&client, args, quiet).await,
            PostgresCommand::Count(args) => postgres::run_count(&client, args, quiet).await,
            PostgresCommand::BackupSchedule(args) => {
                postgres::run_backup_schedule(&client, args, quiet).await
            }
        },
        Command::Redis(command) => match command {
            RedisCommand::MajorVersion(args) => {
                redis::run_major_version(&client, args, quiet).await
            }
            RedisCommand::Plan(args) => redis::run_plan(&client, args, quiet).await,
            RedisCommand::Count(args) => redis::run_count(&client, args, quiet).await,
            RedisCommand::MaxmemoryPolicy(args) => {
                redis::run_maxmemory_policy(&client, args, quiet).await
            }
        },
        Command::Users(command) => match command {
            UsersCommand::Access(args) => users::run_access(&client, args, quiet).await,
        },
    }
}
