use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod modules;

use crate::cli_args::Cli;
use crate::modules::seed::{print_credentials_table, run_seed, TEST_USERS};
use crate::modules::supabase::ServiceContext;

const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
const SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";
const DEFAULT_ENV_FILE: &str = "../snsd-backend/.env";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    load_env_file(cli.env_file.as_deref())?;

    let url = cli
        .url
        .clone()
        .or_else(|| std::env::var(SUPABASE_URL_ENV).ok())
        .filter(|value| !value.is_empty());
    let Some(url) = url else {
        anyhow::bail!("{SUPABASE_URL_ENV} not set; pass --url or add it to the env file");
    };
    let key = cli
        .service_role_key
        .clone()
        .or_else(|| std::env::var(SERVICE_ROLE_KEY_ENV).ok())
        .filter(|value| !value.is_empty());
    let Some(key) = key else {
        anyhow::bail!(
            "{SERVICE_ROLE_KEY_ENV} not set; pass --service-role-key or add it to the env file"
        );
    };
    ensure_secure_addr(&url, cli.insecure)?;

    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let ctx = ServiceContext {
        client: &client,
        url: &url,
        service_role_key: &key,
    };

    run_seed(&ctx).await?;
    print_credentials_table(&TEST_USERS);

    Ok(())
}

fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}

// Process environment always wins; the file only fills in missing values.
fn load_env_file(path: Option<&str>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .map_err(|err| anyhow::anyhow!("failed to load env file {path}: {err}"))?;
        }
        None => {
            if Path::new(DEFAULT_ENV_FILE).exists() {
                dotenvy::from_path(DEFAULT_ENV_FILE)?;
            }
        }
    }
    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}
