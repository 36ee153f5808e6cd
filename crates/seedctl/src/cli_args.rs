use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "seedctl")]
#[command(about = "Provision test accounts for every role tier")]
pub struct Cli {
    #[arg(long, env = "SUPABASE_URL")]
    pub url: Option<String>,
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY")]
    pub service_role_key: Option<String>,
    #[arg(long, help = "Dotenv file with SUPABASE_* values")]
    pub env_file: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
}
