mod chat;
mod config;
mod constants;
mod error;
mod print_help;
mod relay;
mod server;
mod utils;

use crate::config::RelayConfig;
use crate::print_help::print_help;
use crate::relay::Relay;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args
        .iter()
        .any(|arg| arg == "-help" || arg == "-h" || arg == "--help")
    {
        print_help();
        return Ok(());
    }

    let config = RelayConfig::from_env()?;
    let relay = Relay::new(config)?;

    server::serve(relay).await?;
    Ok(())
}
