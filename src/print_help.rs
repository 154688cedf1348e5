use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_API_KEY, ENV_API_PREFIX, ENV_BASE_URL, ENV_HOST, ENV_PORT,
    ENV_REFERER, ENV_TITLE, OPENROUTER_API_URL,
};
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " CHAT RELAY ".yellow());
    println!("Usage:");
    println!("  {} [-h]", "chat-relay".bold().green());
    println!("\nEnvironment (a .env file is read first):");
    println!("  {}  OpenRouter key (required).", ENV_API_KEY.bold().red());
    println!(
        "  {}  Upstream base URL (default {}).",
        ENV_BASE_URL.bold().cyan(),
        OPENROUTER_API_URL
    );
    println!(
        "  {}  HTTP-Referer sent upstream.",
        ENV_REFERER.bold().cyan()
    );
    println!("  {}  X-Title sent upstream.", ENV_TITLE.bold().cyan());
    println!(
        "  {}  Listen address (default {}).",
        ENV_HOST.bold().magenta(),
        DEFAULT_HOST
    );
    println!(
        "  {}  Listen port (default {}).",
        ENV_PORT.bold().magenta(),
        DEFAULT_PORT
    );
    println!(
        "  {}  Route prefix, e.g. /api (default none).",
        ENV_API_PREFIX.bold().magenta()
    );
    println!(
        "  {}  Log filter (default info).",
        "RUST_LOG".bold().blue()
    );
    println!("\nEndpoints:");
    println!("  {} <prefix>/chat    {{messages, model}}", "POST".bold().green());
    println!("  {}  <prefix>/models", "GET".bold().green());
    println!("  {}  /health", "GET".bold().green());
    println!("{:━^60}", "".yellow());
}
