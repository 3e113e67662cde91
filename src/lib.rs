pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use llm::chat::new_client;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let llm_config = args.llm_config();

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Gemini Model: {}", llm_config.model);
    info!("Gemini Base URL: {}", llm_config.base_url);
    info!("Temperature: {}", llm_config.temperature);
    info!("API Key Set: {}", llm_config.api_key.is_some());
    info!("Static Dir: {}", args.static_dir);
    info!("Index Page: {}", args.index_path);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let client = new_client(&llm_config)?;
    info!("Chat client configured: Model={}", client.get_model());
    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, client, args);
    server.run().await?;

    Ok(())
}
