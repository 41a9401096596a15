use tracing::warn;

use api_launcher::config::Config;
use api_launcher::process::{ServerCommand, ServerProcess};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    api_launcher::util::init_logging();

    // Read port from environment variable, default to 8000
    let config = Config::from_env();

    // Startup message goes to bare stdout; the platform reads this exact line
    println!("Starting server on port {}", config.port);

    // Run the server in the foreground and adopt its exit code
    let command = ServerCommand::uvicorn(&config);
    let status = ServerProcess::spawn(&command)?.wait().await?;

    let code = match status.code() {
        Some(code) => code,
        None => {
            warn!(status = %status, "Server terminated by signal");
            1
        }
    };
    std::process::exit(code)
}
