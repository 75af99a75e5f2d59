//! Calories
//!
//! An MCP server exposing a single calorie burn form.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use calories::mcp::CaloriesService;
use calories::tools::status;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("calories=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    status::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = CaloriesService::new();

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
