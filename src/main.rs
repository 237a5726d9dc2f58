use anyhow::Result;
use oak::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
