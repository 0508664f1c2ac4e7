use anyhow::Result;
use code_hint::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
