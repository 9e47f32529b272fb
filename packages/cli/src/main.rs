// ABOUTME: Farmlink server binary entry point
// ABOUTME: Delegates to the library's run_server after tokio startup

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farmlink_cli::run_server().await
}
