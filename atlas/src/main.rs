#[tokio::main]
async fn main() -> anyhow::Result<()> {
    atlas::start_server().await
}
