#[tokio::main]
async fn main() -> anyhow::Result<()> {
    curator::start_server().await
}
