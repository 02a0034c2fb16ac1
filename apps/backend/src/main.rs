#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recital_backend::run().await
}
