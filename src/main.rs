#[tokio::main]
async fn main() -> anyhow::Result<()> {
    application_documents::run().await
}
