#[tokio::main]
async fn main() -> anyhow::Result<()> {
    focusaurus_server::run().await
}
