use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    launchlink_bridge::run().await?;
    Ok(())
}
