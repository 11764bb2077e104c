use std::io;

use sapak::{ApiKey, SapakClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("SAPAK_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SAPAK_API_KEY environment variable is required",
        )
    })?;

    let client = SapakClient::new(ApiKey::new(api_key)?)?;
    let credit = client.account().get_credit().await?;

    println!("credit: {}", credit.credit);

    Ok(())
}
