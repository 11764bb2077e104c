use std::io;

use chrono::{Duration, Local};
use sapak::{ApiKey, FindMessagesOptions, FindMessagesQuery, SapakClient};
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

    let now = Local::now().naive_local();
    let query = FindMessagesQuery::new(FindMessagesOptions {
        page_size: Some(20),
        phone_number: std::env::var("SAPAK_SENDER").ok(),
        from_date: Some(now - Duration::days(7)),
        to_date: Some(now),
        ..Default::default()
    })?;

    let client = SapakClient::new(ApiKey::new(api_key)?)?;
    for message in client.messages().find(&query).await? {
        println!(
            "#{} {} {} -> {}: {}",
            message.id, message.received_at, message.from_number, message.to_number, message.body
        );
    }

    Ok(())
}
