use std::io;

use sapak::{ApiKey, SapakClient, SendMessage, SendOptions};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("SAPAK_API_KEY")?;
    let sender = required_env("SAPAK_SENDER")?;
    let recipient = required_env("SAPAK_RECIPIENT")?;
    let text = std::env::var("SAPAK_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sapak demo.".to_owned());
    // RFC3339, e.g. 2025-01-01T10:30:00+03:30
    let send_at = std::env::var("SAPAK_SEND_AT").ok();

    let client = SapakClient::new(ApiKey::new(api_key)?)?;
    let message = SendMessage::new(
        sender,
        [recipient],
        text,
        SendOptions {
            is_flash: false,
            send_at,
        },
    )?;

    for status in client.messages().send(message).await? {
        println!("id: {}, status: {}", status.id, status.status);
    }

    Ok(())
}
