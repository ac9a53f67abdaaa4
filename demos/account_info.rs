use std::io;

use tracing_subscriber::EnvFilter;
use vultr::{ApiKey, VultrClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("VULTR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VULTR_API_KEY environment variable is required",
        )
    })?;

    let client = VultrClient::new(ApiKey::new(api_key)?);
    let info = client.account_info().await?;
    println!(
        "balance: {}, pending_charges: {}, last_payment: {} on {}",
        info.balance, info.pending_charges, info.last_payment_amount, info.last_payment_date
    );

    Ok(())
}
