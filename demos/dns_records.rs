use std::io;

use tracing_subscriber::EnvFilter;
use vultr::{ApiKey, DomainName, VultrClient};

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
    let domain_raw = std::env::var("VULTR_DOMAIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VULTR_DOMAIN environment variable is required",
        )
    })?;

    let client = VultrClient::new(ApiKey::new(api_key)?);
    let domain = DomainName::new(domain_raw)?;

    for record in client.dns_records(&domain).await? {
        println!(
            "{} {:<6} {:<20} {} ttl={} priority={}",
            record.id, record.record_type, record.name, record.data, record.ttl, record.priority
        );
    }

    Ok(())
}
