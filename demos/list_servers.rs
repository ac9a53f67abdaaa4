use std::io;
use std::time::Duration;

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

    let client = VultrClient::builder(ApiKey::new(api_key)?)
        .timeout(Duration::from_secs(30))
        .user_agent("vultr-demos/0.1")
        .build()?;

    let regions = client.regions().await?;
    for server in client.servers().await?.values() {
        // Resolved through the plan cache: servers sharing a plan cost one fetch.
        let plan = client.plan(server.plan_id).await?;
        let continent = regions
            .get(&server.region_id)
            .map(|region| region.continent.as_str())
            .unwrap_or("unknown");
        println!(
            "{} {:<20} {:<15} {} ({}) plan: {} at {}/month",
            server.id,
            server.label,
            server.main_ip,
            server.location,
            continent,
            plan.name,
            plan.price_per_month
        );
    }

    Ok(())
}
