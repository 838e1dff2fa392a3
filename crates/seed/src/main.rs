use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_seed::config::SeedConfig;
use catalog_seed::seeder;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match seeder::run(&SeedConfig::from_env()).await {
        Ok(report) => tracing::info!(
            removed = report.removed,
            added = report.added,
            skipped = report.skipped.len(),
            "Seeding finished"
        ),
        Err(e) => {
            tracing::error!(error = %e, "Seeding failed");
            std::process::exit(1);
        }
    }
}
