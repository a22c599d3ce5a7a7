//! Reset the configured database to the sample heroes and powers.

use superhero_api::{apply_migrations, connect, seed, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("superhero_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;
    let summary = seed::run(&pool).await?;
    tracing::info!(
        heroes = summary.heroes,
        powers = summary.powers,
        hero_powers = summary.hero_powers,
        "seed complete"
    );
    Ok(())
}
