use anyhow::{Result, bail};
use mokkan_slug::application::{
    SlugInput, SlugService,
    ports::{time::Clock, util::SlugGenerator},
};
use mokkan_slug::config::SlugSettings;
use mokkan_slug::domain::slug::SlugExistenceRepository;
use mokkan_slug::infrastructure::{
    database,
    repositories::{InMemorySlugRepository, SqliteSlugRepository},
    time::SystemClock,
    util::generator_from_name,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Loads `.env` before RUST_LOG is read by the subscriber.
    let settings = SlugSettings::from_env()?;
    init_tracing();

    let values: Vec<String> = std::env::args().skip(1).collect();
    if values.is_empty() {
        bail!(
            "usage: mokkan-slug <value>... (one value per source field: {})",
            settings.source_fields().join(", ")
        );
    }

    let record = settings.source_record(values)?;
    let config = Arc::new(settings.to_config()?);
    let generator: Arc<dyn SlugGenerator> = generator_from_name(settings.generator())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let repo: Arc<dyn SlugExistenceRepository> = match settings.database_url() {
        Some(url) => {
            let pool = Arc::new(database::init_pool(url, 4).await?);
            tracing::info!(table = settings.table(), "checking slugs against sqlite");
            Arc::new(SqliteSlugRepository::new(pool, settings.table())?)
        }
        None => {
            tracing::info!("DATABASE_URL not set; checking against an empty collection");
            Arc::new(InMemorySlugRepository::new())
        }
    };

    let service = SlugService::new(Arc::clone(&config), generator, repo, clock);
    let slug = service.compute_slug(SlugInput::Record(&record), None).await?;
    println!("{slug}");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
