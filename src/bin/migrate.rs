use axum_cart_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
};

/// Applies `migrations/` to `DATABASE_URL` and exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    orm.close().await?;
    Ok(())
}
