use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use expense_service::config::Config;
use expense_service::domain::expense::service::ExpenseService;
use expense_service::domain::user::service::UserService;
use expense_service::inbound::http::router::create_router;
use expense_service::outbound::repositories::PostgresExpenseRepository;
use expense_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expense_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "expense-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        environment = ?config.server.environment,
        token_lifetime_minutes = config.jwt.expiration_minutes,
        cors_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_token_lifetime(Duration::minutes(config.jwt.expiration_minutes)),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let expense_repository = Arc::new(PostgresExpenseRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let expense_service = Arc::new(ExpenseService::new(expense_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        expense_service,
        authenticator,
        config.server.environment,
        &config.cors.allowed_origins,
    );

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
