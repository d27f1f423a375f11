use train_api::{serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "train_api=debug,train_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = train_store::Config::load()?;
    tracing::info!(
        "Starting ticket service, price {} per ticket, {:?} receipt numbering",
        config.business_rules.ticket_price,
        config.business_rules.receipt_numbering
    );

    let state = AppState::new(config.business_rules.booking_store());

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    serve(state, listener, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    })
    .await?;

    Ok(())
}
