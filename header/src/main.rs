//! Header demo binary
//!
//! Drives the header through a guest visit, a login and a sign-out against
//! in-memory collaborators, printing the rendered view after each step.

use std::sync::Arc;
use storefront_core::environment::SystemClock;
use storefront_core::query::QueryResponse;
use storefront_header::mocks::{MockAuthService, MockGuestStorage, RecordingNavigator};
use storefront_header::types::{CART_QUERY, PROFILE_QUERY};
use storefront_header::{
    CartSummary, HeaderAction, HeaderConfig, HeaderEnvironment, HeaderMode, HeaderReducer,
    HeaderState, HeaderView, ProfilePayload, render,
};
use storefront_runtime::Store;
use storefront_runtime::metrics::MetricsServer;
use storefront_testing::MockQueryClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type HeaderStore = Store<
    HeaderState,
    HeaderAction,
    HeaderEnvironment<MockQueryClient>,
    HeaderReducer<MockQueryClient>,
>;

async fn show(store: &HeaderStore, mode: HeaderMode, config: &HeaderConfig) -> anyhow::Result<()> {
    let view: HeaderView = store.state(|s| render(s, mode, config)).await;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

async fn dispatch(store: &HeaderStore, action: HeaderAction) -> anyhow::Result<()> {
    println!("\n>>> Sending: {action:?}");
    store.send(action).await?.wait().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_header=debug,storefront_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut metrics = MetricsServer::new("127.0.0.1:9090".parse()?);
    metrics.start()?;

    println!("=== Storefront Header ===");

    let config = HeaderConfig::from_env();
    let auth = MockAuthService::logged_out();
    let queries = MockQueryClient::new()
        .with_response(
            PROFILE_QUERY,
            &QueryResponse::ok(
                ProfilePayload::named("Ada", "Lovelace")
                    .with_id("42")
                    .with_avatar("ada.png"),
            ),
        )
        .with_response(CART_QUERY, &QueryResponse::ok(CartSummary::new(12)));

    let env = HeaderEnvironment::new(
        Arc::new(auth.clone()),
        Arc::new(MockGuestStorage::with_guest("guest-7")),
        queries.clone(),
        Arc::new(RecordingNavigator::new()),
        Arc::new(SystemClock),
        config.clone(),
    );
    let store = Store::new(HeaderState::default(), HeaderReducer::new(), env);

    dispatch(&store, HeaderAction::Mounted).await?;
    show(&store, HeaderMode::Guest, &config).await?;

    println!("\n--- user logs in ---");
    auth.set_logged_in(true);
    dispatch(&store, HeaderAction::Refresh).await?;
    show(&store, HeaderMode::Authenticated, &config).await?;

    dispatch(&store, HeaderAction::SignOutClicked).await?;
    show(&store, HeaderMode::Guest, &config).await?;

    println!(
        "\nlogout calls: {}, cart evictions: {}",
        auth.logout_calls(),
        queries.invalidation_count(CART_QUERY)
    );

    if let Some(text) = metrics.render() {
        println!("\n=== Metrics ===\n{text}");
    }

    store.shutdown_default().await?;
    Ok(())
}
